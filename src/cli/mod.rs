//! Admin console commands. Each one drives the same list views and client a
//! front end would.

pub mod prompt;
pub mod seeder;

use anyhow::{Context, bail};
use rollcall_models::Collection;

use crate::client::ResourceApi;
use crate::forms::FormSchema;
use crate::modules::{
    AssignmentSchema, CourseSchema, EnrollmentSchema, StudentSchema, TeacherSchema,
};
use crate::router::{DASHBOARD_CARDS, ROUTES, Route};
use crate::views::{Confirm, DeleteOutcome, ListView};

use self::prompt::{AddOutcome, add_interactively};

/// Prints every record of a collection.
pub async fn list_collection<A>(api: &A, collection: Collection) -> anyhow::Result<()>
where
    A: ResourceApi,
{
    match collection {
        Collection::Students => list::<StudentSchema, A>(api).await,
        Collection::Teachers => list::<TeacherSchema, A>(api).await,
        Collection::Courses => list::<CourseSchema, A>(api).await,
        Collection::Assignments => list::<AssignmentSchema, A>(api).await,
        Collection::Enrollments => list::<EnrollmentSchema, A>(api).await,
    }
}

async fn list<S: FormSchema, A: ResourceApi>(api: &A) -> anyhow::Result<()> {
    let mut view = ListView::<S>::new();
    if let Err(e) = view.mount(api).await {
        if let Some(notice) = view.take_notice() {
            eprintln!("❌ {}", notice);
        }
        return Err(e).context(format!("failed to load {}", S::collection()));
    }

    println!("{}", S::HEADING);
    if view.is_empty() {
        println!("{}", S::EMPTY_MESSAGE);
        return Ok(());
    }
    for row in view.rows() {
        println!("{}", row);
    }
    Ok(())
}

/// Prompts for a new record and creates it.
pub async fn add_record<A>(api: &A, collection: Collection) -> anyhow::Result<()>
where
    A: ResourceApi,
{
    match collection {
        Collection::Students => add::<StudentSchema, A>(api).await,
        Collection::Teachers => add::<TeacherSchema, A>(api).await,
        Collection::Courses => add::<CourseSchema, A>(api).await,
        Collection::Assignments => add::<AssignmentSchema, A>(api).await,
        Collection::Enrollments => add::<EnrollmentSchema, A>(api).await,
    }
}

async fn add<S: FormSchema, A: ResourceApi>(api: &A) -> anyhow::Result<()> {
    let mut view = ListView::<S>::new();
    if let Err(e) = view.mount(api).await {
        if let Some(notice) = view.take_notice() {
            eprintln!("❌ {}", notice);
        }
        return Err(e).context(format!("failed to load {}", S::collection()));
    }

    match add_interactively(&mut view, api).await? {
        AddOutcome::Created(record) => {
            if let Some(notice) = view.take_notice() {
                println!("\n✅ {}", notice);
            }
            println!("{}", S::row(&record));
            Ok(())
        }
        AddOutcome::Abandoned(err) => bail!(
            "{} was not created: {}",
            S::collection().entity_name(),
            err
        ),
    }
}

/// Deletes one student, asking first unless `confirm` always agrees.
pub async fn delete_student<A, C>(api: &A, id: i64, confirm: &C) -> anyhow::Result<()>
where
    A: ResourceApi,
    C: Confirm + ?Sized,
{
    let mut view = ListView::<StudentSchema>::new();
    match view.delete(api, id, confirm).await {
        DeleteOutcome::Deleted => {
            println!("✅ Student {} deleted", id);
            Ok(())
        }
        DeleteOutcome::Declined => {
            println!("Cancelled");
            Ok(())
        }
        DeleteOutcome::Failed(err) => {
            if let Some(notice) = view.take_notice() {
                eprintln!("❌ {}", notice);
            }
            Err(err).context(format!("failed to delete student {}", id))
        }
    }
}

/// Prints the navigation table and the dashboard cards.
pub fn print_routes() {
    for route in ROUTES {
        println!("{}", route);
    }
    println!();
    for (collection, blurb) in DASHBOARD_CARDS {
        println!("{:<14} {}", Route::List(collection).title(), blurb);
    }
}
