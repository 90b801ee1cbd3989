use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use rollcall::cli::{self, prompt::TerminalConfirm, seeder};
use rollcall::logging::init_tracing;
use rollcall::state::init_app_state;
use rollcall_config::LogConfig;
use rollcall_models::Collection;

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Rollcall - admin console for the school records backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every record of a collection
    List {
        /// students, teachers, courses, assignments, or enrollments
        collection: Collection,
    },
    /// Fill in the creation form for a collection and submit it
    Add { collection: Collection },
    /// Delete a student by id
    DeleteStudent {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Show the navigation table
    Routes,
    /// Create fake teachers, students, courses, enrollments, and assignments
    Seed {
        #[arg(long, default_value = "10")]
        students: usize,

        #[arg(long, default_value = "8")]
        teachers: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let log_config = LogConfig::from_env();
    init_tracing(&log_config)?;
    let state = init_app_state(log_config)?;

    let api = &state.client;
    match cli.command {
        Commands::List { collection } => cli::list_collection(api, collection).await,
        Commands::Add { collection } => cli::add_record(api, collection).await,
        Commands::DeleteStudent { id, yes } => {
            if yes {
                cli::delete_student(api, id, &|_: &str| true).await
            } else {
                cli::delete_student(api, id, &TerminalConfirm).await
            }
        }
        Commands::Routes => {
            cli::print_routes();
            Ok(())
        }
        Commands::Seed { students, teachers } => {
            let summary = seeder::seed(api, seeder::SeedCounts { students, teachers }).await?;
            println!("\n✅ Created {}", summary);
            Ok(())
        }
    }
}
