//! Navigation table: which page answers which path.

use rollcall_models::Collection;
use std::fmt;

/// A page of the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    /// The list view of one collection.
    List(Collection),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::List(collection) => collection.path(),
        }
    }

    /// Navigation link text.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::List(Collection::Students) => "Students",
            Self::List(Collection::Teachers) => "Teachers",
            Self::List(Collection::Courses) => "Courses",
            Self::List(Collection::Assignments) => "Assignments",
            Self::List(Collection::Enrollments) => "Enroll Students",
        }
    }

    pub fn collection(&self) -> Option<Collection> {
        match self {
            Self::Dashboard => None,
            Self::List(collection) => Some(*collection),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<14} {}", self.path(), self.title())
    }
}

/// Every route, in navigation order.
pub const ROUTES: [Route; 6] = [
    Route::Dashboard,
    Route::List(Collection::Students),
    Route::List(Collection::Teachers),
    Route::List(Collection::Courses),
    Route::List(Collection::Assignments),
    Route::List(Collection::Enrollments),
];

/// Looks up the route for a path. A trailing slash is ignored.
pub fn resolve(path: &str) -> Option<Route> {
    let path = path.trim();
    let normalized = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    ROUTES.into_iter().find(|route| route.path() == normalized)
}

/// Dashboard cards, each linking to a list.
pub const DASHBOARD_CARDS: [(Collection, &str); 3] = [
    (Collection::Students, "Manage student records and information"),
    (Collection::Teachers, "View teacher profiles and courses"),
    (Collection::Courses, "Browse available courses"),
];
