//! Backend collection names and the record contract shared by all entities.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named backend resource set exposed via list/create/delete endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Students,
    Teachers,
    Courses,
    Assignments,
    Enrollments,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Students,
        Collection::Teachers,
        Collection::Courses,
        Collection::Assignments,
        Collection::Enrollments,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Teachers => "teachers",
            Self::Courses => "courses",
            Self::Assignments => "assignments",
            Self::Enrollments => "enrollments",
        }
    }

    /// Request path relative to the backend base URL.
    pub fn path(&self) -> String {
        format!("/{}", self.as_str())
    }

    /// Path of a single record, used for deletes.
    pub fn item_path(&self, id: i64) -> String {
        format!("/{}/{}", self.as_str(), id)
    }

    /// Singular display name, e.g. "Course".
    pub const fn entity_name(&self) -> &'static str {
        match self {
            Self::Students => "Student",
            Self::Teachers => "Teacher",
            Self::Courses => "Course",
            Self::Assignments => "Assignment",
            Self::Enrollments => "Enrollment",
        }
    }

    /// Only students can be deleted through the backend.
    pub const fn supports_delete(&self) -> bool {
        matches!(self, Self::Students)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection `{0}` (expected one of: students, teachers, courses, assignments, enrollments)")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().trim_start_matches('/').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

/// A backend-owned record as returned by list and create.
pub trait Record: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// The collection this record lives in.
    const COLLECTION: Collection;

    /// The backend-assigned primary key.
    fn record_id(&self) -> i64;
}
