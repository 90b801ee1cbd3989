//! Strongly-typed ID newtypes for backend records.
//!
//! The backend assigns integer primary keys. Wrapping them per entity keeps a
//! `CourseId` from being passed where a `TeacherId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use rollcall_models::ids::{CourseId, TeacherId};
//!
//! fn courses_taught_by(id: TeacherId) { /* ... */ }
//!
//! let teacher = TeacherId::new(4);
//! courses_taught_by(teacher);      // OK
//! // courses_taught_by(CourseId::new(4)); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed integer ID newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw backend id.
            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Student records.
    StudentId
);

define_id!(
    /// Strongly-typed ID for Teacher records.
    TeacherId
);

define_id!(
    /// Strongly-typed ID for Course records.
    CourseId
);

define_id!(
    /// Strongly-typed ID for Assignment records.
    AssignmentId
);

define_id!(
    /// Strongly-typed ID for Enrollment records.
    EnrollmentId
);
