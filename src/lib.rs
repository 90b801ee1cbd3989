//! # Rollcall
//!
//! A typed admin client for a school records REST backend: students, teachers,
//! courses, assignments, and enrollments.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Console commands (list, add, delete-student, seed)
//! ├── forms/            # Field rules and the generic form controller
//! ├── modules/          # One form schema per entity
//! │   ├── students/
//! │   ├── teachers/
//! │   ├── courses/
//! │   ├── assignments/
//! │   └── enrollments/
//! ├── views/            # List views, select options, notices
//! ├── client.rs         # HTTP resource client
//! ├── router.rs         # Navigation table
//! ├── state.rs          # Startup configuration and shared client
//! └── logging.rs        # Tracing subscriber setup
//! ```
//!
//! Data flows one way. A [`views::ListView`] mounts by listing its collection
//! through a [`client::ResourceApi`]. Input goes into the view's
//! [`forms::FormController`], which validates every change against the
//! entity's [`forms::FormSchema`]. On submit the controller decodes the raw
//! text into a typed DTO and the client POSTs it; the returned record is
//! appended to the view.
//!
//! ## Workspace crates
//!
//! - `rollcall-core`: client errors and typed decoding of form text
//! - `rollcall-config`: backend URL and logging settings
//! - `rollcall-models`: records, DTOs, ids, collections
//! - `rollcall-cache`: optional in-memory collection cache
//!
//! ## Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `ROLLCALL_API_URL` | `http://localhost:5555` |
//! | `ROLLCALL_CACHE_ENABLED` | `false` |
//! | `ROLLCALL_CACHE_TTL_SECONDS` | `30` |
//! | `ROLLCALL_CACHE_PREFIX` | `rollcall` |
//! | `LOG_LEVEL` | `info` |
//! | `ROLLCALL_LOG_DIR` | unset |
//!
//! ## Example
//!
//! ```ignore
//! use rollcall::client::HttpClient;
//! use rollcall::modules::CourseSchema;
//! use rollcall::views::ListView;
//! use rollcall_config::ApiConfig;
//!
//! let api = HttpClient::new(&ApiConfig::from_env())?;
//! let mut courses = ListView::<CourseSchema>::new();
//! courses.mount(&api).await?;
//!
//! let form = courses.form_mut();
//! form.change("name", "Algebra I");
//! form.change("course_code", "MATH101");
//! form.change("credits", "4");
//! form.change("teacher_id", "1");
//! courses.submit(&api).await?;
//! ```

pub mod cli;
pub mod client;
pub mod forms;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod views;

// Re-export workspace crates for convenience
pub use rollcall_cache;
pub use rollcall_config;
pub use rollcall_core;
pub use rollcall_models;
