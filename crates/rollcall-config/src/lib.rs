//! # Rollcall Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`api`]: Backend base URL
//! - [`log`]: Log level and optional file output
//!
//! Each config is resolved once at startup and handed to the components that
//! need it; nothing reads the environment per request.
//!
//! # Example
//!
//! ```ignore
//! use rollcall_config::{ApiConfig, LogConfig};
//!
//! let api = ApiConfig::from_env();
//! let log = LogConfig::from_env();
//! println!("talking to {}", api.base_url);
//! ```

pub mod api;
pub mod log;

pub use api::ApiConfig;
pub use log::LogConfig;
