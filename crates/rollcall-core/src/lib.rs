//! # Rollcall Core
//!
//! Core types, errors, and utilities shared by the Rollcall client crates.
//!
//! - [`errors`]: Client error taxonomy and the backend's error body shape
//! - [`decode`]: Typed decoding of raw form text (integers, dates)
//! - [`serde`]: Custom serde helpers for lenient record decoding
//!
//! # Example
//!
//! ```ignore
//! use rollcall_core::decode::parse_integer;
//! use rollcall_core::errors::ClientError;
//!
//! let credits: i32 = parse_integer("4", "Credits")?;
//! let error = ClientError::rejected(400, "Duplicate code");
//! assert_eq!(error.to_string(), "Duplicate code");
//! ```

pub mod decode;
pub mod errors;
pub mod serde;

// Re-export commonly used types at crate root
pub use decode::{DecodeError, parse_datetime, parse_integer};
pub use errors::{ApiErrorBody, ClientError};
