use serde::{Deserialize, Serialize};

/// JSON body the backend returns for any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Errors produced by a single request against the records backend.
///
/// None of these are fatal to the caller: each one is scoped to the list or
/// form interaction that issued the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status. `message` is the server's
    /// `error` field, verbatim.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (refused connection, DNS, reset).
    #[error("connectivity error: {0}")]
    Connectivity(String),

    /// A 2xx response whose body did not match the expected record shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built (bad base URL, client construction).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn connectivity<E>(err: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Connectivity(err.to_string())
    }

    pub fn decode<E>(err: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Decode(err.to_string())
    }

    pub fn invalid_request<E>(err: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::InvalidRequest(err.to_string())
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server-supplied message, if the server answered at all.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}
