//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid arguments to graph operations)
//! - 3: Data error (bad configuration or input data)
//!
//! Absence of a route is never an error: cost queries return
//! [`Cost::UNREACHABLE`](crate::graph::Cost::UNREACHABLE) and path queries
//! return an empty [`Path`](crate::path::Path).

mod macros;

use thiserror::Error;

/// Exit codes for the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable or invalid input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph construction and search
#[derive(Error, Debug)]
pub enum WaypathError {
    /// An argument referenced something that does not exist, e.g. an edge
    /// endpoint or search source missing from the graph
    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },

    #[error("index {index} out of range for path of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The requested operation cannot run in the current state, e.g. a
    /// priority search without any vertex ordering
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WaypathError {
    /// Create an error for an invalid argument
    pub fn invalid_argument(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::InvalidArgument {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex that is not part of the graph
    pub fn vertex_not_found(vertex: impl std::fmt::Debug) -> Self {
        WaypathError::InvalidArgument {
            context: "vertex (not in graph)".to_string(),
            value: format!("{:?}", vertex),
        }
    }

    /// Create an error for an operation that cannot run in the current state
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        WaypathError::InvalidState(reason.into())
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::InvalidArgument { .. }
            | WaypathError::IndexOutOfRange { .. }
            | WaypathError::UsageError(_)
            | WaypathError::UnknownFormat(_) => ExitCode::Usage,

            WaypathError::Toml(_) | WaypathError::Json(_) => ExitCode::Data,

            WaypathError::InvalidState(_) | WaypathError::Io(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WaypathError::InvalidArgument { .. } => "invalid_argument",
            WaypathError::IndexOutOfRange { .. } => "index_out_of_range",
            WaypathError::InvalidState(_) => "invalid_state",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::Io(_) => "io_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
