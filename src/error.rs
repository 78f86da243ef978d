//! Error types for the E3DB CLI
//!
//! Every fallible operation in the crate returns [`Result<T>`]. Messages are
//! written to be printed after a `e3db-cli: <command>: ` prefix.

use thiserror::Error;

/// The main error type for the E3DB CLI
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration and Profiles
    // ============================================================================
    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("profile is missing required field {field}")]
    MissingConfigField { field: String },

    #[error("profile {name} not found")]
    ProfileNotFound { name: String },

    #[error("profile {name} already registered")]
    ProfileExists { name: String },

    #[error("invalid profile name '{name}': {message}")]
    InvalidProfile { name: String, message: String },

    #[error("failed to save profile {name}: {message}")]
    SaveProfile { name: String, message: String },

    #[error("invalid e-mail address '{email}'")]
    InvalidEmail { email: String },

    // ============================================================================
    // Service Errors
    // ============================================================================
    #[error("authentication failed: {message}")]
    Auth { message: String },

    #[error("registration failed: {message}")]
    Registration { message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Records
    // ============================================================================
    #[error("record {record_id} not found")]
    RecordNotFound { record_id: String },

    #[error("unexpected response: {message}")]
    Decode { message: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Local I/O
    // ============================================================================
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    pub fn invalid_profile(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wrap a persistence failure so it names the save step
    pub fn save_profile(name: impl Into<String>, source: &Error) -> Self {
        Self::SaveProfile {
            name: name.into(),
            message: source.to_string(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn registration(message: impl Into<String>) -> Self {
        Self::Registration {
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether the error means the requested thing does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::RecordNotFound { .. } | Error::ProfileNotFound { .. } => true,
            Error::HttpStatus { status, .. } => *status == 404,
            _ => false,
        }
    }
}

/// Result type alias for the E3DB CLI
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for prefixing errors with what was being attempted
pub trait ResultExt<T> {
    /// Prefix the error with a message built only on failure
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Other(format!("{}: {}", f(), e.into())))
    }
}
