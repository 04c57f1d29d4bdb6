//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use storekeep_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the server")]
    #[diagnostic(
        code(storekeep::connection_failed),
        help("Check that the server is running and the URL is correct.\nReason: {reason}")
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(storekeep::auth_failed),
        help("Verify your email and password, then run: storekeep login")
    )]
    AuthFailed { message: String },

    #[error("Not signed in")]
    #[diagnostic(
        code(storekeep::not_authenticated),
        help("Run: storekeep login\nOr set the STOREKEEP_TOKEN environment variable.")
    )]
    NotAuthenticated,

    // ── Configuration ────────────────────────────────────────────────
    #[error("No server configured")]
    #[diagnostic(
        code(storekeep::no_config),
        help(
            "Create a profile with: storekeep config init --server <URL>\n\
             Or pass --server / set STOREKEEP_SERVER.\n\
             Config path: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(storekeep::validation))]
    Validation { field: String, reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{entity} '{id}' not found")]
    #[diagnostic(code(storekeep::not_found))]
    NotFound { entity: String, id: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(storekeep::api_error))]
    Api { message: String },

    // ── Everything else ──────────────────────────────────────────────
    #[error("{0}")]
    #[diagnostic(code(storekeep::general))]
    General(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NotAuthenticated => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NoConfig { .. } => exit_code::USAGE,
            Self::Api { .. } | Self::General(_) => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { reason } => Self::ConnectionFailed { reason },
            CoreError::AuthenticationFailed { message } => Self::AuthFailed { message },
            CoreError::NotAuthenticated => Self::NotAuthenticated,
            CoreError::NotFound { entity, id } => Self::NotFound {
                entity: entity.to_owned(),
                id,
            },
            CoreError::ValidationFailed { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::Api { status: Some(404), message } => Self::NotFound {
                entity: "Resource".into(),
                id: message,
            },
            CoreError::Api { message, .. } => Self::Api {
                message: format!("API error: {message}"),
            },
            CoreError::Internal(message) => Self::General(message),
        }
    }
}

impl From<storekeep_config::ConfigError> for CliError {
    fn from(err: storekeep_config::ConfigError) -> Self {
        match err {
            storekeep_config::ConfigError::NoToken { .. } => Self::NotAuthenticated,
            storekeep_config::ConfigError::Validation { field, reason } => {
                Self::Validation { field, reason }
            }
            other => Self::General(other.to_string()),
        }
    }
}
