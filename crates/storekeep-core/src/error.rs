// ── Core error types ──
//
// User-facing errors from storekeep-core. These are NOT API-specific --
// consumers never see reqwest errors or JSON parse failures directly.
// The `From<storekeep_api::Error>` impl translates transport-layer
// errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the server: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Not signed in -- run `storekeep login` first")]
    NotAuthenticated,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<storekeep_api::Error> for CoreError {
    fn from(err: storekeep_api::Error) -> Self {
        use storekeep_api::Error as Api;
        match err {
            Api::Authentication { message } => Self::AuthenticationFailed { message },
            Api::Unauthorized => Self::NotAuthenticated,
            Api::Transport(e) => Self::ConnectionFailed {
                reason: e.to_string(),
            },
            Api::InvalidUrl(e) => Self::ConnectionFailed {
                reason: e.to_string(),
            },
            Api::Api { status, message } => Self::Api {
                message,
                status: Some(status),
            },
            Api::Deserialization { message, .. } => {
                Self::Internal(format!("unexpected response shape: {message}"))
            }
        }
    }
}
