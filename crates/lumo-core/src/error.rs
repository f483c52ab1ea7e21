//! Shared error type across Lumo crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request body.
    BadRequest,
    /// Refused by the request gate.
    Forbidden,
    /// Payload too large.
    PayloadTooLarge,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Forbidden => "FORBIDDEN",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status code the boundary answers with.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest => 400,
            ClientCode::Forbidden => 403,
            ClientCode::PayloadTooLarge => 413,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LumoError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum LumoError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("forbidden: {0}")]
    Forbidden(&'static str),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("internal: {0}")]
    Internal(String),
}

impl LumoError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LumoError::BadRequest(_) => ClientCode::BadRequest,
            LumoError::Forbidden(_) => ClientCode::Forbidden,
            LumoError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            LumoError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message safe to show to the caller.
    ///
    /// Internal details stay in the logs; the caller only sees a generic text.
    pub fn client_detail(&self) -> String {
        match self {
            LumoError::BadRequest(msg) => msg.clone(),
            LumoError::Forbidden(reason) => (*reason).to_string(),
            LumoError::PayloadTooLarge => "payload too large".to_string(),
            LumoError::Internal(_) => "internal server error".to_string(),
        }
    }
}
