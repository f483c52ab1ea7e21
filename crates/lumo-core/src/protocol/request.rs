//! Inbound action request (JSON).

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{LumoError, Result};

/// Free-form request payload. Key order follows the body as sent.
pub type Payload = Map<String, Value>;

/// Body of `POST /execute`.
///
/// Extra top-level fields are ignored. `data` defaults to an empty object
/// but must be an object when present (`null` is rejected).
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    /// Action identifier (open string space; unknown names are not errors).
    pub action: String,
    /// Payload scanned by the gate and handed to the action handler.
    #[serde(default)]
    pub data: Payload,
}

impl ActionRequest {
    pub fn new(action: impl Into<String>, data: Payload) -> Self {
        Self {
            action: action.into(),
            data,
        }
    }

    /// Parse a request body. Any syntax or shape problem is a `BadRequest`.
    pub fn from_json_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| LumoError::BadRequest(format!("invalid request body: {e}")))
    }
}
