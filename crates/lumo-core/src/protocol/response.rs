//! Outbound bodies: action results, health probe, errors.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::LumoError;

/// Status tag of a successful action.
pub const STATUS_SUCCESS: &str = "success";
/// Status tag when no handler matches the action name.
pub const STATUS_UNKNOWN_ACTION: &str = "unknown_action";

/// Result of a dispatched action.
///
/// Serializes flat: `{"status": ..., <action-specific field>}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// `{"status":"success","items":[...]}`
    Items(Vec<Value>),
    /// `{"status":"success","design_id":"..."}`
    Design { design_id: String },
    /// `{"status":"success","shippers":[...]}`
    Shippers(Vec<Value>),
    /// `{"status":"unknown_action"}`
    UnknownAction,
}

impl ActionResult {
    pub fn status(&self) -> &'static str {
        match self {
            ActionResult::UnknownAction => STATUS_UNKNOWN_ACTION,
            _ => STATUS_SUCCESS,
        }
    }
}

impl Serialize for ActionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = match self {
            ActionResult::UnknownAction => 1,
            _ => 2,
        };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("status", self.status())?;
        match self {
            ActionResult::Items(items) => map.serialize_entry("items", items)?,
            ActionResult::Design { design_id } => map.serialize_entry("design_id", design_id)?,
            ActionResult::Shippers(shippers) => map.serialize_entry("shippers", shippers)?,
            ActionResult::UnknownAction => {}
        }
        map.end()
    }
}

/// Body of `GET /health`. Constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub protected: bool,
}

impl HealthStatus {
    pub const HEALTHY: HealthStatus = HealthStatus {
        status: "healthy",
        protected: true,
    };
}

/// JSON error body: `{"code": "FORBIDDEN", "detail": "PII blocked"}`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub detail: String,
}

impl From<&LumoError> for ErrorBody {
    fn from(err: &LumoError) -> Self {
        Self {
            code: err.client_code().as_str(),
            detail: err.client_detail(),
        }
    }
}
