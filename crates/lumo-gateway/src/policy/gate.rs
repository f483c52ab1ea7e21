//! Request gate: blocklist scan over the flattened payload.
//!
//! Runs before dispatch on every request. Any marker occurring anywhere in the
//! flattened text rejects the whole request. This over-blocks (a key such as
//! `password_reset_flag` trips it) and that imprecision is kept as is: the
//! match is on the full flattened text, never field-aware.

use lumo_core::error::{LumoError, Result};
use lumo_core::protocol::Payload;

use super::flatten::flatten;

/// Sensitive-field markers (lowercase, matched as substrings).
pub const BLOCKLIST: [&str; 3] = ["ssn", "credit_card", "password"];

/// Reason returned to the caller on rejection.
pub const PII_BLOCKED: &str = "PII blocked";

/// Decision from the gate. A rejection is always `Forbidden` at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    Reject {
        msg: &'static str,
        /// First blocklist marker found; for logs only.
        marker: &'static str,
    },
}

impl GateDecision {
    pub fn is_pass(&self) -> bool {
        matches!(self, GateDecision::Pass)
    }

    /// Boundary translation: a rejection becomes a client-visible error.
    pub fn into_result(self) -> Result<()> {
        match self {
            GateDecision::Pass => Ok(()),
            GateDecision::Reject { msg, .. } => Err(LumoError::Forbidden(msg)),
        }
    }
}

/// Scan `payload` against the blocklist.
pub fn check(payload: &Payload) -> GateDecision {
    let text = flatten(payload);
    match first_marker(&text) {
        Some(marker) => GateDecision::Reject {
            msg: PII_BLOCKED,
            marker,
        },
        None => GateDecision::Pass,
    }
}

/// First blocklist marker contained in already-lowercased `text`.
pub fn first_marker(text: &str) -> Option<&'static str> {
    BLOCKLIST.iter().copied().find(|m| text.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_core::error::ClientCode;
    use serde_json::{json, Value};

    fn payload(v: Value) -> Payload {
        match v {
            Value::Object(m) => m,
            _ => Payload::new(),
        }
    }

    #[test]
    fn empty_payload_passes() {
        assert_eq!(check(&Payload::new()), GateDecision::Pass);
    }

    #[test]
    fn marker_in_value_rejects() {
        let d = check(&payload(json!({ "note": "user password is 1234" })));
        assert_eq!(
            d,
            GateDecision::Reject {
                msg: PII_BLOCKED,
                marker: "password",
            }
        );
    }

    #[test]
    fn marker_in_key_rejects_case_insensitive() {
        assert!(!check(&payload(json!({ "Credit_Card": "" }))).is_pass());
        assert!(!check(&payload(json!({ "SSN": 1 }))).is_pass());
    }

    #[test]
    fn benign_key_containing_marker_is_over_blocked() {
        assert!(!check(&payload(json!({ "password_reset_flag": false }))).is_pass());
        assert!(!check(&payload(json!({ "classname": "lessnotes" }))).is_pass());
    }

    #[test]
    fn escaped_control_character_completes_marker() {
        let d = check(&payload(json!({ "a": "\u{000c}redit_card" })));
        assert_eq!(
            d,
            GateDecision::Reject {
                msg: PII_BLOCKED,
                marker: "credit_card",
            }
        );
    }

    #[test]
    fn nested_marker_rejects() {
        let p = payload(json!({ "a": { "b": [ { "c": "my ssn" } ] } }));
        assert!(!check(&p).is_pass());
    }

    #[test]
    fn clean_payload_passes() {
        let p = payload(json!({ "region": "us", "sku": ["a-1", "b-2"], "qty": 3 }));
        assert!(check(&p).is_pass());
    }

    #[test]
    fn rejection_maps_to_forbidden_error() {
        let err = check(&payload(json!({ "x": "ssn" })))
            .into_result()
            .expect_err("must reject");
        assert_eq!(err.client_code(), ClientCode::Forbidden);
        assert_eq!(err.client_detail(), PII_BLOCKED);
    }
}
