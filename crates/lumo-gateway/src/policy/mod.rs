//! Policy layer (request gate).
//!
//! Flattens the request payload and scans it against the fixed blocklist
//! before anything is dispatched.

pub mod flatten;
pub mod gate;

pub use gate::{check, GateDecision, BLOCKLIST, PII_BLOCKED};
