//! Lumo gateway library entry.
//!
//! Wires the HTTP transport, the request gate, the action dispatcher, and
//! the operational endpoints into one axum router. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod router;
pub mod services;
pub mod transport;
