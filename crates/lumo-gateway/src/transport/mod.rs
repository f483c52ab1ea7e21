//! Transport layer (HTTP).
//!
//! Exposes the `/execute` handler and the codec that decodes the body once
//! before it reaches the gate and dispatcher.

pub mod codec;
pub mod http;
