//! Top-level facade crate for Lumo.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use lumo_core::*;
}

pub mod gateway {
    pub use lumo_gateway::*;
}
