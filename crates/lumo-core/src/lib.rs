//! Lumo core: transport-agnostic wire types and the shared error surface.
//!
//! This crate defines the request/response contracts of the action endpoint
//! and the client-facing error codes. It carries no transport or runtime
//! dependencies so the gateway, tests, and any client tooling can share it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `LumoError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{LumoError, Result};
