//! Built-in action handlers.
//!
//! Each handler accepts the (already gated) payload and returns a canned
//! result. None of them read the payload yet.

pub mod design;
pub mod inventory;
pub mod shipping;
