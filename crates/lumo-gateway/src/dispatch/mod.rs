//! Dispatcher module exports.

pub mod action;
pub mod dispatcher;

pub use action::Action;
pub use dispatcher::Dispatcher;
