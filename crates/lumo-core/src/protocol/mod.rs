//! Wire protocol for the action endpoint.
//!
//! - `request`: inbound `ActionRequest` (JSON object with `action` and `data`)
//! - `response`: outbound `ActionResult`, health body, and error body

pub mod request;
pub mod response;

pub use request::{ActionRequest, Payload};
pub use response::{ActionResult, ErrorBody, HealthStatus};
