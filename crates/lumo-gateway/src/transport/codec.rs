//! Decode-once codec for `/execute` bodies.
//!
//! - Content-Type must be JSON when present (`application/json`, `application/*+json`)
//! - Length check first (cheap), then JSON parse into `ActionRequest`
//! - Any parse or shape failure is `BadRequest`, never `Forbidden`

use bytes::Bytes;
use lumo_core::{
    error::{LumoError, Result},
    protocol::ActionRequest,
};

/// A missing header is read as JSON; anything else must name a JSON media type.
pub fn check_content_type(value: Option<&str>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let is_json = match essence.split_once('/') {
        Some(("application", sub)) => sub == "json" || sub.ends_with("+json"),
        _ => false,
    };
    if is_json {
        Ok(())
    } else {
        Err(LumoError::BadRequest(format!("unsupported content type: {value}")))
    }
}

pub fn decode(body: &Bytes, max_body_bytes: usize) -> Result<ActionRequest> {
    if body.len() > max_body_bytes {
        return Err(LumoError::PayloadTooLarge);
    }
    if body.is_empty() {
        return Err(LumoError::BadRequest("empty request body".into()));
    }
    ActionRequest::from_json_slice(body)
}
