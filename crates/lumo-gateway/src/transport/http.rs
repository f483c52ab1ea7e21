//! `/execute` handler.
//!
//! Pipeline per request: decode body -> gate -> dispatch -> JSON result.
//! A gate rejection short-circuits with 403 before any handler runs.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use lumo_core::{
    error::{LumoError, Result},
    protocol::{ActionRequest, ActionResult, ErrorBody},
};

use crate::app_state::AppState;
use crate::dispatch::Action;
use crate::policy::{self, GateDecision};
use crate::transport::codec;

/// Boundary wrapper turning `LumoError` into a JSON error response.
#[derive(Debug)]
pub struct ApiError(pub LumoError);

impl From<LumoError> for ApiError {
    fn from(e: LumoError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let LumoError::Internal(_) = &self.0 {
            tracing::error!(error = %self.0, "internal error");
        }
        let status = StatusCode::from_u16(self.0.client_code().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}

pub async fn execute(
    State(app): State<AppState>,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<Json<ActionResult>, ApiError> {
    let req = match read_body(&headers, body, app.cfg().gateway.max_body_bytes) {
        Ok(req) => req,
        Err(e) => {
            app.metrics()
                .decode_errors
                .inc(&[("code", e.client_code().as_str())]);
            tracing::debug!(error = %e, "request body rejected");
            return Err(e.into());
        }
    };

    let span = tracing::info_span!("execute", action = %req.action);
    let result = span.in_scope(|| process(&app, &req))?;
    Ok(Json(result))
}

fn read_body(
    headers: &HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
    max_body_bytes: usize,
) -> Result<ActionRequest> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|v| {
            v.to_str()
                .map_err(|_| LumoError::BadRequest("content type is not valid text".into()))
        })
        .transpose()?;
    codec::check_content_type(content_type)?;

    let bytes = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            LumoError::PayloadTooLarge
        } else {
            LumoError::BadRequest(rejection.body_text())
        }
    })?;
    codec::decode(&bytes, max_body_bytes)
}

/// Gate then dispatch. No handler runs for a rejected request.
pub fn process(app: &AppState, req: &ActionRequest) -> Result<ActionResult> {
    let metrics = app.metrics();

    let decision = policy::check(&req.data);
    match &decision {
        GateDecision::Pass => metrics.gate_decisions.inc(&[("decision", "allow")]),
        GateDecision::Reject { marker, .. } => {
            metrics.gate_decisions.inc(&[("decision", "reject")]);
            tracing::warn!(marker = *marker, "request blocked by gate");
        }
    }
    decision.into_result()?;

    let action = Action::parse(&req.action);
    let started = Instant::now();
    let result = app.dispatcher().dispatch(&action, &req.data);
    metrics
        .dispatch_duration
        .observe(&[("action", action.label())], started.elapsed());
    metrics
        .actions
        .inc(&[("action", action.label()), ("status", result.status())]);

    tracing::info!(status = result.status(), "action completed");
    Ok(result)
}
