//! Bearer-token authorization middleware
//!
//! Runs ahead of the catalog handlers and short-circuits with a uniform 401
//! before any business logic executes. The decision itself lives in
//! `pokedex_core::auth`; this adapter only bridges it onto the router.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Axum middleware enforcing the bearer-token gate.
///
/// A non-UTF-8 header value is indistinguishable from a missing one and is
/// denied the same way.
pub async fn require_bearer(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> ApiResult<Response> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if !state.credential.authorize(header_value).is_allowed() {
        debug!("rejected unauthorized request for {}", req.uri().path());
        crate::metrics::record_unauthorized();
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(req).await)
}
