//! Error types for the HTTP API
//!
//! Two error classes reach the wire: a uniform 401 from the auth gate and a
//! 500 from the terminal responder, whose detail is gated by the
//! environment mode.

use crate::config::Environment;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;
use std::fmt;
use tower_http::catch_panic::ResponseForPanic;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Credential check failed (401); the body never names the expected
    /// token.
    Unauthorized,

    /// Unhandled failure (500); detail is shown only outside production.
    Internal {
        /// What actually went wrong.
        detail: String,
        /// Whether the detail may appear in the response body.
        expose: bool,
    },
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Internal error whose visibility follows the environment mode.
    pub fn internal(detail: impl Into<String>, environment: Environment) -> Self {
        ApiError::Internal {
            detail: detail.into(),
            expose: !environment.is_production(),
        }
    }
}

/// 401 body: `{"error": "Unauthorized request"}`
#[derive(Serialize)]
struct UnauthorizedBody {
    error: &'static str,
}

/// 500 body: `{"error": {"message": ...}}`
#[derive(Serialize)]
struct ServerErrorBody {
    error: ServerErrorMessage,
}

#[derive(Serialize)]
struct ServerErrorMessage {
    message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Unauthorized request"),
            ApiError::Internal { detail, .. } => write!(f, "Internal error: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(UnauthorizedBody {
                    error: "Unauthorized request",
                }),
            )
                .into_response(),
            ApiError::Internal { detail, expose } => {
                let message = if expose {
                    detail
                } else {
                    "server error".to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ServerErrorBody {
                        error: ServerErrorMessage { message },
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Terminal responder for panics escaping a handler.
///
/// Installed at the outermost middleware layer; once invoked the
/// request/response cycle ends with a 500.
#[derive(Clone, Copy)]
pub struct PanicResponder {
    environment: Environment,
}

impl PanicResponder {
    /// Responder for the given environment mode.
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let detail = if let Some(message) = err.downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = err.downcast_ref::<&str>() {
            (*message).to_string()
        } else {
            "unhandled failure".to_string()
        };

        tracing::error!("request handler panicked: {}", detail);

        ApiError::internal(detail, self.environment).into_response()
    }
}
