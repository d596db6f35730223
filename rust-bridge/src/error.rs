//! Error taxonomy for the bridge.
//!
//! Four terminal classes: authentication failure, transform failure,
//! upstream (carrier) failure and everything else. Nothing is retried;
//! each error maps to exactly one HTTP response to the original caller.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the webhook handlers.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Missing or invalid webhook signature. The message never reveals
    /// which check failed.
    #[error("não autorizado")]
    Auth,

    /// Malformed inbound payload (invalid JSON or unexpected shape).
    #[error("payload inválido: {0}")]
    Transform(String),

    /// The carrier answered with a non-2xx status. The status and body are
    /// relayed verbatim to the caller when a body is available.
    #[error("erro do transportador (HTTP {status})")]
    Upstream {
        /// Upstream HTTP status code
        status: u16,
        /// Raw upstream response body
        body: String,
    },

    /// Network failure, unparseable carrier response or any other local
    /// exception.
    #[error("{0}")]
    Internal(String),
}

/// Caller-facing error envelope.
#[derive(Serialize)]
struct ErrorBody {
    erro: String,
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        match self {
            BridgeError::Auth => erro_response(StatusCode::UNAUTHORIZED, self.to_string()),
            BridgeError::Transform(_) | BridgeError::Internal(_) => {
                erro_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            BridgeError::Upstream { status, body } => {
                if body.is_empty() {
                    return erro_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("erro do transportador (HTTP {status})"),
                    );
                }
                let status = StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (
                    status,
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
                    .into_response()
            }
        }
    }
}

fn erro_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { erro: message })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_is_generic() {
        assert_eq!(BridgeError::Auth.to_string(), "não autorizado");
    }

    #[test]
    fn test_upstream_response_relays_status() {
        let response = BridgeError::Upstream {
            status: 422,
            body: r#"{"error":"invalid cep"}"#.to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_upstream_response_without_body_is_internal() {
        let response = BridgeError::Upstream {
            status: 503,
            body: String::new(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
