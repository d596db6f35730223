//! Web server module for handling inbound webhooks.
//!
//! This module provides a thin server that:
//! - Receives order and quote webhooks from Yampi
//! - Verifies the HMAC signature over the raw body
//! - Forwards the mapped payload to the Jadlog API
//! - Relays the carrier's answer (or a translated error) to the caller

pub mod handlers;
pub mod signature;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use handlers::{health, order_webhook, quote_webhook, AppState, OrderAccepted};
pub use signature::{compute_signature, verify_signature, SIGNATURE_HEADER};

/// Build the application router.
///
/// Shared by the binary and the integration tests so both exercise the
/// same routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/envio-pedido", post(handlers::order_webhook))
        .route("/cotacao", post(handlers::quote_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
