//! Webhook endpoint handlers.
//!
//! Each handler walks the same three stages:
//! 1. Verify the signature against the raw body bytes
//! 2. Parse and map the payload into the carrier schema
//! 3. Forward to the carrier and relay its answer
//!
//! The raw `Bytes` body is extracted before any JSON parsing so that
//! verification hashes exactly what the sender signed.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::BridgeError;
use crate::jadlog::JadlogClient;
use crate::transform::{map_order, map_quote, normalize_quotes};
use crate::web::signature::{verify_signature, SIGNATURE_HEADER};
use crate::yampi::{InboundOrder, InboundQuoteRequest};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub jadlog: JadlogClient,
}

impl AppState {
    pub fn new(config: Config, jadlog: JadlogClient) -> Self {
        Self {
            config: Arc::new(config),
            jadlog,
        }
    }
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "Middleware Jadlog ativo"
}

/// Caller-facing envelope for a forwarded order.
#[derive(Serialize)]
pub struct OrderAccepted {
    pub sucesso: bool,
    pub resposta: serde_json::Value,
}

/// Verify the webhook signature against the raw body.
///
/// Rejects when no secret is configured, when the header is absent and when
/// the digest does not match, always with the same generic error.
fn authenticate(state: &AppState, headers: &HeaderMap, raw_body: &[u8]) -> Result<(), BridgeError> {
    let secret = match state.config.yampi_secret.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            warn!("yampi_secret_not_configured");
            return Err(BridgeError::Auth);
        }
    };

    let signature = match headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(sig) => sig,
        None => {
            warn!("yampi_signature_header_missing");
            return Err(BridgeError::Auth);
        }
    };

    if !verify_signature(secret, raw_body, signature) {
        return Err(BridgeError::Auth);
    }

    Ok(())
}

/// Order webhook endpoint (`POST /envio-pedido`).
pub async fn order_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, BridgeError> {
    info!(body_length = body.len(), "order_webhook_received");

    authenticate(&state, &headers, &body)?;

    let inbound: InboundOrder =
        serde_json::from_slice(&body).map_err(|e| BridgeError::Transform(e.to_string()))?;

    let request = map_order(&inbound, &state.config);
    info!(
        pedido = %request.pedido[0],
        tot_peso = request.tot_peso,
        tot_valor = request.tot_valor,
        modalidade = request.modalidade,
        "order_mapped"
    );

    let resposta = state.jadlog.incluir_pedido(&request).await?;

    info!(pedido = %request.pedido[0], "order_forwarded");

    Ok((
        StatusCode::OK,
        Json(OrderAccepted {
            sucesso: true,
            resposta,
        }),
    ))
}

/// Quote webhook endpoint (`POST /cotacao`).
pub async fn quote_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, BridgeError> {
    info!(body_length = body.len(), "quote_webhook_received");

    authenticate(&state, &headers, &body)?;

    let inbound: InboundQuoteRequest =
        serde_json::from_slice(&body).map_err(|e| BridgeError::Transform(e.to_string()))?;

    let request = map_quote(&inbound, &state.config);
    info!(
        cepdes = %request.frete[0].cepdes,
        peso = request.frete[0].peso,
        "quote_mapped"
    );

    let response = state.jadlog.cotar_frete(&request).await?;
    let quotes = normalize_quotes(&response, state.config.modalidade);

    info!(quote_count = quotes.quotes.len(), "quote_forwarded");

    Ok((StatusCode::OK, Json(quotes)))
}
