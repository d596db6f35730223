//! HTTP client for the Jadlog embarcador API.
//!
//! One `reqwest::Client` is built at startup and shared across requests.
//! A single best-effort POST per inbound request: no retry, no backoff,
//! no timeout beyond the client's default.

use reqwest::Client;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::BridgeError;
use crate::jadlog::types::{CarrierQuoteResponse, OrderRequest, QuoteRequest};

/// Order creation endpoint path.
pub const ORDER_PATH: &str = "/embarcador/api/pedido/incluir";

/// Shipping quote endpoint path.
pub const QUOTE_PATH: &str = "/embarcador/api/frete/valor";

/// Client for the carrier API, carrying the bearer token and base URL.
#[derive(Clone)]
pub struct JadlogClient {
    http: Client,
    base_url: String,
    token: String,
}

impl JadlogClient {
    /// Build the client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, BridgeError> {
        if config.accept_invalid_certs {
            warn!("jadlog_tls_verification_disabled");
        }

        let http = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| BridgeError::Internal(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.jadlog_base_url.trim_end_matches('/').to_string(),
            token: config.jadlog_token.clone(),
        })
    }

    /// Forward an order creation payload and return the carrier's body.
    pub async fn incluir_pedido(
        &self,
        request: &OrderRequest,
    ) -> Result<serde_json::Value, BridgeError> {
        self.post_json(ORDER_PATH, request).await
    }

    /// Forward a quote payload and parse the carrier's quote list.
    pub async fn cotar_frete(
        &self,
        request: &QuoteRequest,
    ) -> Result<CarrierQuoteResponse, BridgeError> {
        let body = self.post_json(QUOTE_PATH, request).await?;
        serde_json::from_value(body)
            .map_err(|e| BridgeError::Internal(format!("resposta de cotação inválida: {e}")))
    }

    /// POST a JSON payload and map the outcome to the error taxonomy.
    ///
    /// Non-2xx answers become `BridgeError::Upstream` carrying the raw body
    /// so the handler can relay it verbatim.
    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<serde_json::Value, BridgeError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "jadlog_request_failed");
                BridgeError::Internal(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(url = %url, error = %e, "jadlog_body_read_failed");
            BridgeError::Internal(e.to_string())
        })?;

        if !status.is_success() {
            warn!(
                url = %url,
                status_code = status.as_u16(),
                body_length = body.len(),
                "jadlog_upstream_error"
            );
            return Err(BridgeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        info!(url = %url, status_code = status.as_u16(), "jadlog_request_complete");

        serde_json::from_str(&body)
            .map_err(|e| BridgeError::Internal(format!("resposta inválida do transportador: {e}")))
    }
}
