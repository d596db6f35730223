//! Field mapping between Yampi payloads and Jadlog schemas.
//!
//! Pure functions, no I/O. Each direction targets exactly one carrier
//! schema: `order` builds the order creation payload, `quote` builds the
//! quote payload and normalizes the carrier's answer.
//!
//! Carrier-required fields absent from the inbound payload are resolved
//! with the fixed site literals below; callers may omit any optional field
//! and never see a missing-field error.

pub mod order;
pub mod quote;

use crate::yampi::InboundItem;

pub use order::map_order;
pub use quote::{map_quote, modalidade_nome, normalize_quotes, Quote, QuotesResponse};

/// Default total weight in kilograms.
pub const DEFAULT_PESO: f64 = 0.4;

/// Default monetary total.
pub const DEFAULT_VALOR: f64 = 56.05;

/// Default volume dimension in centimeters.
pub const DEFAULT_DIMENSAO: f64 = 10.0;

/// Fallback destination postal code.
pub const DEFAULT_CEP_DESTINO: &str = "88010140";

/// Fixed origin postal code (sender site).
pub const CEP_ORIGEM: &str = "30720404";

/// Sender tax id.
pub const CNPJ_REMETENTE: &str = "59554346000184";

/// Total weight of a shipment.
///
/// When line items are present the total is Σ item weight × quantity,
/// each defaulting to 0.0 and 1 when absent; otherwise the payload-level
/// weight or [`DEFAULT_PESO`].
pub fn total_peso(itens: &[InboundItem], peso: Option<f64>) -> f64 {
    if itens.is_empty() {
        return peso.unwrap_or(DEFAULT_PESO);
    }

    itens
        .iter()
        .map(|item| item.peso.unwrap_or(0.0) * f64::from(item.quantidade.unwrap_or(1)))
        .sum()
}
