//! Request and response schemas for the Jadlog embarcador API.
//!
//! Field names follow the carrier's documented JSON schema; the order
//! creation schema and the quote schema are distinct and never conflated.

use serde::{Deserialize, Serialize};

// =============================================================================
// Order creation (POST /embarcador/api/pedido/incluir)
// =============================================================================

/// Sender (`rem`) or recipient (`des`) block of an order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Full name
    pub nome: String,
    /// Street address
    pub endereco: String,
    /// District
    pub bairro: String,
    /// City
    pub cidade: String,
    /// State code
    pub uf: String,
    /// Postal code
    pub cep: String,
    /// Tax id (CNPJ or CPF)
    pub cnpj_cpf: String,
}

/// Tax document (DF-e) attached to a volume.
#[derive(Debug, Clone, Serialize)]
pub struct Dfe {
    /// Document series
    pub serie: String,
    /// Document number
    pub numero: String,
    /// Declared document value
    pub valor: f64,
}

/// A physical volume of the shipment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Weight in kilograms
    pub peso: f64,
    /// Height in centimeters
    pub altura: f64,
    /// Width in centimeters
    pub largura: f64,
    /// Length in centimeters
    pub comprimento: f64,
    /// Declared merchandise value
    pub vlr_merc: f64,
    /// Tax documents covering this volume
    pub dfe: Vec<Dfe>,
}

/// Order creation payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Jadlog client code
    pub cod_cliente: String,
    /// Jadlog account number
    pub conta_corrente: String,
    /// Order identifiers (one per shipment)
    pub pedido: Vec<String>,
    /// Total weight in kilograms
    pub tot_peso: f64,
    /// Total monetary value
    pub tot_valor: f64,
    /// Shipping modality code
    pub modalidade: i32,
    /// Shipment type code
    pub tipo_frete: i32,
    /// Collection type code
    pub tipo_coleta: String,
    /// Sender block
    pub rem: Party,
    /// Recipient block
    pub des: Party,
    /// Volume descriptors
    pub volume: Vec<Volume>,
}

// =============================================================================
// Shipping quote (POST /embarcador/api/frete/valor)
// =============================================================================

/// A single quote query inside a [`QuoteRequest`].
#[derive(Debug, Clone, Serialize)]
pub struct QuoteQuery {
    /// Origin postal code
    pub cepori: String,
    /// Destination postal code
    pub cepdes: String,
    /// Freight payable at destination flag
    pub frap: Option<String>,
    /// Weight in kilograms
    pub peso: f64,
    /// Account holder tax id
    pub cnpj: String,
    /// Jadlog account number
    pub conta: String,
    /// Contract identifier
    pub contrato: Option<String>,
    /// Shipping modality code
    pub modalidade: i32,
    /// Delivery type code
    pub tpentrega: String,
    /// Insurance type code
    pub tpseguro: String,
    /// Declared value
    pub vldeclarado: f64,
    /// Collection cost
    pub vlcoleta: Option<f64>,
}

/// Shipping quote payload.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteRequest {
    /// Quote queries (one per modality of interest)
    pub frete: Vec<QuoteQuery>,
}

/// One quote entry of the carrier's answer.
///
/// The carrier omits fields freely and reports per-entry failures under
/// `erro`, so everything is optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteEntry {
    /// Modality the entry was computed for
    #[serde(default)]
    pub modalidade: Option<i32>,
    /// Total freight price
    #[serde(default)]
    pub vltotal: Option<f64>,
    /// Lead time in days
    #[serde(default)]
    pub prazo: Option<i64>,
    /// Per-entry error object
    #[serde(default)]
    pub erro: Option<serde_json::Value>,
}

/// Carrier answer to a quote request.
///
/// Observed under both a `frete` and a `fretes` key depending on the API
/// version, hence the alias.
#[derive(Debug, Clone, Deserialize)]
pub struct CarrierQuoteResponse {
    /// Quote entries
    #[serde(default, alias = "fretes")]
    pub frete: Vec<QuoteEntry>,
}
