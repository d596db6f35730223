//! Inbound payload schemas for Yampi webhooks.
//!
//! Every field is optional: the platform omits whatever the store did not
//! fill in, and the mapping layer resolves absences with fixed defaults.
//! Parsing happens only after signature verification, over the same bytes
//! that were verified.

use std::fmt;

use serde::Deserialize;

/// Order identifier as sent by Yampi, which alternates between numeric and
/// string forms across store configurations.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrderNumber {
    /// Numeric identifier
    Num(u64),
    /// String identifier
    Text(String),
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderNumber::Num(n) => write!(f, "{n}"),
            OrderNumber::Text(s) => f.write_str(s),
        }
    }
}

/// A line item of an order or quote request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundItem {
    /// Item weight in kilograms
    #[serde(default)]
    pub peso: Option<f64>,
    /// Quantity ordered
    #[serde(default)]
    pub quantidade: Option<u32>,
}

/// Order payload posted to `/envio-pedido`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundOrder {
    /// Order identifier
    #[serde(default)]
    pub numero: Option<OrderNumber>,
    /// Total weight in kilograms
    #[serde(default)]
    pub peso: Option<f64>,
    /// Monetary total
    #[serde(default)]
    pub valor: Option<f64>,
    /// Package height in centimeters
    #[serde(default)]
    pub altura: Option<f64>,
    /// Package width in centimeters
    #[serde(default)]
    pub largura: Option<f64>,
    /// Package length in centimeters
    #[serde(default)]
    pub comprimento: Option<f64>,
    /// Recipient name
    #[serde(default)]
    pub nome_destinatario: Option<String>,
    /// Destination street address
    #[serde(default)]
    pub endereco_destino: Option<String>,
    /// Destination district
    #[serde(default)]
    pub bairro_destino: Option<String>,
    /// Destination city
    #[serde(default)]
    pub cidade_destino: Option<String>,
    /// Destination state code
    #[serde(default)]
    pub uf_destino: Option<String>,
    /// Destination postal code
    #[serde(default)]
    pub cep_destino: Option<String>,
    /// Recipient tax id (CPF)
    #[serde(default)]
    pub cpf_destinatario: Option<String>,
    /// Line items, used for weight aggregation when present
    #[serde(default)]
    pub itens: Vec<InboundItem>,
}

/// Shipping quote request posted to `/cotacao`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundQuoteRequest {
    /// Destination postal code
    #[serde(default)]
    pub cep_destino: Option<String>,
    /// Declared monetary value
    #[serde(default)]
    pub valor: Option<f64>,
    /// Total weight in kilograms
    #[serde(default)]
    pub peso: Option<f64>,
    /// Line items, used for weight aggregation when present
    #[serde(default)]
    pub itens: Vec<InboundItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_from_empty_object() {
        let order: InboundOrder = serde_json::from_str("{}").unwrap();
        assert!(order.numero.is_none());
        assert!(order.peso.is_none());
        assert!(order.itens.is_empty());
    }

    #[test]
    fn test_order_number_accepts_numeric_and_string() {
        let order: InboundOrder = serde_json::from_str(r#"{"numero": 1234}"#).unwrap();
        assert_eq!(order.numero.unwrap().to_string(), "1234");

        let order: InboundOrder = serde_json::from_str(r#"{"numero": "AB-99"}"#).unwrap();
        assert_eq!(order.numero.unwrap().to_string(), "AB-99");
    }

    #[test]
    fn test_order_deserializes_full_payload() {
        let order: InboundOrder = serde_json::from_str(
            r#"{
                "numero": 42,
                "peso": 1.5,
                "valor": 120.0,
                "cep_destino": "30130010",
                "nome_destinatario": "Ana",
                "itens": [{"peso": 0.5, "quantidade": 3}]
            }"#,
        )
        .unwrap();
        assert_eq!(order.peso, Some(1.5));
        assert_eq!(order.cep_destino.as_deref(), Some("30130010"));
        assert_eq!(order.itens.len(), 1);
        assert_eq!(order.itens[0].quantidade, Some(3));
    }

    #[test]
    fn test_quote_request_ignores_unknown_fields() {
        let quote: InboundQuoteRequest = serde_json::from_str(
            r#"{"cep_destino": "88010140", "loja": "minha-loja", "valor": 10.0}"#,
        )
        .unwrap();
        assert_eq!(quote.valor, Some(10.0));
    }
}
