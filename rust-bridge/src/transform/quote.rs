//! Quote mapping: `InboundQuoteRequest` into the carrier's quote schema,
//! and normalization of the carrier's answer into the caller-facing list.

use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::jadlog::types::{CarrierQuoteResponse, QuoteQuery, QuoteRequest};
use crate::transform::{total_peso, CEP_ORIGEM, CNPJ_REMETENTE, DEFAULT_CEP_DESTINO, DEFAULT_VALOR};
use crate::yampi::InboundQuoteRequest;

/// One normalized shipping quote returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    /// Carrier name
    pub name: String,
    /// Service tier name
    pub service: String,
    /// Total freight price
    pub price: f64,
    /// Lead time in days
    pub days: i64,
    /// Carrier modality code, echoed back as the quote identifier
    pub quote_id: i32,
}

/// Caller-facing quote envelope.
#[derive(Debug, Clone, Serialize)]
pub struct QuotesResponse {
    /// Normalized quotes
    pub quotes: Vec<Quote>,
}

/// Map an inbound quote request into the carrier's quote payload.
pub fn map_quote(inbound: &InboundQuoteRequest, config: &Config) -> QuoteRequest {
    QuoteRequest {
        frete: vec![QuoteQuery {
            cepori: CEP_ORIGEM.to_string(),
            cepdes: inbound
                .cep_destino
                .clone()
                .unwrap_or_else(|| DEFAULT_CEP_DESTINO.to_string()),
            frap: None,
            peso: total_peso(&inbound.itens, inbound.peso),
            cnpj: CNPJ_REMETENTE.to_string(),
            conta: config.conta_corrente.clone(),
            contrato: None,
            modalidade: config.modalidade,
            tpentrega: "D".to_string(),
            tpseguro: "N".to_string(),
            vldeclarado: inbound.valor.unwrap_or(DEFAULT_VALOR),
            vlcoleta: None,
        }],
    }
}

/// Service tier name for a Jadlog modality code.
pub fn modalidade_nome(code: i32) -> &'static str {
    match code {
        0 => "EXPRESSO",
        3 => ".PACKAGE",
        4 => "RODOVIÁRIO",
        5 => "ECONÔMICO",
        6 => "DOC",
        7 => "CORPORATE",
        9 => ".COM",
        10 => "INTERNACIONAL",
        12 => "CARGO",
        14 => "EMERGENCIAL",
        _ => "JADLOG",
    }
}

/// Normalize the carrier's quote answer into the caller-facing list.
///
/// Entries carrying a per-entry error or missing a total price are dropped;
/// entries without a modality echo back the one that was requested.
pub fn normalize_quotes(response: &CarrierQuoteResponse, modalidade_pedida: i32) -> QuotesResponse {
    let quotes = response
        .frete
        .iter()
        .filter_map(|entry| {
            if let Some(erro) = &entry.erro {
                warn!(erro = %erro, "jadlog_quote_entry_error");
                return None;
            }

            let price = match entry.vltotal {
                Some(v) => v,
                None => {
                    warn!(modalidade = ?entry.modalidade, "jadlog_quote_entry_sem_valor");
                    return None;
                }
            };

            let modalidade = entry.modalidade.unwrap_or(modalidade_pedida);

            Some(Quote {
                name: "Jadlog".to_string(),
                service: modalidade_nome(modalidade).to_string(),
                price,
                days: entry.prazo.unwrap_or(0),
                quote_id: modalidade,
            })
        })
        .collect();

    QuotesResponse { quotes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yampi::InboundItem;

    fn test_config() -> Config {
        Config {
            port: 8080,
            cod_cliente: "12345".to_string(),
            conta_corrente: "001".to_string(),
            modalidade: 3,
            tipo_frete: 1,
            tipo_coleta: "package".to_string(),
            jadlog_token: "token-abc".to_string(),
            jadlog_base_url: "https://www.jadlog.com.br".to_string(),
            yampi_secret: None,
            accept_invalid_certs: false,
        }
    }

    #[test]
    fn test_map_quote_defaults() {
        let request = map_quote(&InboundQuoteRequest::default(), &test_config());

        assert_eq!(request.frete.len(), 1);
        let query = &request.frete[0];
        assert_eq!(query.cepori, "30720404");
        assert_eq!(query.cepdes, "88010140");
        assert_eq!(query.peso, 0.4);
        assert_eq!(query.vldeclarado, 56.05);
        assert_eq!(query.modalidade, 3);
        assert_eq!(query.conta, "001");
        assert_eq!(query.tpentrega, "D");
        assert_eq!(query.tpseguro, "N");
    }

    #[test]
    fn test_map_quote_aggregates_item_weight() {
        let inbound = InboundQuoteRequest {
            itens: vec![
                InboundItem {
                    peso: Some(0.5),
                    quantidade: Some(2),
                },
                InboundItem {
                    peso: Some(1.0),
                    quantidade: Some(1),
                },
            ],
            ..InboundQuoteRequest::default()
        };

        let request = map_quote(&inbound, &test_config());
        assert_eq!(request.frete[0].peso, 2.0);
    }

    #[test]
    fn test_normalize_quotes_single_entry() {
        let response: CarrierQuoteResponse =
            serde_json::from_str(r#"{"frete":[{"modalidade":3,"vltotal":25.5,"prazo":4}]}"#)
                .unwrap();

        let normalized = normalize_quotes(&response, 3);
        assert_eq!(normalized.quotes.len(), 1);
        let quote = &normalized.quotes[0];
        assert_eq!(quote.price, 25.5);
        assert_eq!(quote.days, 4);
        assert_eq!(quote.name, "Jadlog");
        assert_eq!(quote.service, ".PACKAGE");
        assert_eq!(quote.quote_id, 3);
    }

    #[test]
    fn test_normalize_quotes_drops_error_entries() {
        let response: CarrierQuoteResponse = serde_json::from_str(
            r#"{"frete":[
                {"erro":{"id":-1,"descricao":"cep invalido"}},
                {"modalidade":0,"vltotal":31.9,"prazo":1}
            ]}"#,
        )
        .unwrap();

        let normalized = normalize_quotes(&response, 3);
        assert_eq!(normalized.quotes.len(), 1);
        assert_eq!(normalized.quotes[0].service, "EXPRESSO");
        assert_eq!(normalized.quotes[0].quote_id, 0);
    }

    #[test]
    fn test_normalize_quotes_falls_back_to_requested_modality() {
        let response: CarrierQuoteResponse =
            serde_json::from_str(r#"{"fretes":[{"vltotal":12.0}]}"#).unwrap();

        let normalized = normalize_quotes(&response, 9);
        assert_eq!(normalized.quotes[0].quote_id, 9);
        assert_eq!(normalized.quotes[0].service, ".COM");
        assert_eq!(normalized.quotes[0].days, 0);
    }

    #[test]
    fn test_modalidade_nome_unknown_code() {
        assert_eq!(modalidade_nome(99), "JADLOG");
    }
}
