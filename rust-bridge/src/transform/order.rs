//! Order mapping: `InboundOrder` into the carrier's order creation schema.

use crate::config::Config;
use crate::jadlog::types::{Dfe, OrderRequest, Party, Volume};
use crate::transform::{
    total_peso, CEP_ORIGEM, CNPJ_REMETENTE, DEFAULT_CEP_DESTINO, DEFAULT_DIMENSAO, DEFAULT_PESO,
    DEFAULT_VALOR,
};
use crate::yampi::InboundOrder;

/// Fallback order identifier.
const DEFAULT_PEDIDO: &str = "pedido-sem-numero";

/// Declared value of the tax document when the order carries no total.
const DEFAULT_DFE_VALOR: f64 = 100.0;

/// Fixed sender block for every shipment.
fn remetente() -> Party {
    Party {
        nome: "Mercadinho da Bisa".to_string(),
        endereco: "Rua Progresso, 280".to_string(),
        bairro: "Padre Eustáquio".to_string(),
        cidade: "Belo Horizonte".to_string(),
        uf: "MG".to_string(),
        cep: CEP_ORIGEM.to_string(),
        cnpj_cpf: CNPJ_REMETENTE.to_string(),
    }
}

/// Recipient block mapped from the inbound destination fields.
fn destinatario(inbound: &InboundOrder) -> Party {
    Party {
        nome: inbound
            .nome_destinatario
            .clone()
            .unwrap_or_else(|| "Destinatário".to_string()),
        endereco: inbound
            .endereco_destino
            .clone()
            .unwrap_or_else(|| "Endereço destino".to_string()),
        bairro: inbound
            .bairro_destino
            .clone()
            .unwrap_or_else(|| "Bairro destino".to_string()),
        cidade: inbound
            .cidade_destino
            .clone()
            .unwrap_or_else(|| "Cidade destino".to_string()),
        uf: inbound.uf_destino.clone().unwrap_or_else(|| "UF".to_string()),
        cep: inbound
            .cep_destino
            .clone()
            .unwrap_or_else(|| DEFAULT_CEP_DESTINO.to_string()),
        cnpj_cpf: inbound
            .cpf_destinatario
            .clone()
            .unwrap_or_else(|| "00000000000".to_string()),
    }
}

/// Map an inbound order into the carrier's order creation payload.
pub fn map_order(inbound: &InboundOrder, config: &Config) -> OrderRequest {
    let tot_peso = total_peso(&inbound.itens, inbound.peso);
    let tot_valor = inbound.valor.unwrap_or(DEFAULT_VALOR);

    let pedido = inbound
        .numero
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| DEFAULT_PEDIDO.to_string());

    OrderRequest {
        cod_cliente: config.cod_cliente.clone(),
        conta_corrente: config.conta_corrente.clone(),
        pedido: vec![pedido],
        tot_peso,
        tot_valor,
        modalidade: config.modalidade,
        tipo_frete: config.tipo_frete,
        tipo_coleta: config.tipo_coleta.clone(),
        rem: remetente(),
        des: destinatario(inbound),
        volume: vec![Volume {
            peso: inbound.peso.unwrap_or(DEFAULT_PESO),
            altura: inbound.altura.unwrap_or(DEFAULT_DIMENSAO),
            largura: inbound.largura.unwrap_or(DEFAULT_DIMENSAO),
            comprimento: inbound.comprimento.unwrap_or(DEFAULT_DIMENSAO),
            vlr_merc: tot_valor,
            dfe: vec![Dfe {
                serie: "1".to_string(),
                numero: "123456".to_string(),
                valor: inbound.valor.unwrap_or(DEFAULT_DFE_VALOR),
            }],
        }],
    }
}
