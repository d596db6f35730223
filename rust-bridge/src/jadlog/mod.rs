//! Jadlog embarcador API integration.
//!
//! This module provides:
//! - Outbound request schemas for order creation and shipping quotes
//! - Response schemas for the carrier's quote answer
//! - A thin HTTP client that forwards payloads and relays failures

pub mod client;
pub mod types;

pub use client::{JadlogClient, ORDER_PATH, QUOTE_PATH};
pub use types::{
    CarrierQuoteResponse, Dfe, OrderRequest, Party, QuoteEntry, QuoteQuery, QuoteRequest, Volume,
};
