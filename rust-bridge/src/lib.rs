//! FreteBridge - Yampi to Jadlog webhook middleware.
//!
//! This library provides the building blocks for the `fretebridge-web` binary:
//! a thin HTTP service that receives webhooks from the Yampi e-commerce
//! platform, verifies their authenticity, reshapes the payload into the
//! schema expected by the Jadlog carrier API, forwards it over HTTPS and
//! relays the carrier's answer back to the caller.
//!
//! ## Architecture
//!
//! ```text
//! Yampi webhook → verify signature → map fields → Jadlog API → relay response
//! ```
//!
//! Every object is constructed, used and discarded within one request; the
//! only state shared across requests is the immutable [`Config`] and the
//! reusable HTTP client inside [`JadlogClient`].

pub mod config;
pub mod error;
pub mod jadlog;
pub mod transform;
pub mod web;
pub mod yampi;

// Re-export commonly used types
pub use config::Config;
pub use error::BridgeError;
pub use jadlog::JadlogClient;
pub use web::AppState;
