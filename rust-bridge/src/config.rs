//! Configuration module for environment variable parsing.
//!
//! All configuration is read once at process start and carried as an
//! immutable struct; handlers receive it through shared state instead of
//! reading the environment per request.

use std::env;

use thiserror::Error;

/// Errors produced while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable that must hold an integer code holds something else.
    #[error("environment variable {name} must be numeric, got {value:?}")]
    NotNumeric {
        /// Name of the offending variable
        name: &'static str,
        /// The raw value found in the environment
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Jadlog client code (codCliente)
    pub cod_cliente: String,

    /// Jadlog account number (contaCorrente)
    pub conta_corrente: String,

    /// Shipping modality code (e.g. 3 for .PACKAGE)
    pub modalidade: i32,

    /// Shipment type code
    pub tipo_frete: i32,

    /// Collection type code sent on order creation
    pub tipo_coleta: String,

    /// Bearer token for the Jadlog embarcador API
    pub jadlog_token: String,

    /// Base URL of the Jadlog API (overridable for tests)
    pub jadlog_base_url: String,

    /// Shared secret for Yampi webhook signature verification
    pub yampi_secret: Option<String>,

    /// Disable upstream TLS certificate validation (deployment hazard flag)
    pub accept_invalid_certs: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required variables are `COD_CLIENTE`, `CONTA_CORRENTE`, `MODALIDADE`,
    /// `TIPO_FRETE` and `JADLOG_TOKEN`. The numeric codes arrive as strings
    /// and must parse to integers here, never per request.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            cod_cliente: require("COD_CLIENTE")?,

            conta_corrente: require("CONTA_CORRENTE")?,

            modalidade: require_i32("MODALIDADE")?,

            tipo_frete: require_i32("TIPO_FRETE")?,

            tipo_coleta: env::var("TIPO_COLETA").unwrap_or_else(|_| "package".to_string()),

            jadlog_token: require("JADLOG_TOKEN")?,

            jadlog_base_url: env::var("JADLOG_BASE_URL")
                .unwrap_or_else(|_| "https://www.jadlog.com.br".to_string()),

            yampi_secret: env::var("YAMPI_WEBHOOK_SECRET").ok(),

            accept_invalid_certs: env::var("JADLOG_ACCEPT_INVALID_CERTS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

/// Read a required environment variable.
fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Read a required environment variable holding an integer code.
fn require_i32(name: &'static str) -> Result<i32, ConfigError> {
    let raw = require(name)?;
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::NotNumeric { name, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_required_vars() {
        env::set_var("COD_CLIENTE", "12345");
        env::set_var("CONTA_CORRENTE", "001");
        env::set_var("MODALIDADE", "3");
        env::set_var("TIPO_FRETE", "1");
        env::set_var("JADLOG_TOKEN", "token-abc");
    }

    #[test]
    fn test_from_env_parses_and_fails_fast() {
        set_required_vars();

        let config = Config::from_env().unwrap();
        assert_eq!(config.modalidade, 3);
        assert_eq!(config.tipo_frete, 1);
        assert_eq!(config.port, 8080);
        assert_eq!(config.tipo_coleta, "package");
        assert_eq!(config.jadlog_base_url, "https://www.jadlog.com.br");
        assert!(config.yampi_secret.is_none());
        assert!(!config.accept_invalid_certs);

        // A non-numeric modality code must fail at startup, not per request.
        env::set_var("MODALIDADE", "express");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::NotNumeric { name: "MODALIDADE", .. }));
        env::set_var("MODALIDADE", "3");

        // A missing required variable is rejected.
        env::remove_var("JADLOG_TOKEN");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("JADLOG_TOKEN")));
        env::set_var("JADLOG_TOKEN", "token-abc");
    }
}
