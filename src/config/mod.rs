//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use alloy::primitives::Address;

use crate::{error::AppError, ethereum::constants::CROWDFUNDING_CONTRACT};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Private key for the wallet (hex string, 0x prefix optional).
    /// Without one the session can read campaigns but never connect.
    pub private_key: Option<String>,
    /// Address of the deployed crowdfunding contract.
    pub contract_address: Address,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ETHEREUM_RPC_URL`: Ethereum JSON-RPC endpoint
    ///
    /// Optional environment variables:
    /// - `ETHEREUM_PRIVATE_KEY`: Private key for the wallet (hex)
    /// - `CROWDFUNDING_CONTRACT_ADDRESS`: Contract address (default: the deployed instance)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let rpc_url = env::var("ETHEREUM_RPC_URL").map_err(|_| {
            AppError::Config("ETHEREUM_RPC_URL environment variable not set".into())
        })?;

        let private_key = env::var("ETHEREUM_PRIVATE_KEY").ok().filter(|k| !k.trim().is_empty());

        let contract_address = match env::var("CROWDFUNDING_CONTRACT_ADDRESS") {
            Ok(raw) => parse_contract_address(&raw)?,
            Err(_) => CROWDFUNDING_CONTRACT,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self { rpc_url, private_key, contract_address, log_level })
    }
}

fn parse_contract_address(raw: &str) -> Result<Address, AppError> {
    raw.trim().parse::<Address>().map_err(|e| {
        AppError::Config(format!("Invalid CROWDFUNDING_CONTRACT_ADDRESS '{}': {}", raw, e))
    })
}
