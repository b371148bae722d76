//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ethereum RPC errors.
    #[error("Ethereum RPC error: {0}")]
    Rpc(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Wallet-related errors.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// No wallet is available to connect to.
    #[error("No wallet available: configure a private key to connect")]
    WalletNotFound,

    /// The operation needs a connected wallet address.
    #[error("Wallet not connected")]
    WalletNotConnected,

    /// Invalid currency amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid campaign deadline.
    #[error("Invalid deadline: {0}")]
    InvalidDeadline(String),

    /// Numeric overflow during conversion.
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),

    /// The contract returned donor and amount sequences of different lengths.
    #[error("Donation data mismatch: {donators} donators but {donations} donations")]
    DonationLengthMismatch { donators: usize, donations: usize },

    /// A mined transaction reverted.
    #[error("Transaction reverted: {0}")]
    TransactionReverted(String),

    /// Pending transaction error.
    #[error("Pending transaction error: {0}")]
    PendingTransaction(String),
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<alloy::contract::Error> for AppError {
    fn from(err: alloy::contract::Error) -> Self {
        AppError::Rpc(err.to_string())
    }
}

impl From<alloy::providers::PendingTransactionError> for AppError {
    fn from(err: alloy::providers::PendingTransactionError) -> Self {
        AppError::PendingTransaction(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<AppError> for McpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidAmount(_) | AppError::InvalidDeadline(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            AppError::Config(_) | AppError::WalletNotFound | AppError::WalletNotConnected => {
                McpError::invalid_request(err.to_string(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
