//! Wallet management.

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use async_trait::async_trait;

use crate::error::{AppError, Result};

/// Wallet handshake used by a session to learn its account.
///
/// Implementations may prompt a user, talk to an external signer, or
/// answer from a locally held key.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Perform the connect handshake and return the account address.
    async fn connect(&self) -> Result<Address>;
}

/// Wallet manager for transaction signing.
#[derive(Clone)]
pub struct WalletManager {
    /// The local signer.
    signer: PrivateKeySigner,
    /// Wallet address.
    address: Address,
}

impl WalletManager {
    /// Create a wallet manager from a private key string.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        // Remove 0x prefix if present
        let key = private_key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);

        let signer: PrivateKeySigner = key.parse()?;
        let address = signer.address();

        tracing::info!(address = %address, "Wallet initialized");

        Ok(Self { signer, address })
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the signer for transaction signing.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletManager").field("address", &self.address).finish()
    }
}

#[async_trait]
impl WalletConnector for WalletManager {
    async fn connect(&self) -> Result<Address> {
        Ok(self.address)
    }
}

/// Connector used when no wallet is configured. Every handshake fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWallet;

#[async_trait]
impl WalletConnector for NoWallet {
    async fn connect(&self) -> Result<Address> {
        Err(AppError::WalletNotFound)
    }
}
