//! Wallet session.

use std::sync::Arc;

use alloy::primitives::Address;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, Result},
    ethereum::{CampaignContract, WalletConnector},
};

/// Connected wallet state and the contract handle for one running host.
///
/// Shared by `Arc`; the address is written only by [`Session::connect`]
/// and [`Session::disconnect`].
pub struct Session {
    wallet: Arc<dyn WalletConnector>,
    contract: Arc<dyn CampaignContract>,
    address: RwLock<Option<Address>>,
}

impl Session {
    /// Create a disconnected session.
    pub fn new(wallet: Arc<dyn WalletConnector>, contract: Arc<dyn CampaignContract>) -> Self {
        Self { wallet, contract, address: RwLock::new(None) }
    }

    /// Run the wallet handshake and remember the connected address.
    pub async fn connect(&self) -> Result<Address> {
        let address = self.wallet.connect().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Wallet connection failed");
        })?;

        *self.address.write().await = Some(address);
        tracing::info!(address = %address, "Wallet connected");

        Ok(address)
    }

    /// Forget the connected address.
    pub async fn disconnect(&self) {
        if let Some(address) = self.address.write().await.take() {
            tracing::info!(address = %address, "Wallet disconnected");
        }
    }

    /// The connected address, if any.
    pub async fn address(&self) -> Option<Address> {
        *self.address.read().await
    }

    /// The connected address, or `WalletNotConnected`.
    pub async fn require_address(&self) -> Result<Address> {
        self.address().await.ok_or(AppError::WalletNotConnected)
    }

    /// The bound contract.
    pub fn contract(&self) -> &dyn CampaignContract {
        self.contract.as_ref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("contract", &self.contract.address()).finish()
    }
}
