//! Common test utilities.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alloy::primitives::{address, Address, U256};
use async_trait::async_trait;
use crowdfunding_client::{
    ethereum::{
        CampaignContract, CreateCampaignCall, NoWallet, OnchainCampaign, WalletConnector,
        WalletManager,
    },
    types::TransactionOutcome,
    AppError, Config, CrowdfundingServer, Session,
};

/// First Hardhat/Foundry test key (DO NOT use in production!).
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub const OTHER: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

/// Helper to create a live test server from environment variables.
pub fn create_test_server() -> Option<CrowdfundingServer> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let rpc_url = std::env::var("ETHEREUM_RPC_URL").ok()?;
    if rpc_url.is_empty() {
        return None;
    }

    let config = Config {
        rpc_url,
        private_key: std::env::var("ETHEREUM_PRIVATE_KEY").ok(),
        contract_address: std::env::var("CROWDFUNDING_CONTRACT_ADDRESS")
            .ok()
            .and_then(|a| a.parse().ok())
            .unwrap_or(crowdfunding_client::ethereum::constants::CROWDFUNDING_CONTRACT),
        log_level: "warn".to_string(),
    };

    CrowdfundingServer::new(config).ok()
}

/// Skip test if server cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_server {
    () => {
        match common::create_test_server() {
            Some(server) => server,
            None => {
                eprintln!("Skipping test: ETHEREUM_RPC_URL not set");
                return;
            }
        }
    };
}

/// In-memory contract that stores campaigns and donations.
#[derive(Default)]
pub struct InMemoryContract {
    pub campaigns: Mutex<Vec<OnchainCampaign>>,
    pub reject_writes: bool,
}

impl InMemoryContract {
    pub fn rejecting_writes() -> Self {
        Self { reject_writes: true, ..Default::default() }
    }

    fn outcome(n: usize) -> TransactionOutcome {
        TransactionOutcome {
            transaction_hash: format!("0x{:064x}", n),
            block_number: Some(n as u64),
        }
    }
}

#[async_trait]
impl CampaignContract for InMemoryContract {
    fn address(&self) -> Address {
        Address::ZERO
    }

    async fn create_campaign(
        &self,
        call: CreateCampaignCall,
    ) -> crowdfunding_client::Result<TransactionOutcome> {
        if self.reject_writes {
            return Err(AppError::Rpc("execution reverted".to_string()));
        }

        let mut campaigns = self.campaigns.lock().unwrap();
        campaigns.push(OnchainCampaign {
            owner: call.owner,
            title: call.title,
            description: call.description,
            target: call.target,
            deadline: call.deadline,
            amountCollected: U256::ZERO,
            image: call.image,
            donators: vec![],
            donations: vec![],
        });
        Ok(Self::outcome(campaigns.len()))
    }

    async fn get_campaigns(&self) -> crowdfunding_client::Result<Vec<OnchainCampaign>> {
        Ok(self.campaigns.lock().unwrap().clone())
    }

    async fn donate_to_campaign(
        &self,
        id: U256,
        value: U256,
    ) -> crowdfunding_client::Result<TransactionOutcome> {
        if self.reject_writes {
            return Err(AppError::Rpc("execution reverted".to_string()));
        }

        let mut campaigns = self.campaigns.lock().unwrap();
        let index = usize::try_from(id).map_err(|_| AppError::Rpc("bad id".to_string()))?;
        let campaign = campaigns
            .get_mut(index)
            .ok_or_else(|| AppError::Rpc("execution reverted".to_string()))?;

        campaign.donators.push(OTHER);
        campaign.donations.push(value);
        campaign.amountCollected += value;
        Ok(Self::outcome(index))
    }

    async fn get_donators(
        &self,
        id: U256,
    ) -> crowdfunding_client::Result<(Vec<Address>, Vec<U256>)> {
        let campaigns = self.campaigns.lock().unwrap();
        let index = usize::try_from(id).map_err(|_| AppError::Rpc("bad id".to_string()))?;
        Ok(campaigns
            .get(index)
            .map(|c| (c.donators.clone(), c.donations.clone()))
            .unwrap_or_default())
    }
}

/// Server over an in-memory contract with the test key as wallet.
pub fn in_memory_server(contract: Arc<InMemoryContract>) -> CrowdfundingServer {
    let wallet: Arc<dyn WalletConnector> =
        Arc::new(WalletManager::from_private_key(TEST_PRIVATE_KEY).unwrap());
    CrowdfundingServer::with_session(Arc::new(Session::new(wallet, contract)))
}

/// Server over an in-memory contract with no wallet configured.
pub fn walletless_server(contract: Arc<InMemoryContract>) -> CrowdfundingServer {
    CrowdfundingServer::with_session(Arc::new(Session::new(Arc::new(NoWallet), contract)))
}
