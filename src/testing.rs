//! In-memory doubles for unit tests.

use std::sync::Mutex;

use alloy::primitives::{address, Address, U256};
use async_trait::async_trait;

use crate::{
    error::{AppError, Result},
    ethereum::{CampaignContract, CreateCampaignCall, OnchainCampaign, WalletConnector},
    types::TransactionOutcome,
};

pub const ALICE: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const BOB: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

/// Wallet that always connects to the same address.
pub struct StaticWallet(pub Address);

#[async_trait]
impl WalletConnector for StaticWallet {
    async fn connect(&self) -> Result<Address> {
        Ok(self.0)
    }
}

/// Contract double that records writes and serves canned reads.
#[derive(Default)]
pub struct MockContract {
    pub campaigns: Vec<OnchainCampaign>,
    pub donators: Vec<Address>,
    pub donations: Vec<U256>,
    pub reject: bool,
    pub created: Mutex<Vec<CreateCampaignCall>>,
    pub donated: Mutex<Vec<(U256, U256)>>,
}

impl MockContract {
    pub fn rejecting() -> Self {
        Self { reject: true, ..Default::default() }
    }

    fn check(&self) -> Result<()> {
        if self.reject {
            return Err(AppError::Rpc("execution reverted".to_string()));
        }
        Ok(())
    }

    fn outcome() -> TransactionOutcome {
        TransactionOutcome {
            transaction_hash: format!("0x{}", "ab".repeat(32)),
            block_number: Some(1),
        }
    }
}

pub fn campaign(owner: Address, title: &str) -> OnchainCampaign {
    OnchainCampaign {
        owner,
        title: title.to_string(),
        description: format!("{} description", title),
        target: U256::from(1_000_000_000_000_000_000u64),
        deadline: U256::from(1_735_689_600_000u64),
        amountCollected: U256::ZERO,
        image: format!("https://example.com/{}.png", title),
        donators: vec![],
        donations: vec![],
    }
}

#[async_trait]
impl CampaignContract for MockContract {
    fn address(&self) -> Address {
        Address::ZERO
    }

    async fn create_campaign(&self, call: CreateCampaignCall) -> Result<TransactionOutcome> {
        self.check()?;
        self.created.lock().unwrap().push(call);
        Ok(Self::outcome())
    }

    async fn get_campaigns(&self) -> Result<Vec<OnchainCampaign>> {
        self.check()?;
        Ok(self.campaigns.clone())
    }

    async fn donate_to_campaign(&self, id: U256, value: U256) -> Result<TransactionOutcome> {
        self.check()?;
        self.donated.lock().unwrap().push((id, value));
        Ok(Self::outcome())
    }

    async fn get_donators(&self, _id: U256) -> Result<(Vec<Address>, Vec<U256>)> {
        self.check()?;
        Ok((self.donators.clone(), self.donations.clone()))
    }
}
