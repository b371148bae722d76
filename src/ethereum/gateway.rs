//! Crowdfunding contract gateway.
//!
//! The facade talks to the deployed contract only through
//! [`CampaignContract`], so tests can swap the chain for an in-memory double.

use alloy::{
    network::ReceiptResponse,
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
};
use async_trait::async_trait;

use crate::{
    error::{AppError, Result},
    ethereum::{contracts::CrowdFunding, EthereumClient, HttpProvider},
    types::TransactionOutcome,
};

/// Raw campaign entry as returned by the contract.
pub type OnchainCampaign = CrowdFunding::Campaign;

/// Positional arguments of `createCampaign`.
pub type CreateCampaignCall = CrowdFunding::createCampaignCall;

/// Operations consumed from the crowdfunding contract.
#[async_trait]
pub trait CampaignContract: Send + Sync {
    /// Contract address, for logging.
    fn address(&self) -> Address;

    /// Submit `createCampaign` and wait for its receipt.
    async fn create_campaign(&self, call: CreateCampaignCall) -> Result<TransactionOutcome>;

    /// Read every campaign in contract order.
    async fn get_campaigns(&self) -> Result<Vec<OnchainCampaign>>;

    /// Submit `donateToCampaign(id)` carrying `value` wei and wait for its receipt.
    async fn donate_to_campaign(&self, id: U256, value: U256) -> Result<TransactionOutcome>;

    /// Read the parallel donor and amount sequences of a campaign.
    async fn get_donators(&self, id: U256) -> Result<(Vec<Address>, Vec<U256>)>;
}

/// [`CampaignContract`] backed by a live node.
#[derive(Clone)]
pub struct OnChainCampaignContract {
    contract: CrowdFunding::CrowdFundingInstance<HttpProvider>,
}

impl OnChainCampaignContract {
    /// Bind the contract at `address` to the client's provider.
    pub fn new(client: &EthereumClient, address: Address) -> Self {
        tracing::info!(contract = %address, "Binding crowdfunding contract");
        Self { contract: CrowdFunding::new(address, client.provider().clone()) }
    }
}

/// Convert a receipt into an outcome, failing on revert.
fn outcome_from_receipt(receipt: &TransactionReceipt) -> Result<TransactionOutcome> {
    let transaction_hash = format!("{:?}", receipt.transaction_hash());

    if !receipt.status() {
        return Err(AppError::TransactionReverted(transaction_hash));
    }

    Ok(TransactionOutcome { transaction_hash, block_number: receipt.block_number() })
}

#[async_trait]
impl CampaignContract for OnChainCampaignContract {
    fn address(&self) -> Address {
        *self.contract.address()
    }

    async fn create_campaign(&self, call: CreateCampaignCall) -> Result<TransactionOutcome> {
        let pending = self
            .contract
            .createCampaign(
                call.owner,
                call.title,
                call.description,
                call.target,
                call.deadline,
                call.image,
            )
            .send()
            .await?;

        tracing::debug!(tx = %pending.tx_hash(), "createCampaign submitted");

        let receipt = pending.get_receipt().await?;
        outcome_from_receipt(&receipt)
    }

    async fn get_campaigns(&self) -> Result<Vec<OnchainCampaign>> {
        let campaigns = self.contract.getCampaigns().call().await?;
        Ok(campaigns)
    }

    async fn donate_to_campaign(&self, id: U256, value: U256) -> Result<TransactionOutcome> {
        let pending = self.contract.donateToCampaign(id).value(value).send().await?;

        tracing::debug!(tx = %pending.tx_hash(), "donateToCampaign submitted");

        let receipt = pending.get_receipt().await?;
        outcome_from_receipt(&receipt)
    }

    async fn get_donators(&self, id: U256) -> Result<(Vec<Address>, Vec<U256>)> {
        let result = self.contract.getDonators(id).call().await?;
        Ok((result._0, result._1))
    }
}
