//! Campaign and donation types.

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    ethereum::contracts::CrowdFunding,
    types::units::{format_ether, u256_to_u64},
};

/// Input for publishing a new campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignForm {
    /// Campaign title.
    pub title: String,
    /// Campaign description.
    pub description: String,
    /// Funding goal in ether (e.g., "0.5").
    pub target: String,
    /// Date after which donations close.
    pub deadline: DateTime<Utc>,
    /// Cover image URI.
    pub image: String,
}

/// A campaign as displayed to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecord {
    /// Campaign owner address.
    pub owner: String,
    /// Campaign title.
    pub title: String,
    /// Campaign description.
    pub description: String,
    /// Funding goal in ether.
    pub target: String,
    /// Deadline as stored on-chain.
    pub deadline: u64,
    /// Amount raised so far in ether.
    pub amount_collected: String,
    /// Cover image URI.
    pub image: String,
    /// Position in the contract's campaign list; doubles as the campaign ID.
    pub index: u64,
}

impl CampaignRecord {
    /// Build a record from a raw on-chain campaign at `index`.
    pub fn from_onchain(index: u64, campaign: CrowdFunding::Campaign) -> Result<Self> {
        Ok(Self {
            owner: campaign.owner.to_string(),
            title: campaign.title,
            description: campaign.description,
            target: format_ether(campaign.target),
            deadline: u256_to_u64(campaign.deadline, "deadline")?,
            amount_collected: format_ether(campaign.amountCollected),
            image: campaign.image,
            index,
        })
    }

    /// Whether `address` owns this campaign.
    pub fn is_owned_by(&self, address: Address) -> bool {
        self.owner.parse::<Address>().map(|owner| owner == address).unwrap_or(false)
    }
}

/// A single donation to a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRecord {
    /// Donor address.
    pub donator: String,
    /// Donated amount in ether.
    pub donation: String,
}

impl DonationRecord {
    /// Build a record from a donor address and a wei amount.
    pub fn new(donator: Address, donation: U256) -> Self {
        Self { donator: donator.to_string(), donation: format_ether(donation) }
    }
}

/// Wallet connection information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnection {
    /// Connected account address.
    pub address: String,
    /// Chain the node reports, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

/// Summary of a transaction that was mined without reverting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutcome {
    /// Transaction hash (hex encoded).
    pub transaction_hash: String,
    /// Block the transaction was included in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}
