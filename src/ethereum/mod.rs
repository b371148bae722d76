//! Ethereum interaction module.
//!
//! Contains the Ethereum client, wallet management, contract bindings and
//! the contract gateway.

pub mod client;
pub mod constants;
pub mod contracts;
pub mod gateway;
pub mod wallet;

pub use client::{EthereumClient, HttpProvider};
pub use gateway::{CampaignContract, CreateCampaignCall, OnChainCampaignContract, OnchainCampaign};
pub use wallet::{NoWallet, WalletConnector, WalletManager};
