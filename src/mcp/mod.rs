//! MCP server module.
//!
//! Contains the MCP server implementation with tool handlers.

pub mod server;

pub use server::CrowdfundingServer;
pub use server::{DonateInput, GetDonationsInput, PublishCampaignInput};
