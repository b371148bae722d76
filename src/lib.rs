//! Crowdfunding Client Library
//!
//! A wallet session and contract facade for an on-chain crowdfunding dApp,
//! served as a Model Context Protocol server.
//!
//! # Features
//!
//! - **Wallet Session**: Connect and disconnect a signing wallet
//! - **Campaigns**: Publish campaigns and list all or only your own
//! - **Donations**: Donate ETH to a campaign and list its donors
//!
//! # Example
//!
//! ```rust,ignore
//! use crowdfunding_client::{Config, CrowdfundingServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let server = CrowdfundingServer::new(config)?;
//!     // Run server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;
pub mod mcp;
pub mod services;
pub mod types;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{AppError, Result};
pub use mcp::CrowdfundingServer;
pub use services::{CampaignService, Session};
