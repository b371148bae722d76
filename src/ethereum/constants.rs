//! Ethereum network constants.

use alloy::primitives::{address, Address};

/// Decimals of the native currency (ether).
pub const ETHER_DECIMALS: u8 = 18;

/// Deployed CrowdFunding contract used when no address is configured.
pub const CROWDFUNDING_CONTRACT: Address = address!("DE5Dcb10daA0805E075EbbF47c231dF960c8774b");
