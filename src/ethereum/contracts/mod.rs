//! Smart contract bindings.

pub mod crowdfunding;

pub use crowdfunding::{CrowdFunding, CROWDFUNDING_CONTRACT};
