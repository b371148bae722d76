//! Business logic services module.

pub mod campaign;
pub mod session;

pub use campaign::CampaignService;
pub use session::Session;
