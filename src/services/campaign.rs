//! Campaign facade.
//!
//! Marshals user input into contract calls and contract results into
//! display records. Every operation returns a `Result`; failures are logged
//! before they are returned.

use std::sync::Arc;

use alloy::primitives::U256;

use crate::{
    error::{AppError, Result},
    ethereum::CreateCampaignCall,
    services::Session,
    types::{
        deadline_millis, parse_ether, CampaignForm, CampaignRecord, DonationRecord,
        TransactionOutcome,
    },
};

/// Service for publishing, listing and funding campaigns.
#[derive(Clone, Debug)]
pub struct CampaignService {
    session: Arc<Session>,
}

impl CampaignService {
    /// Create a new campaign service over a session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// The session this service acts for.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Publish a new campaign owned by the connected wallet.
    ///
    /// The deadline is sent as epoch milliseconds.
    pub async fn publish_campaign(&self, form: CampaignForm) -> Result<TransactionOutcome> {
        tracing::info!(title = %form.title, target = %form.target, "Publishing campaign");

        let result: Result<TransactionOutcome> = async {
            let owner = self.session.require_address().await?;
            let call = CreateCampaignCall {
                owner,
                title: form.title,
                description: form.description,
                target: parse_ether(&form.target)?,
                deadline: deadline_millis(form.deadline)?,
                image: form.image,
            };
            self.session.contract().create_campaign(call).await
        }
        .await;

        match &result {
            Ok(outcome) => tracing::info!(tx = %outcome.transaction_hash, "Campaign published"),
            Err(e) => tracing::error!(error = %e, "Campaign publication failed"),
        }

        result
    }

    /// Get every campaign in contract order.
    pub async fn get_campaigns(&self) -> Result<Vec<CampaignRecord>> {
        let result: Result<Vec<CampaignRecord>> = async {
            let campaigns = self.session.contract().get_campaigns().await?;
            tracing::debug!(count = campaigns.len(), "Fetched campaigns");

            campaigns
                .into_iter()
                .enumerate()
                .map(|(index, campaign)| CampaignRecord::from_onchain(index as u64, campaign))
                .collect()
        }
        .await;

        if let Err(e) = &result {
            tracing::error!(error = %e, "Fetching campaigns failed");
        }

        result
    }

    /// Get the campaigns owned by the connected wallet, in contract order.
    pub async fn get_user_campaigns(&self) -> Result<Vec<CampaignRecord>> {
        let owner = self.session.require_address().await.inspect_err(|e| {
            tracing::error!(error = %e, "Fetching user campaigns failed");
        })?;

        let campaigns = self.get_campaigns().await?;
        let owned: Vec<_> = campaigns.into_iter().filter(|c| c.is_owned_by(owner)).collect();

        tracing::debug!(owner = %owner, count = owned.len(), "Filtered user campaigns");
        Ok(owned)
    }

    /// Donate `amount` ether from the connected wallet to campaign `campaign_id`.
    pub async fn donate(&self, campaign_id: u64, amount: &str) -> Result<TransactionOutcome> {
        tracing::info!(campaign_id = campaign_id, amount = %amount, "Donating to campaign");

        let result: Result<TransactionOutcome> = async {
            let donor = self.session.require_address().await?;
            tracing::debug!(donor = %donor, "Donation signed by connected wallet");
            let value = parse_ether(amount)?;
            self.session.contract().donate_to_campaign(U256::from(campaign_id), value).await
        }
        .await;

        match &result {
            Ok(outcome) => tracing::info!(tx = %outcome.transaction_hash, "Donation sent"),
            Err(e) => tracing::error!(error = %e, campaign_id = campaign_id, "Donation failed"),
        }

        result
    }

    /// Get the donations made to campaign `campaign_id`.
    pub async fn get_donations(&self, campaign_id: u64) -> Result<Vec<DonationRecord>> {
        let result: Result<Vec<DonationRecord>> = async {
            let (donators, donations) =
                self.session.contract().get_donators(U256::from(campaign_id)).await?;

            if donators.len() != donations.len() {
                return Err(AppError::DonationLengthMismatch {
                    donators: donators.len(),
                    donations: donations.len(),
                });
            }

            Ok(donators
                .into_iter()
                .zip(donations)
                .map(|(donator, donation)| DonationRecord::new(donator, donation))
                .collect())
        }
        .await;

        match &result {
            Ok(records) => tracing::debug!(
                campaign_id = campaign_id,
                count = records.len(),
                "Fetched donations"
            ),
            Err(e) => {
                tracing::error!(error = %e, campaign_id = campaign_id, "Fetching donations failed")
            }
        }

        result
    }
}
