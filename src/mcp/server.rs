//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Serialize;

use crate::{
    config::Config,
    error::AppError,
    ethereum::{
        EthereumClient, NoWallet, OnChainCampaignContract, WalletConnector, WalletManager,
    },
    services::{CampaignService, Session},
    types::{parse_deadline, CampaignForm, WalletConnection},
};

/// Crowdfunding MCP Server.
///
/// Exposes the wallet session and campaign operations as tools.
#[derive(Clone)]
pub struct CrowdfundingServer {
    campaign_service: CampaignService,
    client: Option<Arc<EthereumClient>>,
    tool_router: ToolRouter<Self>,
}

impl CrowdfundingServer {
    /// Create a new Crowdfunding MCP Server.
    ///
    /// Note: This uses lazy initialization - no network calls are made during
    /// server startup. The Ethereum connection is established when the first
    /// tool is invoked.
    pub fn new(config: Config) -> Result<Self, AppError> {
        tracing::info!("Initializing Crowdfunding MCP Server");

        let wallet =
            config.private_key.as_deref().map(WalletManager::from_private_key).transpose()?;

        // Initialize Ethereum client (lazy - no network call yet)
        let client = Arc::new(EthereumClient::new(&config.rpc_url, wallet.as_ref())?);
        let contract = Arc::new(OnChainCampaignContract::new(&client, config.contract_address));

        let connector: Arc<dyn WalletConnector> = match wallet {
            Some(wallet) => Arc::new(wallet),
            None => {
                tracing::warn!("No private key configured; wallet connection is unavailable");
                Arc::new(NoWallet)
            }
        };

        let session = Arc::new(Session::new(connector, contract));

        tracing::info!("Crowdfunding MCP Server initialized successfully");

        Ok(Self::build(session, Some(client)))
    }

    /// Create a server over an existing session.
    ///
    /// No node is attached, so `connect_wallet` reports no chain ID.
    pub fn with_session(session: Arc<Session>) -> Self {
        Self::build(session, None)
    }

    fn build(session: Arc<Session>, client: Option<Arc<EthereumClient>>) -> Self {
        Self {
            campaign_service: CampaignService::new(session),
            client,
            tool_router: Self::tool_router(),
        }
    }
}

/// Input parameters for the publish_campaign tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct PublishCampaignInput {
    /// Campaign title.
    pub title: String,
    /// Campaign description.
    pub description: String,
    /// Funding goal in ETH (human-readable, e.g., "0.5").
    pub target: String,
    /// Deadline as a YYYY-MM-DD date or an RFC 3339 timestamp.
    pub deadline: String,
    /// Cover image URL.
    pub image: String,
}

/// Input parameters for the donate tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct DonateInput {
    /// Campaign ID (its index in the campaign list).
    pub campaign_id: u64,
    /// Amount to donate in ETH (human-readable, e.g., "0.1").
    pub amount: String,
}

/// Input parameters for the get_donations tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetDonationsInput {
    /// Campaign ID (its index in the campaign list).
    pub campaign_id: u64,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[tool_router]
impl CrowdfundingServer {
    /// Connect the session wallet.
    #[tool(description = "Connect the configured wallet and return its address")]
    pub async fn connect_wallet(&self) -> Result<String, McpError> {
        tracing::info!("connect_wallet called");

        let address = self.campaign_service.session().connect().await?;

        let chain_id = match &self.client {
            Some(client) => match client.chain_id().await {
                Ok(chain_id) => Some(chain_id),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not fetch chain ID");
                    None
                }
            },
            None => None,
        };

        to_json(&WalletConnection { address: address.to_string(), chain_id })
    }

    /// Disconnect the session wallet.
    #[tool(description = "Disconnect the wallet from this session")]
    pub async fn disconnect_wallet(&self) -> Result<String, McpError> {
        tracing::info!("disconnect_wallet called");

        self.campaign_service.session().disconnect().await;
        Ok("Wallet disconnected".to_string())
    }

    /// Publish a new campaign owned by the connected wallet.
    #[tool(
        description = "Create a crowdfunding campaign owned by the connected wallet. Requires connect_wallet first."
    )]
    pub async fn publish_campaign(
        &self,
        Parameters(input): Parameters<PublishCampaignInput>,
    ) -> Result<String, McpError> {
        tracing::info!(
            title = %input.title,
            target = %input.target,
            deadline = %input.deadline,
            "publish_campaign called"
        );

        let form = CampaignForm {
            title: input.title,
            description: input.description,
            target: input.target,
            deadline: parse_deadline(&input.deadline)?,
            image: input.image,
        };

        let result = self.campaign_service.publish_campaign(form).await?;
        to_json(&result)
    }

    /// List every campaign.
    #[tool(description = "List all crowdfunding campaigns with amounts in ETH")]
    pub async fn get_campaigns(&self) -> Result<String, McpError> {
        tracing::info!("get_campaigns called");

        let result = self.campaign_service.get_campaigns().await?;
        to_json(&result)
    }

    /// List the connected wallet's campaigns.
    #[tool(
        description = "List the campaigns owned by the connected wallet. Requires connect_wallet first."
    )]
    pub async fn get_user_campaigns(&self) -> Result<String, McpError> {
        tracing::info!("get_user_campaigns called");

        let result = self.campaign_service.get_user_campaigns().await?;
        to_json(&result)
    }

    /// Donate to a campaign from the connected wallet.
    #[tool(
        description = "Donate ETH from the connected wallet to a campaign, identified by its index in the campaign list. Requires connect_wallet first."
    )]
    pub async fn donate(
        &self,
        Parameters(input): Parameters<DonateInput>,
    ) -> Result<String, McpError> {
        tracing::info!(
            campaign_id = input.campaign_id,
            amount = %input.amount,
            "donate called"
        );

        let result = self.campaign_service.donate(input.campaign_id, &input.amount).await?;
        to_json(&result)
    }

    /// List a campaign's donations.
    #[tool(description = "List the donors and donated ETH amounts of a campaign")]
    pub async fn get_donations(
        &self,
        Parameters(input): Parameters<GetDonationsInput>,
    ) -> Result<String, McpError> {
        tracing::info!(campaign_id = input.campaign_id, "get_donations called");

        let result = self.campaign_service.get_donations(input.campaign_id).await?;
        to_json(&result)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CrowdfundingServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "crowdfunding-client".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Crowdfunding MCP Server. Connect a wallet, publish and list campaigns, \
                 donate ETH and inspect donations."
                    .to_string(),
            ),
        }
    }
}
