use inventory_filter::RawInventory;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ureq::tls::{TlsConfig, TlsProvider};

use crate::config::JamfConfig;
use crate::constants::{defaults, endpoints};
use crate::helpers::{basic_auth, bearer_auth};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("could not decode inventory from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: ureq::Error,
    },
}

/// Anything that can hand over a full inventory payload.
pub trait InventorySource {
    fn fetch_inventory(&self) -> Result<RawInventory, ApiError>;
}

#[derive(Debug, Deserialize, Serialize)]
struct TokenResponse {
    token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires: Option<String>,
}

fn get_ureq_agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .tls_config(
            TlsConfig::builder()
                .provider(TlsProvider::NativeTls)
                .build(),
        )
        .timeout_global(Some(defaults::API_REQUEST_TIMEOUT))
        .build()
        .into()
}

/// Client for the Jamf Pro API.
///
/// A new token is requested for every inventory fetch. Tokens stay valid for
/// up to 30 minutes, but nothing is cached between calls.
pub struct JamfClient {
    agent: ureq::Agent,
    config: JamfConfig,
}

impl JamfClient {
    pub fn new(config: JamfConfig) -> Self {
        JamfClient {
            agent: get_ureq_agent(),
            config,
        }
    }

    pub fn get_auth_token(&self) -> Result<String, ApiError> {
        let url = self.config.endpoint(endpoints::AUTH_TOKENS);
        log::debug!("Requesting API token from {url}");

        let mut response = self
            .agent
            .post(&url)
            .header(
                "Authorization",
                basic_auth(self.config.username(), self.config.password()),
            )
            .send_empty()
            .map_err(|e| match e {
                ureq::Error::StatusCode(status @ (401 | 403)) => ApiError::Authentication(
                    format!("token endpoint rejected credentials with status {status}"),
                ),
                source => ApiError::Transport {
                    url: url.clone(),
                    source,
                },
            })?;

        let resp: TokenResponse = response.body_mut().read_json().map_err(|e| {
            ApiError::Authentication(format!("token endpoint returned no usable token: {e}"))
        })?;
        if resp.token.is_empty() {
            return Err(ApiError::Authentication(
                "token endpoint returned an empty token".to_string(),
            ));
        }
        log::debug!(
            "Obtained API token (expires: {})",
            resp.expires.as_deref().unwrap_or("unknown")
        );
        Ok(resp.token)
    }

    pub fn get_inventory_details(&self, auth_token: &str) -> Result<RawInventory, ApiError> {
        let url = self.config.endpoint(endpoints::COMPUTERS_INVENTORY);
        log::debug!(
            "Fetching inventory from {url} with sections {}",
            endpoints::INVENTORY_SECTIONS.join(",")
        );

        let request = endpoints::INVENTORY_SECTIONS.iter().fold(
            self.agent
                .get(&url)
                .header("Authorization", bearer_auth(auth_token)),
            |req, section| req.query(endpoints::SECTION_PARAM, section),
        );
        let mut response = request.call().map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        let inventory: RawInventory = response
            .body_mut()
            .with_config()
            .limit(defaults::MAX_INVENTORY_BYTES)
            .read_json()
            .map_err(|source| ApiError::Decode {
                url: url.clone(),
                source,
            })?;
        Ok(inventory)
    }
}

impl InventorySource for JamfClient {
    fn fetch_inventory(&self) -> Result<RawInventory, ApiError> {
        let auth_token = self.get_auth_token()?;
        self.get_inventory_details(&auth_token)
    }
}
