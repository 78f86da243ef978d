//! Profile-backed client provider

use super::{ClientProvider, E3dbClient};
use crate::config::{self, ClientConfig};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::profile::ProfileStore;
use crate::types::{RegistrationInfo, RegistrationOpts};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Path of the client registration endpoint, relative to the API URL
pub const REGISTER_PATH: &str = "v1/account/e3db/clients/register";

/// Provider reading profiles from disk and talking to the live service
#[derive(Debug, Clone)]
pub struct E3dbProvider {
    store: ProfileStore,
    api_url: String,
}

impl E3dbProvider {
    /// Create a provider over a profile store and registration endpoint
    pub fn new(store: ProfileStore, api_url: impl Into<String>) -> Self {
        Self {
            store,
            api_url: api_url.into(),
        }
    }

    /// Provider configured from `E3DB_CONFIG_DIR` and `E3DB_API_URL`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ProfileStore::from_env()?, config::api_url_from_env()))
    }
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    client_id: String,
    api_key_id: String,
    api_secret: String,
}

#[async_trait]
impl ClientProvider for E3dbProvider {
    type Client = E3dbClient;

    fn default_client(&self) -> Result<E3dbClient> {
        let config = self.store.load("")?;
        E3dbClient::new(config)
    }

    fn load_config(&self, profile: &str) -> Result<ClientConfig> {
        self.store.load(profile)
    }

    fn build_client(&self, config: ClientConfig) -> Result<E3dbClient> {
        E3dbClient::new(config)
    }

    fn profile_exists(&self, profile: &str) -> bool {
        self.store.exists(profile)
    }

    async fn register(&self, email: &str, opts: RegistrationOpts) -> Result<RegistrationInfo> {
        let http_config = HttpClientConfig::builder()
            .base_url(self.api_url.as_str())
            .logging(opts.logging)
            .build();
        let http = HttpClient::with_config(http_config)?;

        let response: RegisterResponse = http
            .post_json(REGISTER_PATH, &json!({ "client": { "email": email } }))
            .await
            .map_err(|e| Error::registration(e.to_string()))?;

        info!("Registered client {} for {email}", response.client_id);

        Ok(RegistrationInfo {
            client_id: response.client_id,
            api_key_id: response.api_key_id,
            api_secret: response.api_secret,
            client_email: email.to_string(),
            api_url: self.api_url.clone(),
        })
    }

    fn save_config(&self, profile: &str, info: &RegistrationInfo) -> Result<()> {
        self.store
            .save(profile, &ClientConfig::from_registration(info))
            .map(|_| ())
    }
}
