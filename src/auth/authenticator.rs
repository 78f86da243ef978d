//! Authenticator implementation
//!
//! Applies the bearer token to requests and refreshes it on demand.

use super::types::{AccessToken, ApiCredentials, TokenResponse};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::logging;
use reqwest::{Client, RequestBuilder};
use tokio::sync::RwLock;

/// Path of the token exchange endpoint, relative to the API URL
pub const TOKEN_PATH: &str = "v1/auth/token";

/// Authenticates requests for one client
pub struct Authenticator {
    credentials: ApiCredentials,
    token: RwLock<Option<AccessToken>>,
    http_client: Client,
    logging: bool,
}

impl Authenticator {
    /// Create an authenticator using `http_client` for token exchanges
    pub fn new(credentials: ApiCredentials, http_client: Client) -> Self {
        Self {
            credentials,
            token: RwLock::new(None),
            http_client,
            logging: false,
        }
    }

    /// Trace token exchanges at info instead of debug
    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    /// Authenticator for a profile's API key pair
    pub fn for_client(config: &ClientConfig, http_client: Client) -> Result<Self> {
        let credentials = ApiCredentials {
            token_url: config.base_url()?.join(TOKEN_PATH)?,
            api_key_id: config.api_key_id.clone(),
            api_secret: config.api_secret.clone(),
        };
        Ok(Self::new(credentials, http_client).with_logging(config.logging))
    }

    /// Add the bearer token to a request, exchanging credentials if needed
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.access_token().await?;
        Ok(req.bearer_auth(token))
    }

    /// A usable token, from cache when possible
    pub async fn access_token(&self) -> Result<String> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_usable() {
                return Ok(token.value.clone());
            }
        }

        let mut cached = self.token.write().await;

        // Re-check: another task may have refreshed while we waited
        if let Some(token) = cached.as_ref() {
            if token.is_usable() {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.exchange().await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    async fn exchange(&self) -> Result<AccessToken> {
        let ApiCredentials {
            token_url,
            api_key_id,
            api_secret,
        } = &self.credentials;
        logging::trace_request(self.logging, format_args!("--> POST {token_url}"));

        let response = self
            .http_client
            .post(token_url.clone())
            .basic_auth(api_key_id, Some(api_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        logging::trace_request(
            self.logging,
            format_args!("<-- {} POST {token_url}", status.as_u16()),
        );
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::auth(format!(
                "token request for {api_key_id} returned {}: {body}",
                status.as_u16()
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::auth(format!("unreadable token response: {e}")))?;
        Ok(body.into())
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
