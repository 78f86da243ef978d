//! Credential and token types

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::fmt;
use url::Url;

/// Seconds before expiry at which a token is no longer handed out
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// API key pair and the endpoint it is exchanged at
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub token_url: Url,
    pub api_key_id: String,
    pub api_secret: String,
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("token_url", &self.token_url.as_str())
            .field("api_key_id", &self.api_key_id)
            .finish_non_exhaustive()
    }
}

/// Bearer token issued by the token endpoint
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub value: String,
    /// `None` when the endpoint gave no lifetime
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Token valid for `seconds` from now
    pub fn valid_for(value: impl Into<String>, seconds: i64) -> Self {
        Self::new(value, Some(Utc::now() + Duration::seconds(seconds)))
    }

    /// Whether the token can still be used at `now`
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .map_or(true, |at| now + Duration::seconds(EXPIRY_MARGIN_SECS) < at)
    }

    pub fn is_usable(&self) -> bool {
        self.is_usable_at(Utc::now())
    }
}

/// Token endpoint response body
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl From<TokenResponse> for AccessToken {
    fn from(response: TokenResponse) -> Self {
        match response.expires_in {
            Some(seconds) => AccessToken::valid_for(response.access_token, seconds),
            None => AccessToken::new(response.access_token, None),
        }
    }
}
