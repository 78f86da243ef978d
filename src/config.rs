//! Client configuration
//!
//! A `ClientConfig` is the credential set stored in a profile file and used
//! to build an authenticated service client.

use crate::error::{Error, Result};
use crate::types::RegistrationInfo;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Default service endpoint
pub const DEFAULT_API_URL: &str = "https://api.e3db.com";

/// Environment variable overriding the service endpoint for registration
pub const API_URL_ENV: &str = "E3DB_API_URL";

/// Current profile file format version
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Credentials and connection settings for one client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Profile file format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Service base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key identifier (token exchange username)
    pub api_key_id: String,

    /// API secret (token exchange password)
    pub api_secret: String,

    /// Registered client identifier
    pub client_id: String,

    /// E-mail the client was registered with
    #[serde(default)]
    pub client_email: String,

    /// Trace service requests at info level
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub logging: bool,

    /// Per-request timeout
    #[serde(skip, default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl ClientConfig {
    /// Create a config from its required credentials
    pub fn new(
        api_url: impl Into<String>,
        api_key_id: impl Into<String>,
        api_secret: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            version: CONFIG_VERSION,
            api_url: api_url.into(),
            api_key_id: api_key_id.into(),
            api_secret: api_secret.into(),
            client_id: client_id.into(),
            client_email: String::new(),
            logging: false,
            timeout: default_timeout(),
        }
    }

    /// Build the profile contents for a freshly registered client
    pub fn from_registration(info: &RegistrationInfo) -> Self {
        let api_url = if info.api_url.is_empty() {
            default_api_url()
        } else {
            info.api_url.clone()
        };

        Self {
            client_email: info.client_email.clone(),
            ..Self::new(
                api_url,
                info.api_key_id.clone(),
                info.api_secret.clone(),
                info.client_id.clone(),
            )
        }
    }

    /// Parse a config from profile file contents
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that required fields are present and the URL parses
    pub fn validate(&self) -> Result<()> {
        if self.api_key_id.is_empty() {
            return Err(Error::missing_field("api_key_id"));
        }
        if self.api_secret.is_empty() {
            return Err(Error::missing_field("api_secret"));
        }
        if self.client_id.is_empty() {
            return Err(Error::missing_field("client_id"));
        }
        self.base_url()?;
        Ok(())
    }

    /// Parsed service base URL, always ending in `/` so paths join beneath it
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

/// Service endpoint for operations that run before any profile exists
pub fn api_url_from_env() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(default_api_url)
}

// Secrets never reach logs or the terminal.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("version", &self.version)
            .field("api_url", &self.api_url)
            .field("api_key_id", &self.api_key_id)
            .field("api_secret", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_email", &self.client_email)
            .field("logging", &self.logging)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client {} ({}) api_url={} api_key_id={} logging={}",
            self.client_id,
            if self.client_email.is_empty() {
                "no e-mail"
            } else {
                self.client_email.as_str()
            },
            self.api_url,
            self.api_key_id,
            self.logging
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn sample() -> ClientConfig {
        ClientConfig::new("https://api.example.com", "key", "secret", "client-1")
    }

    #[test]
    fn test_from_json_defaults() {
        let json = json!({
            "api_key_id": "key",
            "api_secret": "secret",
            "client_id": "client-1"
        })
        .to_string();

        let config = ClientConfig::from_json(&json).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.logging);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_json_reads_logging() {
        let json = json!({
            "api_key_id": "key",
            "api_secret": "secret",
            "client_id": "client-1",
            "logging": true
        })
        .to_string();

        assert!(ClientConfig::from_json(&json).unwrap().logging);
    }

    #[test_case("api_key_id" ; "api key id")]
    #[test_case("api_secret" ; "api secret")]
    #[test_case("client_id" ; "client id")]
    fn test_validate_missing_field(field: &str) {
        let mut value = serde_json::to_value(sample()).unwrap();
        value[field] = json!("");

        let err = ClientConfig::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { field: f } if f == field));
    }

    #[test]
    fn test_validate_bad_url() {
        let mut config = sample();
        config.api_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let mut config = sample();
        config.api_url = "https://api.example.com/e3db".to_string();
        let joined = config.base_url().unwrap().join("v1/storage/records").unwrap();
        assert_eq!(
            joined.as_str(),
            "https://api.example.com/e3db/v1/storage/records"
        );
    }

    #[test]
    fn test_logging_omitted_when_disabled() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("logging").is_none());
        assert!(value.get("timeout").is_none());
    }

    #[test]
    fn test_from_registration() {
        let info = RegistrationInfo {
            client_id: "c1".to_string(),
            api_key_id: "k1".to_string(),
            api_secret: "s1".to_string(),
            client_email: "a@example.com".to_string(),
            api_url: String::new(),
        };

        let config = ClientConfig::from_registration(&info);
        assert_eq!(config.client_id, "c1");
        assert_eq!(config.client_email, "a@example.com");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_display_and_debug_redact_secret() {
        let config = sample();
        let shown = config.to_string();
        assert!(shown.contains("client-1"));
        assert!(!shown.contains("secret"));
        assert!(!format!("{config:?}").contains("\"secret\""));
    }
}
