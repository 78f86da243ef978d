//! HTTP-backed record service client

use super::search::query_stream;
use super::RecordService;
use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::IndexPaginator;
use crate::types::{QueryFilter, Record, RecordStream};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Path of the records collection, relative to the API URL
pub const RECORDS_PATH: &str = "v1/storage/records";

/// Authenticated client for one profile
#[derive(Debug)]
pub struct E3dbClient {
    config: ClientConfig,
    base_url: Url,
    http: HttpClient,
    paginator: IndexPaginator,
}

impl E3dbClient {
    /// Build a client from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?;

        let http_config = HttpClientConfig::builder()
            .base_url(base_url.as_str())
            .timeout(config.timeout)
            .logging(config.logging)
            .build();
        let http = HttpClient::with_config(http_config)?;
        let authenticator = Authenticator::for_client(&config, http.inner().clone())?;

        debug!("Built client {} for {}", config.client_id, base_url);

        Ok(Self {
            config,
            base_url,
            http: http.with_authenticator(authenticator),
            paginator: IndexPaginator::default(),
        })
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Registered client identifier
    pub fn client_id(&self) -> &str {
        &self.config.client_id
    }

    /// URL of a single record, with the identifier percent-encoded
    pub(crate) fn record_url(&self, record_id: &str) -> Result<Url> {
        let mut url = self.base_url.join(RECORDS_PATH)?;
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("API URL cannot be a base: {}", self.base_url)))?
            .push(record_id);
        Ok(url)
    }
}

#[async_trait]
impl RecordService for E3dbClient {
    fn query(&self, filter: QueryFilter) -> RecordStream<'_> {
        query_stream(&self.http, &self.paginator, filter)
    }

    fn new_record(&self, record_type: &str) -> Record {
        let mut record = Record::new(record_type);
        record.meta.writer_id.clone_from(&self.config.client_id);
        record.meta.user_id.clone_from(&self.config.client_id);
        record
    }

    async fn write(&self, record: Record) -> Result<String> {
        let stored: Record = self.http.post_json(RECORDS_PATH, &record).await?;

        if stored.meta.record_id.is_empty() {
            return Err(Error::decode("write response carried no record_id"));
        }
        Ok(stored.meta.record_id)
    }

    async fn read(&self, record_id: &str) -> Result<Record> {
        if record_id.is_empty() {
            return Err(Error::RecordNotFound {
                record_id: String::new(),
            });
        }

        let url = self.record_url(record_id)?;
        match self.http.get_json::<Record>(url.as_str()).await {
            Err(e) if e.is_not_found() => Err(Error::RecordNotFound {
                record_id: record_id.to_string(),
            }),
            other => other,
        }
    }
}
