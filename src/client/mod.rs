//! Record service client
//!
//! The command layer talks to the service only through two traits:
//!
//! - [`ClientProvider`] resolves configuration into a client, checks and
//!   saves local profiles, and registers new clients.
//! - [`RecordService`] is one authenticated client: query, read and write
//!   records.
//!
//! [`E3dbProvider`] and [`E3dbClient`] implement them over HTTP.

mod e3db;
mod provider;
mod search;

pub use e3db::E3dbClient;
pub use provider::{E3dbProvider, REGISTER_PATH};
pub use search::SEARCH_PATH;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::{QueryFilter, Record, RecordStream, RegistrationInfo, RegistrationOpts};
use async_trait::async_trait;

/// One authenticated connection to the record service
#[async_trait]
pub trait RecordService: Send + Sync {
    /// Start a query; pages are fetched as the stream is pulled
    fn query(&self, filter: QueryFilter) -> RecordStream<'_>;

    /// Create an empty record of the given type owned by this client
    fn new_record(&self, record_type: &str) -> Record;

    /// Store a record, returning its assigned identifier
    async fn write(&self, record: Record) -> Result<String>;

    /// Fetch a record by identifier
    async fn read(&self, record_id: &str) -> Result<Record>;
}

/// Source of configured clients and local profile persistence
#[async_trait]
pub trait ClientProvider: Send + Sync {
    /// Client type produced by this provider
    type Client: RecordService;

    /// Build a client from the default profile
    fn default_client(&self) -> Result<Self::Client>;

    /// Load a named profile's configuration
    fn load_config(&self, profile: &str) -> Result<ClientConfig>;

    /// Build a client from an explicit configuration
    fn build_client(&self, config: ClientConfig) -> Result<Self::Client>;

    /// Check whether a profile is already stored locally
    fn profile_exists(&self, profile: &str) -> bool;

    /// Register a new client with the service
    async fn register(&self, email: &str, opts: RegistrationOpts) -> Result<RegistrationInfo>;

    /// Persist registration credentials under a profile, never overwriting
    fn save_config(&self, profile: &str, info: &RegistrationInfo) -> Result<()>;
}
