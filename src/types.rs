//! Common types used throughout the E3DB CLI
//!
//! Records, query filters and registration payloads shared between the
//! command layer and the service client.

use crate::error::Result;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::pin::Pin;

/// Record payload and plaintext metadata map
pub type StringMap = BTreeMap<String, String>;

/// Lazy, forward-only sequence of records produced by a query
///
/// Pages are fetched by the producer as the consumer pulls; at most one
/// page of results is buffered at any time.
pub type RecordStream<'a> = Pin<Box<dyn Stream<Item = Result<Record>> + Send + 'a>>;

// ============================================================================
// Records
// ============================================================================

/// Descriptive metadata stored alongside each record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Service-assigned identifier (empty until written)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub record_id: String,

    /// Client that wrote the record
    #[serde(default)]
    pub writer_id: String,

    /// Client the record is about
    #[serde(default)]
    pub user_id: String,

    /// Content type
    #[serde(rename = "type")]
    pub record_type: String,

    /// Unencrypted, queryable metadata
    #[serde(default)]
    pub plain: StringMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// A typed record with optional payload data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub meta: Meta,

    #[serde(default)]
    pub data: StringMap,
}

impl Record {
    /// Create an empty record of the given type
    pub fn new(record_type: impl Into<String>) -> Self {
        Self {
            meta: Meta {
                record_type: record_type.into(),
                ..Default::default()
            },
            data: StringMap::new(),
        }
    }

    /// Record identifier
    pub fn id(&self) -> &str {
        &self.meta.record_id
    }

    /// Record content type
    pub fn record_type(&self) -> &str {
        &self.meta.record_type
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Constraints for a record query
///
/// Empty sets leave that dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    pub content_types: Vec<String>,
    pub record_ids: Vec<String>,
    pub writer_ids: Vec<String>,
    pub user_ids: Vec<String>,
    /// Return record payloads along with metadata
    pub include_data: bool,
}

impl QueryFilter {
    /// Create an unconstrained filter
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Registration
// ============================================================================

/// Options for registering a new client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationOpts {
    /// Trace the registration request
    pub logging: bool,
}

/// Credentials issued by a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInfo {
    pub client_id: String,
    pub api_key_id: String,
    pub api_secret: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub api_url: String,
}
