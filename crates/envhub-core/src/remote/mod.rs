//! Remote metadata store abstraction
//!
//! Defines the capability set the sync protocol consumes, polymorphic over
//! any backing store. The HTTP implementation lives in [`http`]; tests use
//! scriptable in-memory implementations.

mod http;

pub use http::HttpMetadataClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One field/value pair in a record payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub field: String,
    pub value: String,
}

impl FieldValue {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Write payload for a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPayload {
    /// Fully-qualified record name (`namespace.key`)
    pub full_name: String,
    /// Display label
    pub label: String,
    /// Field values carried by this write
    pub values: Vec<FieldValue>,
}

/// Raw record returned by a bulk retrieve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Record key within the namespace
    pub developer_name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub datatype: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Capability set of the remote metadata store.
///
/// Every call is terminal: a failure is reported once and never retried
/// here. A store-level rejection surfaces as [`crate::Error::Remote`] with
/// the store's error detail.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Bulk read of all records, selecting the given fields
    async fn retrieve_all(&self, fields: &[&str]) -> Result<Vec<RawRecord>>;

    /// Create a new record
    async fn create(&self, record_type: &str, payload: &RecordPayload) -> Result<()>;

    /// Update an existing record
    async fn update(&self, record_type: &str, payload: &RecordPayload) -> Result<()>;

    /// Delete a record by its fully-qualified name
    async fn delete(&self, record_type: &str, full_name: &str) -> Result<()>;
}
