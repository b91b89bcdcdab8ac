//! envhub-core - Core library for envhub
//!
//! This crate contains the record model, the in-memory state store with its
//! mutation operations, and the sync protocol that reconciles local edits
//! against the remote metadata store. It has no UI dependencies; the desktop
//! crate renders the store and drives these operations.

pub mod error;
pub mod models;
pub mod remote;
pub mod store;
pub mod sync;

pub use error::{Error, Result};
pub use models::{DataType, EntryField, EntryId, EnvVar, Group};
pub use remote::{FieldValue, HttpMetadataClient, MetadataStore, RawRecord, RecordPayload};
pub use store::EnvStore;
pub use sync::{MetadataSpace, RenameOutcome};
