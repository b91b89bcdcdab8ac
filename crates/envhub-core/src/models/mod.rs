//! Data model for environment variable records

mod entry;
mod group;

pub use entry::{DataType, EntryField, EntryId, EnvVar};
pub use group::Group;
