//! Entry model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for an entry, using UUID v7 (time-sortable)
///
/// Entries are always located by id - never by positional index captured
/// before an await, and never by reference identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new unique entry ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// How consumers of the remote store should interpret an entry's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataType {
    /// Plain string value
    #[default]
    #[serde(rename = "String")]
    Str,
    /// Numeric value
    Number,
    /// Boolean value
    Boolean,
}

impl DataType {
    /// All data types, in display order
    pub const ALL: [Self; 3] = [Self::Str, Self::Number, Self::Boolean];

    /// The wire/display name of this data type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Str => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(Self::Str),
            "Number" => Ok(Self::Number),
            "Boolean" => Ok(Self::Boolean),
            _ => Err(()),
        }
    }
}

/// Editable fields of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Key,
    Value,
    DataType,
    Group,
    Notes,
}

/// One environment variable record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    /// Stable local identifier
    pub id: EntryId,
    /// Record key; namespaced into the fully-qualified remote name
    pub key: String,
    /// Full value payload
    pub value: String,
    /// Interpretation tag for the value
    pub data_type: DataType,
    /// Owning group name; `""` is the default bucket
    pub group: String,
    /// Free-text notes
    pub notes: String,
    /// Entry exists only in memory, never created remotely
    pub local_only: bool,
    /// Local state diverges from the last known-synced remote state
    pub has_changes: bool,
    /// The most recent remote write for this entry failed
    pub dml_error: bool,
}

impl EnvVar {
    /// Create a fresh local-only entry with defaults
    #[must_use]
    pub fn new_local() -> Self {
        Self {
            id: EntryId::new(),
            key: String::new(),
            value: String::new(),
            data_type: DataType::Str,
            group: String::new(),
            notes: String::new(),
            local_only: true,
            has_changes: false,
            dml_error: false,
        }
    }

    /// Build an entry from a hydrated remote record
    #[must_use]
    pub fn from_remote(
        key: impl Into<String>,
        value: impl Into<String>,
        data_type: DataType,
        group: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            key: key.into(),
            value: value.into(),
            data_type,
            group: group.into(),
            notes: notes.into(),
            local_only: false,
            has_changes: false,
            dml_error: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entry_id_unique() {
        let id1 = EntryId::new();
        let id2 = EntryId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_entry_id_parse() {
        let id = EntryId::new();
        let parsed: EntryId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_data_type_round_trip() {
        for dt in DataType::ALL {
            assert_eq!(dt.as_str().parse::<DataType>().unwrap(), dt);
        }
    }

    #[test]
    fn test_data_type_unknown() {
        assert!("Currency".parse::<DataType>().is_err());
    }

    #[test]
    fn test_new_local_defaults() {
        let entry = EnvVar::new_local();
        assert_eq!(entry.data_type, DataType::Str);
        assert_eq!(entry.group, "");
        assert!(entry.local_only);
        assert!(!entry.has_changes);
        assert!(!entry.dml_error);
    }

    #[test]
    fn test_from_remote_is_synced() {
        let entry = EnvVar::from_remote("HOST", "localhost", DataType::Str, "net", "");
        assert!(!entry.local_only);
        assert!(!entry.has_changes);
        assert!(!entry.dml_error);
    }
}
