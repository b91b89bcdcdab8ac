//! Sync protocol between the state store and the remote metadata store
//!
//! Every remote write is a two-phase commit at the granularity of a single
//! entry: the local phase has already mutated the store optimistically, the
//! remote phase here is a pure async call whose outcome the caller folds
//! back in through the store's id-based `apply_*` methods. Nothing is
//! retried; a failed attempt is terminal until the user re-triggers it.

use crate::error::Result;
use crate::models::{EntryId, EnvVar, Group};
use crate::remote::{FieldValue, MetadataStore, RawRecord, RecordPayload};

const FIELD_VALUE: &str = "value";
const FIELD_SHORT_VALUE: &str = "val";
const FIELD_DATATYPE: &str = "datatype";
const FIELD_GROUP: &str = "group";
const FIELD_NOTES: &str = "notes";

/// Fields selected by the hydration bulk read
const RETRIEVE_FIELDS: [&str; 5] = [
    "developerName",
    FIELD_VALUE,
    FIELD_DATATYPE,
    FIELD_GROUP,
    FIELD_NOTES,
];

/// The short-value shadow field carries at most this many characters
const SHORT_VALUE_MAX: usize = 255;

/// Names the remote record class and the namespace prefix records live under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataSpace {
    /// Remote record type passed to every store call
    pub record_type: String,
    /// Namespace prefix for fully-qualified record names
    pub prefix: String,
}

impl MetadataSpace {
    pub fn new(record_type: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            prefix: prefix.into(),
        }
    }

    /// Fully-qualified name of a record: `prefix.key`.
    ///
    /// An empty key produces the malformed `"prefix."`; it is forwarded
    /// as-is, the remote store being the validation authority.
    #[must_use]
    pub fn full_name(&self, key: &str) -> String {
        format!("{}.{key}", self.prefix)
    }
}

/// Outcome of a group-rename fan-out: one independent remote write per
/// member, each with its own result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Members whose remote update succeeded
    pub renamed: Vec<EntryId>,
    /// Local-only members skipped remotely; the rename rides their first save
    pub deferred: Vec<EntryId>,
    /// Members whose remote update failed, with the error detail
    pub failed: Vec<(EntryId, String)>,
}

impl RenameOutcome {
    /// Whether every member that needed a remote write got one
    #[must_use]
    pub fn fully_applied(&self) -> bool {
        self.failed.is_empty()
    }
}

fn short_value(value: &str) -> String {
    value.chars().take(SHORT_VALUE_MAX).collect()
}

/// Full write payload for an entry
#[must_use]
pub fn entry_payload(space: &MetadataSpace, entry: &EnvVar) -> RecordPayload {
    RecordPayload {
        full_name: space.full_name(&entry.key),
        label: entry.key.clone(),
        values: vec![
            FieldValue::new(FIELD_VALUE, &entry.value),
            FieldValue::new(FIELD_SHORT_VALUE, short_value(&entry.value)),
            FieldValue::new(FIELD_DATATYPE, entry.data_type.as_str()),
            FieldValue::new(FIELD_GROUP, &entry.group),
            FieldValue::new(FIELD_NOTES, &entry.notes),
        ],
    }
}

/// Group-only payload used by the rename fan-out
#[must_use]
pub fn group_payload(space: &MetadataSpace, entry: &EnvVar, new_name: &str) -> RecordPayload {
    RecordPayload {
        full_name: space.full_name(&entry.key),
        label: entry.key.clone(),
        values: vec![FieldValue::new(FIELD_GROUP, new_name)],
    }
}

/// One-shot startup load: retrieve every record and derive the entry and
/// group sequences. Observed groups keep first-seen order, a missing group
/// hydrates as `""`, and the default bucket is always present.
pub async fn hydrate(remote: &dyn MetadataStore) -> Result<(Vec<EnvVar>, Vec<Group>)> {
    let records = remote.retrieve_all(&RETRIEVE_FIELDS).await?;

    let mut group_names: Vec<String> = Vec::new();
    for record in &records {
        let group = record.group.clone().unwrap_or_default();
        if !group_names.contains(&group) {
            group_names.push(group);
        }
    }
    if !group_names.iter().any(String::is_empty) {
        group_names.push(String::new());
    }

    let entries = records.into_iter().map(entry_from_record).collect();
    let groups = group_names.into_iter().map(Group::Named).collect();
    Ok((entries, groups))
}

fn entry_from_record(record: RawRecord) -> EnvVar {
    let data_type = record
        .datatype
        .and_then(|tag| tag.parse().ok())
        .unwrap_or_default();
    EnvVar::from_remote(
        record.developer_name,
        record.value.unwrap_or_default(),
        data_type,
        record.group.unwrap_or_default(),
        record.notes.unwrap_or_default(),
    )
}

/// Remote phase of a save: `create` for a local-only entry, `update`
/// otherwise. The caller applies the result via
/// [`crate::EnvStore::apply_save_result`].
pub async fn push_entry(
    remote: &dyn MetadataStore,
    space: &MetadataSpace,
    entry: &EnvVar,
) -> Result<()> {
    let payload = entry_payload(space, entry);
    if entry.local_only {
        remote.create(&space.record_type, &payload).await
    } else {
        remote.update(&space.record_type, &payload).await
    }
}

/// Remote phase of a delete. A local-only entry was never created remotely,
/// so no call is made and the delete trivially succeeds.
pub async fn push_delete(
    remote: &dyn MetadataStore,
    space: &MetadataSpace,
    entry: &EnvVar,
) -> Result<()> {
    if entry.local_only {
        return Ok(());
    }
    remote
        .delete(&space.record_type, &space.full_name(&entry.key))
        .await
}

/// Fan-out of independent group updates, one per member, with no atomicity.
///
/// An update is issued for every non-local member even when the name is
/// unchanged. Local-only members are deferred: they were never created
/// remotely, so the rename only lands locally until their first save.
/// Failures are logged and collected; processing continues regardless.
pub async fn rename_group_members(
    remote: &dyn MetadataStore,
    space: &MetadataSpace,
    members: &[EnvVar],
    new_name: &str,
) -> RenameOutcome {
    let mut outcome = RenameOutcome::default();
    for member in members {
        if member.local_only {
            outcome.deferred.push(member.id);
            continue;
        }
        let payload = group_payload(space, member, new_name);
        match remote.update(&space.record_type, &payload).await {
            Ok(()) => outcome.renamed.push(member.id),
            Err(error) => {
                tracing::warn!(
                    "Failed to move '{}' to group '{new_name}': {error}",
                    member.key
                );
                outcome.failed.push((member.id, error.to_string()));
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{DataType, EntryField};
    use crate::store::EnvStore;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        RetrieveAll,
        Create(String),
        Update(String),
        Delete(String),
    }

    /// Scriptable in-memory store: mutations on listed full names fail.
    #[derive(Default)]
    struct MockStore {
        records: Vec<RawRecord>,
        fail_names: HashSet<String>,
        calls: Mutex<Vec<Call>>,
    }

    impl MockStore {
        fn failing(names: &[&str]) -> Self {
            Self {
                fail_names: names.iter().map(ToString::to_string).collect(),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn check(&self, full_name: &str) -> Result<()> {
            if self.fail_names.contains(full_name) {
                Err(Error::remote("rejected by store"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl MetadataStore for MockStore {
        async fn retrieve_all(&self, _fields: &[&str]) -> Result<Vec<RawRecord>> {
            self.calls.lock().unwrap().push(Call::RetrieveAll);
            Ok(self.records.clone())
        }

        async fn create(&self, _record_type: &str, payload: &RecordPayload) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Create(payload.full_name.clone()));
            self.check(&payload.full_name)
        }

        async fn update(&self, _record_type: &str, payload: &RecordPayload) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update(payload.full_name.clone()));
            self.check(&payload.full_name)
        }

        async fn delete(&self, _record_type: &str, full_name: &str) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Delete(full_name.to_string()));
            self.check(full_name)
        }
    }

    fn space() -> MetadataSpace {
        MetadataSpace::new("EnvVarRecord", "EnvVar")
    }

    fn record(name: &str, group: Option<&str>) -> RawRecord {
        RawRecord {
            developer_name: name.to_string(),
            value: Some(format!("{name}-value")),
            datatype: Some("String".to_string()),
            group: group.map(ToString::to_string),
            notes: None,
        }
    }

    fn synced(key: &str, group: &str) -> EnvVar {
        EnvVar::from_remote(key, "v", DataType::Str, group, "")
    }

    #[test]
    fn test_full_name_with_empty_key_is_forwarded_malformed() {
        assert_eq!(space().full_name(""), "EnvVar.");
        assert_eq!(space().full_name("HOST"), "EnvVar.HOST");
    }

    #[test]
    fn test_entry_payload_carries_all_fields() {
        let mut entry = synced("HOST", "net");
        entry.value = "localhost".to_string();
        entry.notes = "primary".to_string();
        let payload = entry_payload(&space(), &entry);

        assert_eq!(payload.full_name, "EnvVar.HOST");
        assert_eq!(payload.label, "HOST");
        let fields: Vec<_> = payload.values.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["value", "val", "datatype", "group", "notes"]);
        assert_eq!(payload.values[0].value, "localhost");
        assert_eq!(payload.values[2].value, "String");
        assert_eq!(payload.values[3].value, "net");
        assert_eq!(payload.values[4].value, "primary");
    }

    #[test]
    fn test_short_value_truncates_on_char_boundary() {
        let mut entry = synced("LONG", "");
        entry.value = "é".repeat(300);
        let payload = entry_payload(&space(), &entry);

        // full value untouched, shadow field capped at 255 characters
        assert_eq!(payload.values[0].value.chars().count(), 300);
        assert_eq!(payload.values[1].value.chars().count(), 255);
    }

    #[test]
    fn test_short_value_keeps_short_values_whole() {
        let mut entry = synced("SHORT", "");
        entry.value = "tiny".to_string();
        let payload = entry_payload(&space(), &entry);
        assert_eq!(payload.values[1].value, "tiny");
    }

    #[test]
    fn test_group_payload_carries_only_group_field() {
        let payload = group_payload(&space(), &synced("HOST", "old"), "new");
        assert_eq!(payload.full_name, "EnvVar.HOST");
        assert_eq!(payload.values.len(), 1);
        assert_eq!(payload.values[0], FieldValue::new("group", "new"));
    }

    #[tokio::test]
    async fn test_hydrate_collects_groups_in_first_seen_order() {
        let remote = MockStore {
            records: vec![
                record("A", Some("g2")),
                record("B", None),
                record("C", Some("g1")),
                record("D", Some("g2")),
            ],
            ..MockStore::default()
        };
        let (entries, groups) = hydrate(&remote).await.unwrap();

        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| !e.local_only && !e.has_changes));
        assert_eq!(entries[1].group, "");
        assert_eq!(
            groups,
            vec![
                Group::Named("g2".into()),
                Group::Named(String::new()),
                Group::Named("g1".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_hydrate_appends_default_bucket_when_absent() {
        let remote = MockStore {
            records: vec![record("A", Some("g1"))],
            ..MockStore::default()
        };
        let (_, groups) = hydrate(&remote).await.unwrap();
        assert_eq!(
            groups,
            vec![Group::Named("g1".into()), Group::Named(String::new())]
        );
    }

    #[tokio::test]
    async fn test_save_local_only_issues_create_never_update() {
        let remote = MockStore::default();
        let mut entry = synced("NEW", "");
        entry.local_only = true;

        push_entry(&remote, &space(), &entry).await.unwrap();
        assert_eq!(remote.calls(), vec![Call::Create("EnvVar.NEW".into())]);
    }

    #[tokio::test]
    async fn test_save_synced_issues_update_never_create() {
        let remote = MockStore::default();
        let entry = synced("OLD", "");

        push_entry(&remote, &space(), &entry).await.unwrap();
        assert_eq!(remote.calls(), vec![Call::Update("EnvVar.OLD".into())]);
    }

    #[tokio::test]
    async fn test_save_failure_sets_error_and_keeps_entry_local() {
        // addEntry then immediate save with an empty key: the malformed
        // "EnvVar." name is forwarded and the store rejects it.
        let remote = MockStore::failing(&["EnvVar."]);
        let mut store = EnvStore::new();
        let id = store.add_entry();
        let snapshot = store.entry(id).unwrap().clone();

        let result = push_entry(&remote, &space(), &snapshot).await;
        store.apply_save_result(id, result.is_ok());

        assert_eq!(remote.calls(), vec![Call::Create("EnvVar.".into())]);
        let failed = store.entry(id).unwrap();
        assert!(failed.dml_error);
        assert!(failed.local_only);
    }

    #[tokio::test]
    async fn test_save_success_clears_all_flags() {
        let remote = MockStore::default();
        let mut store = EnvStore::new();
        let id = store.add_entry();
        store.update_field(id, EntryField::Key, "FRESH");
        let snapshot = store.entry(id).unwrap().clone();

        let result = push_entry(&remote, &space(), &snapshot).await;
        store.apply_save_result(id, result.is_ok());

        let saved = store.entry(id).unwrap();
        assert!(!saved.local_only);
        assert!(!saved.has_changes);
        assert!(!saved.dml_error);
    }

    #[tokio::test]
    async fn test_delete_local_only_skips_remote_call() {
        let remote = MockStore::default();
        let mut store = EnvStore::new();
        let id = store.add_entry();
        let snapshot = store.entry(id).unwrap().clone();

        push_delete(&remote, &space(), &snapshot).await.unwrap();
        store.remove_entry(id);

        assert!(remote.calls().is_empty());
        assert!(store.entries().is_empty());
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_store_unchanged() {
        let remote = MockStore::failing(&["EnvVar.KEEP"]);
        let mut store = EnvStore::new();
        store.replace(
            vec![synced("KEEP", ""), synced("OTHER", "g1")],
            vec![Group::default_bucket(), Group::Named("g1".into())],
        );
        let before = store.clone();
        let snapshot = store.entries()[0].clone();

        let result = push_delete(&remote, &space(), &snapshot).await;
        assert!(result.is_err());
        // removal is not applied on failure
        assert_eq!(store, before);
        assert_eq!(remote.calls(), vec![Call::Delete("EnvVar.KEEP".into())]);
    }

    #[tokio::test]
    async fn test_delete_success_removes_entry() {
        let remote = MockStore::default();
        let mut store = EnvStore::new();
        store.replace(vec![synced("GONE", "")], vec![Group::default_bucket()]);
        let snapshot = store.entries()[0].clone();

        push_delete(&remote, &space(), &snapshot).await.unwrap();
        store.remove_entry(snapshot.id);

        assert!(store.entries().is_empty());
    }

    #[tokio::test]
    async fn test_rename_fan_out_partial_failure() {
        let remote = MockStore::failing(&["EnvVar.B"]);
        let mut local = synced("C", "old");
        local.local_only = true;
        let members = vec![synced("A", "old"), synced("B", "old"), local];

        let outcome = rename_group_members(&remote, &space(), &members, "new").await;

        assert_eq!(outcome.renamed, vec![members[0].id]);
        assert_eq!(outcome.deferred, vec![members[2].id]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0, members[1].id);
        assert!(!outcome.fully_applied());
        // local-only member never reached the store
        assert_eq!(
            remote.calls(),
            vec![
                Call::Update("EnvVar.A".into()),
                Call::Update("EnvVar.B".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_rename_with_unchanged_name_still_issues_updates() {
        let remote = MockStore::default();
        let members = vec![synced("A", "g1"), synced("B", "g1")];

        let outcome = rename_group_members(&remote, &space(), &members, "g1").await;

        assert_eq!(outcome.renamed.len(), 2);
        assert_eq!(
            remote.calls(),
            vec![
                Call::Update("EnvVar.A".into()),
                Call::Update("EnvVar.B".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_rename_apply_end_to_end() {
        let remote = MockStore::failing(&["EnvVar.B"]);
        let mut store = EnvStore::new();
        store.replace(
            vec![synced("A", "old"), synced("B", "old"), synced("X", "")],
            vec![Group::default_bucket(), Group::Named("old".into())],
        );
        let members = store.group_members("old");

        let outcome = rename_group_members(&remote, &space(), &members, "new").await;
        store.apply_group_rename("old", "new", &outcome);

        assert!(store.groups().contains(&Group::Named("new".into())));
        assert!(store.groups().contains(&Group::default_bucket()));
        let a = store.entries().iter().find(|e| e.key == "A").unwrap();
        let b = store.entries().iter().find(|e| e.key == "B").unwrap();
        assert_eq!(a.group, "new");
        // failed member silently keeps its old group
        assert_eq!(b.group, "old");
        assert!(!b.has_changes);
    }
}
