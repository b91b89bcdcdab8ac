//! In-memory state store and mutation operations
//!
//! `EnvStore` is the single source of truth for rendering: an ordered entry
//! sequence, an ordered group sequence, the active filter text, and the
//! current drag subject. Synchronous mutation operations apply user actions
//! optimistically; the `apply_*` methods fold the result of an asynchronous
//! remote call back in, re-locating the entry by id at apply time so a
//! structural edit made while the call was in flight can never retarget the
//! write-back.

use crate::models::{EntryField, EntryId, EnvVar, Group};
use crate::sync::RenameOutcome;

/// Owned editor state for the whole record collection
#[derive(Debug, Clone, PartialEq)]
pub struct EnvStore {
    entries: Vec<EnvVar>,
    groups: Vec<Group>,
    filter: String,
    dragged: Option<EntryId>,
}

impl Default for EnvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvStore {
    /// Create an empty store holding only the default bucket
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            groups: vec![Group::default_bucket()],
            filter: String::new(),
            dragged: None,
        }
    }

    /// All entries, in display order
    #[must_use]
    pub fn entries(&self) -> &[EnvVar] {
        &self.entries
    }

    /// The ordered group sequence
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The active filter text
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Set the active filter text
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// The current drag subject, if a drag is in progress
    #[must_use]
    pub const fn dragged(&self) -> Option<EntryId> {
        self.dragged
    }

    /// Look up an entry by id
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&EnvVar> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn entry_mut(&mut self, id: EntryId) -> Option<&mut EnvVar> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    fn index_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    // === Mutation operations ===

    /// Set one field on an entry and mark it dirty.
    ///
    /// No validation happens here; the remote store is the validation
    /// authority. An unrecognized datatype tag falls back to `String`, the
    /// same mapping hydration applies.
    pub fn update_field(&mut self, id: EntryId, field: EntryField, value: &str) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        match field {
            EntryField::Key => entry.key = value.to_string(),
            EntryField::Value => entry.value = value.to_string(),
            EntryField::DataType => entry.data_type = value.parse().unwrap_or_default(),
            EntryField::Group => entry.group = value.to_string(),
            EntryField::Notes => entry.notes = value.to_string(),
        }
        entry.has_changes = true;
    }

    /// Append a fresh local-only entry and return its id.
    ///
    /// The key starts empty; the user is expected to fill it before saving.
    pub fn add_entry(&mut self) -> EntryId {
        let entry = EnvVar::new_local();
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Append an unnamed group placeholder.
    ///
    /// Nothing stops a second placeholder from being appended while one is
    /// pending; `cancel_group` clears them all.
    pub fn begin_group(&mut self) {
        self.groups.push(Group::Placeholder);
    }

    /// Discard every pending placeholder. Entries are untouched.
    pub fn cancel_group(&mut self) {
        self.groups.retain(|group| !group.is_placeholder());
    }

    /// Resolve the first pending placeholder into a committed name.
    ///
    /// Returns false when no placeholder is pending.
    pub fn commit_placeholder(&mut self, name: &str) -> bool {
        let Some(slot) = self.groups.iter_mut().find(|group| group.is_placeholder()) else {
            return false;
        };
        *slot = Group::Named(name.to_string());
        true
    }

    // === Drag & drop ===

    /// Record the drag subject. No state mutation.
    pub fn drag_start(&mut self, id: EntryId) {
        self.dragged = Some(id);
    }

    /// Clear the drag subject. Called on every drag end, dropped or not.
    pub fn drag_end(&mut self) {
        self.dragged = None;
    }

    /// Reorder the drag subject to the target's position, adopting the
    /// target's group when it differs.
    ///
    /// Dragging an entry over itself is a no-op. The insertion index is the
    /// target's index in the pre-removal order, so dragging downward lands
    /// the subject after the target.
    pub fn drag_over(&mut self, target_id: EntryId) {
        let Some(drag_id) = self.dragged else {
            return;
        };
        if drag_id == target_id {
            return;
        }
        let (Some(target_index), Some(drag_index)) =
            (self.index_of(target_id), self.index_of(drag_id))
        else {
            return;
        };
        let target_group = self.entries[target_index].group.clone();

        let mut moved = self.entries.remove(drag_index);
        if moved.group != target_group {
            moved.group = target_group;
            moved.has_changes = true;
        }
        let index = target_index.min(self.entries.len());
        self.entries.insert(index, moved);
    }

    /// Reassign the drag subject into a group with no entries to anchor a
    /// position; the entry keeps its current index.
    ///
    /// A placeholder bucket has no name to assign, so drops onto one are
    /// handled by never calling this until the group is committed.
    pub fn drag_over_empty_group(&mut self, name: &str) {
        let Some(drag_id) = self.dragged else {
            return;
        };
        let Some(entry) = self.entry_mut(drag_id) else {
            return;
        };
        if entry.group != name {
            entry.group = name.to_string();
            entry.has_changes = true;
        }
    }

    // === Async write-backs ===

    /// Fold a save attempt's outcome back into the entry's status flags.
    ///
    /// Success clears dirty/local/error; failure sets the error flag and
    /// rolls nothing back. The default bucket is re-asserted on every save
    /// path.
    pub fn apply_save_result(&mut self, id: EntryId, ok: bool) {
        if let Some(entry) = self.entry_mut(id) {
            if ok {
                entry.has_changes = false;
                entry.local_only = false;
                entry.dml_error = false;
            } else {
                entry.dml_error = true;
            }
        }
        self.ensure_default_group();
    }

    /// Remove an entry after its remote delete succeeded (or was skipped
    /// for a local-only entry). Returns false when the id is unknown.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Apply a completed group rename: rename the slot, move exactly the
    /// members the fan-out reports, and re-assert the default bucket.
    ///
    /// Members whose remote update failed keep their old group; deferred
    /// (local-only) members move locally and stay dirty until first saved.
    pub fn apply_group_rename(&mut self, old: &str, new: &str, outcome: &RenameOutcome) {
        if let Some(slot) = self
            .groups
            .iter_mut()
            .find(|group| group.name() == Some(old))
        {
            *slot = Group::Named(new.to_string());
        }
        for id in &outcome.renamed {
            if let Some(entry) = self.entry_mut(*id) {
                entry.group = new.to_string();
            }
        }
        for id in &outcome.deferred {
            if let Some(entry) = self.entry_mut(*id) {
                entry.group = new.to_string();
                entry.has_changes = true;
            }
        }
        self.ensure_default_group();
    }

    /// Replace the whole store contents from a hydration pass.
    ///
    /// Hydration already guarantees the default bucket, so nothing is
    /// re-asserted here.
    pub fn replace(&mut self, entries: Vec<EnvVar>, groups: Vec<Group>) {
        self.entries = entries;
        self.groups = groups;
        self.dragged = None;
    }

    fn ensure_default_group(&mut self) {
        if !self
            .groups
            .iter()
            .any(|group| group.name() == Some(""))
        {
            self.groups.push(Group::default_bucket());
        }
    }

    // === Derived views ===

    /// Entries matching the active filter: case-insensitive substring match
    /// on key OR value. An entry with an empty key can only match via its
    /// value.
    #[must_use]
    pub fn filtered_entries(&self) -> Vec<EnvVar> {
        if self.filter.is_empty() {
            return self.entries.clone();
        }
        let filter = self.filter.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                (!entry.key.is_empty() && entry.key.to_lowercase().contains(&filter))
                    || (!entry.value.is_empty() && entry.value.to_lowercase().contains(&filter))
            })
            .cloned()
            .collect()
    }

    /// Filtered entries belonging to the named group, in store order
    #[must_use]
    pub fn entries_in_group(&self, name: &str) -> Vec<EnvVar> {
        self.filtered_entries()
            .into_iter()
            .filter(|entry| entry.group == name)
            .collect()
    }

    /// Unfiltered snapshot of the named group's members (rename fan-out
    /// input)
    #[must_use]
    pub fn group_members(&self, name: &str) -> Vec<EnvVar> {
        self.entries
            .iter()
            .filter(|entry| entry.group == name)
            .cloned()
            .collect()
    }
}
