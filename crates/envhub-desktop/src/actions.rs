//! Shared record actions used by UI components.
//!
//! Each action follows the same shape: snapshot the entry, run the remote
//! phase in a spawned task, then fold the outcome back into the store by id.

use dioxus::prelude::*;

use envhub_core::{sync, EntryId, Group};

use crate::state::AppState;

/// Save one entry: `create` when local-only, `update` otherwise.
///
/// Failure sets the entry's error flag and surfaces the remote message;
/// edits are never rolled back.
pub fn save_entry(mut state: AppState, id: EntryId) {
    let Some(snapshot) = state.store.read().entry(id).cloned() else {
        return;
    };
    let Some(remote) = state.remote.read().clone() else {
        state.surface_error("Remote store is not configured");
        return;
    };
    let space = state.space.read().clone();

    spawn(async move {
        match sync::push_entry(remote.as_ref(), &space, &snapshot).await {
            Ok(()) => {
                tracing::debug!("Saved entry '{}'", snapshot.key);
                state.store.write().apply_save_result(id, true);
            }
            Err(error) => {
                tracing::error!("Failed to save '{}': {error}", snapshot.key);
                state.store.write().apply_save_result(id, false);
                state.surface_error(error.to_string());
            }
        }
    });
}

/// Delete one entry. The remote delete runs first for non-local entries;
/// removal from the store is applied only when it succeeds.
pub fn delete_entry(mut state: AppState, id: EntryId) {
    let Some(snapshot) = state.store.read().entry(id).cloned() else {
        return;
    };
    let Some(remote) = state.remote.read().clone() else {
        state.surface_error("Remote store is not configured");
        return;
    };
    let space = state.space.read().clone();

    spawn(async move {
        match sync::push_delete(remote.as_ref(), &space, &snapshot).await {
            Ok(()) => {
                tracing::debug!("Deleted entry '{}'", snapshot.key);
                state.store.write().remove_entry(id);
            }
            Err(error) => {
                tracing::error!("Failed to delete '{}': {error}", snapshot.key);
                state.surface_error(error.to_string());
            }
        }
    });
}

/// Commit a group name: resolve a placeholder in place, or rename a
/// committed group and fan out one update per member.
///
/// Member failures stay out of the notice banner; the outcome is logged and
/// the affected entries keep their old group.
pub fn submit_group_name(mut state: AppState, group: Group, new_name: String) {
    match group {
        Group::Placeholder => {
            state.store.write().commit_placeholder(&new_name);
        }
        Group::Named(old) => {
            let members = state.store.read().group_members(&old);
            let Some(remote) = state.remote.read().clone() else {
                state.surface_error("Remote store is not configured");
                return;
            };
            let space = state.space.read().clone();

            spawn(async move {
                let outcome =
                    sync::rename_group_members(remote.as_ref(), &space, &members, &new_name).await;
                if !outcome.fully_applied() {
                    tracing::warn!(
                        "Renamed {} of {} members of '{old}'",
                        outcome.renamed.len(),
                        members.len()
                    );
                }
                state
                    .store
                    .write()
                    .apply_group_rename(&old, &new_name, &outcome);
            });
        }
    }
}
