//! Entry row component

use dioxus::prelude::*;

use envhub_core::{DataType, EntryField, EnvVar};

use crate::actions;
use crate::state::AppState;

/// One editable entry row with save/delete controls and drag handlers
#[component]
pub fn EnvItem(entry: EnvVar) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let id = entry.id;

    let border_left = if entry.dml_error {
        format!("3px solid {}", colors.danger)
    } else if entry.has_changes {
        format!("3px solid {}", colors.warning)
    } else {
        "3px solid transparent".to_string()
    };

    rsx! {
        div {
            class: "env-item",
            draggable: true,
            ondragstart: move |_| state.store.write().drag_start(id),
            ondragover: move |evt| {
                evt.prevent_default();
                state.store.write().drag_over(id);
            },
            ondragend: move |_| state.store.write().drag_end(),
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 8px 12px;
                border-bottom: 1px solid {colors.border_light};
                border-left: {border_left};
                background: {colors.bg_primary};
            ",

            input {
                class: "env-key",
                value: "{entry.key}",
                placeholder: "KEY",
                oninput: move |evt| {
                    state
                        .store
                        .write()
                        .update_field(id, EntryField::Key, &evt.value());
                },
                style: "
                    width: 180px;
                    padding: 6px 8px;
                    border: 1px solid {colors.border};
                    border-radius: 4px;
                    font-family: monospace;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",
            }

            input {
                class: "env-value",
                value: "{entry.value}",
                placeholder: "value",
                oninput: move |evt| {
                    state
                        .store
                        .write()
                        .update_field(id, EntryField::Value, &evt.value());
                },
                style: "
                    flex: 1;
                    padding: 6px 8px;
                    border: 1px solid {colors.border};
                    border-radius: 4px;
                    font-family: monospace;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",
            }

            select {
                onchange: move |evt| {
                    state
                        .store
                        .write()
                        .update_field(id, EntryField::DataType, &evt.value());
                },
                style: "
                    padding: 6px 8px;
                    border: 1px solid {colors.border};
                    border-radius: 4px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",
                for data_type in DataType::ALL {
                    option {
                        value: "{data_type}",
                        selected: data_type == entry.data_type,
                        "{data_type}"
                    }
                }
            }

            input {
                class: "env-notes",
                value: "{entry.notes}",
                placeholder: "Notes",
                oninput: move |evt| {
                    state
                        .store
                        .write()
                        .update_field(id, EntryField::Notes, &evt.value());
                },
                style: "
                    width: 200px;
                    padding: 6px 8px;
                    border: 1px solid {colors.border};
                    border-radius: 4px;
                    background: {colors.bg_primary};
                    color: {colors.text_secondary};
                ",
            }

            if entry.local_only {
                span {
                    style: "font-size: 11px; color: {colors.text_muted};",
                    "unsaved"
                }
            }
            if entry.dml_error {
                span {
                    style: "font-size: 11px; color: {colors.danger};",
                    "sync failed"
                }
            }

            button {
                onclick: move |_| actions::save_entry(state, id),
                style: "
                    padding: 6px 12px;
                    border: none;
                    border-radius: 4px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                    cursor: pointer;
                ",
                "Save"
            }
            button {
                onclick: move |_| actions::delete_entry(state, id),
                style: "
                    padding: 6px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 4px;
                    background: transparent;
                    color: {colors.danger};
                    cursor: pointer;
                ",
                "Delete"
            }
        }
    }
}
