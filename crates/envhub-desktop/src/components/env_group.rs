//! Group bucket component

use dioxus::prelude::*;

use envhub_core::Group;

use crate::actions;
use crate::components::EnvItem;
use crate::state::AppState;

/// One group bucket: header with name controls, member rows, and a drop
/// zone when the bucket is empty
#[component]
pub fn EnvGroup(group: Group) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let mut draft = use_signal(String::new);
    let mut editing = use_signal(|| false);

    let is_placeholder = group.is_placeholder();
    let name = group.name().unwrap_or_default().to_string();
    let title = group.to_string();
    let members = if is_placeholder {
        Vec::new()
    } else {
        (state.store)().entries_in_group(&name)
    };

    let submit = {
        let target = group.clone();
        move || {
            let value = draft().trim().to_string();
            if value.is_empty() {
                return;
            }
            actions::submit_group_name(state, target.clone(), value);
            editing.set(false);
        }
    };
    let mut submit_on_key = submit.clone();
    let mut submit_on_click = submit;

    let rename_source = name.clone();
    let drop_target = name.clone();

    rsx! {
        section {
            class: "env-group",
            style: "
                margin-top: 16px;
                border: 1px solid {colors.border_light};
                border-radius: 8px;
                background: {colors.bg_secondary};
                overflow: hidden;
            ",

            header {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    padding: 10px 12px;
                    border-bottom: 1px solid {colors.border_light};
                ",

                if is_placeholder || editing() {
                    input {
                        value: "{draft}",
                        placeholder: "Group name",
                        oninput: move |evt| draft.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                submit_on_key();
                            }
                        },
                        style: "
                            padding: 6px 8px;
                            border: 1px solid {colors.border};
                            border-radius: 4px;
                            background: {colors.bg_primary};
                            color: {colors.text_primary};
                        ",
                    }
                    button {
                        onclick: move |_| submit_on_click(),
                        style: "
                            padding: 6px 12px;
                            border: none;
                            border-radius: 4px;
                            background: {colors.accent};
                            color: {colors.accent_text};
                            cursor: pointer;
                        ",
                        if is_placeholder { "Create" } else { "Save" }
                    }
                    button {
                        onclick: move |_| {
                            if is_placeholder {
                                state.store.write().cancel_group();
                            } else {
                                editing.set(false);
                            }
                        },
                        style: "
                            padding: 6px 12px;
                            border: 1px solid {colors.border};
                            border-radius: 4px;
                            background: transparent;
                            color: {colors.text_secondary};
                            cursor: pointer;
                        ",
                        "Cancel"
                    }
                } else {
                    h2 {
                        style: "
                            font-size: 14px;
                            font-weight: 600;
                            margin: 0;
                            color: {colors.text_primary};
                        ",
                        "{title}"
                    }
                    span {
                        style: "font-size: 12px; color: {colors.text_muted};",
                        "{members.len()}"
                    }
                    if !rename_source.is_empty() {
                        button {
                            onclick: move |_| {
                                draft.set(rename_source.clone());
                                editing.set(true);
                            },
                            style: "
                                margin-left: auto;
                                padding: 4px 10px;
                                border: none;
                                border-radius: 4px;
                                background: transparent;
                                color: {colors.text_muted};
                                cursor: pointer;
                            ",
                            "Rename"
                        }
                    }
                }
            }

            if !is_placeholder {
                if members.is_empty() {
                    div {
                        class: "empty-drop-zone",
                        ondragover: move |evt| {
                            evt.prevent_default();
                            state.store.write().drag_over_empty_group(&drop_target);
                        },
                        style: "
                            padding: 20px;
                            text-align: center;
                            font-size: 12px;
                            color: {colors.text_muted};
                        ",
                        "Drag entries here"
                    }
                } else {
                    for entry in members {
                        EnvItem { key: "{entry.id}", entry }
                    }
                }
            }
        }
    }
}
