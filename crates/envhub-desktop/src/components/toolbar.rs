//! Toolbar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Toolbar with add-entry / add-group controls and the sync status
#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let status = (state.sync_status)();

    rsx! {
        div {
            class: "toolbar",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 12px 24px;
                background: {colors.bg_secondary};
                border-bottom: 1px solid {colors.border_light};
            ",

            button {
                onclick: move |_| {
                    state.store.write().add_entry();
                },
                style: "
                    padding: 8px 14px;
                    border: none;
                    border-radius: 6px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                    font-weight: 500;
                    cursor: pointer;
                ",
                "+ Add Variable"
            }

            button {
                onclick: move |_| {
                    state.store.write().begin_group();
                },
                style: "
                    padding: 8px 14px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    cursor: pointer;
                ",
                "+ Add Group"
            }

            span {
                style: "margin-left: auto; font-size: 12px; color: {colors.text_muted};",
                "{status.label()}"
            }
        }
    }
}
