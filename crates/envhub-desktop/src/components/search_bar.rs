//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Search bar filtering entries by key or value
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let filter = (state.store)().filter().to_string();

    rsx! {
        div {
            class: "search-bar",
            style: "
                padding: 12px 24px;
                border-bottom: 1px solid {colors.border_light};
                background: {colors.bg_secondary};
            ",

            input {
                r#type: "text",
                placeholder: "Search keys or values...",
                value: "{filter}",
                oninput: move |evt| {
                    state.store.write().set_filter(evt.value());
                },
                style: "
                    width: 40%;
                    min-width: 260px;
                    padding: 8px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            if !filter.is_empty() {
                button {
                    onclick: move |_| state.store.write().set_filter(""),
                    style: "
                        margin-left: 8px;
                        padding: 8px 12px;
                        border: none;
                        border-radius: 6px;
                        background: transparent;
                        color: {colors.text_muted};
                        cursor: pointer;
                    ",
                    "Clear"
                }
            }
        }
    }
}
