//! Group index component

use dioxus::prelude::*;

use crate::state::AppState;

/// Navigational index of group names; clicking one sets the filter text
#[component]
pub fn TableOfContents() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let names: Vec<String> = (state.store)()
        .groups()
        .iter()
        .filter_map(|group| group.name())
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect();

    rsx! {
        nav {
            class: "toc",
            style: "display: flex; gap: 4px; flex-wrap: wrap;",
            for name in names {
                {
                    let target = name.clone();
                    rsx! {
                        button {
                            onclick: move |_| {
                                state.store.write().set_filter(target.clone());
                            },
                            style: "
                                padding: 4px 10px;
                                border: 1px solid {colors.border};
                                border-radius: 12px;
                                background: {colors.bg_secondary};
                                color: {colors.text_secondary};
                                font-size: 12px;
                                cursor: pointer;
                            ",
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
