//! Error notice banner

use dioxus::prelude::*;

use crate::state::AppState;

/// Dismissible banner carrying the latest remote error message
#[component]
pub fn NoticeBanner() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let Some(message) = (state.notice)() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "notice-banner",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 10px 24px;
                background: {colors.danger};
                color: #ffffff;
                font-size: 13px;
            ",
            span { "{message}" }
            button {
                onclick: move |_| state.notice.set(None),
                style: "
                    border: none;
                    background: transparent;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                ",
                "Dismiss"
            }
        }
    }
}
