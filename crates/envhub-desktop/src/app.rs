//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use envhub_core::{sync, EnvStore, HttpMetadataClient, MetadataSpace, MetadataStore};

use crate::components::{EnvGroup, NoticeBanner, SearchBar, TableOfContents, Toolbar};
use crate::config::DesktopConfig;
use crate::state::{AppState, SyncStatus};
use crate::theme::resolve_theme;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let store = use_signal(EnvStore::new);
    let remote: Signal<Option<Arc<dyn MetadataStore>>> = use_signal(|| None);
    let space = use_signal(|| MetadataSpace::new("EnvVarRecord", "EnvVar"));
    let sync_status = use_signal(|| SyncStatus::Loading);
    let notice = use_signal(|| None::<String>);
    let theme = use_signal(resolve_theme);
    let mut hydrated = use_signal(|| false);

    let mut state = use_context_provider(|| AppState {
        store,
        remote,
        space,
        sync_status,
        notice,
        theme,
    });

    // One-shot hydration from the remote store (only once)
    use_effect(move || {
        if hydrated() {
            return;
        }
        hydrated.set(true); // Mark immediately to prevent double init

        spawn(async move {
            let Some(config) = DesktopConfig::from_env() else {
                tracing::warn!("No remote store configured; starting offline");
                state.sync_status.set(SyncStatus::Offline);
                state.surface_error(
                    "Remote store is not configured (set ENVHUB_API_BASE_URL and ENVHUB_ACCESS_TOKEN)",
                );
                return;
            };

            let client = match HttpMetadataClient::new(&config.api_base_url, &config.access_token)
            {
                Ok(client) => Arc::new(client) as Arc<dyn MetadataStore>,
                Err(error) => {
                    tracing::error!("Failed to build metadata client: {error}");
                    state.sync_status.set(SyncStatus::Error);
                    state.surface_error(error.to_string());
                    return;
                }
            };
            state.space.set(config.space);
            state.remote.set(Some(Arc::clone(&client)));

            match sync::hydrate(client.as_ref()).await {
                Ok((entries, groups)) => {
                    tracing::info!("Loaded {} records from the remote store", entries.len());
                    state.store.write().replace(entries, groups);
                    state.sync_status.set(SyncStatus::Synced);
                }
                Err(error) => {
                    tracing::error!("Failed to load records: {error}");
                    state.sync_status.set(SyncStatus::Error);
                    state.surface_error(error.to_string());
                }
            }
        });
    });

    let colors = theme().palette();
    let groups = (state.store)().groups().to_vec();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            NoticeBanner {}

            header {
                style: "
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 16px 24px;
                    border-bottom: 1px solid {colors.border};
                ",
                h1 {
                    style: "font-size: 18px; font-weight: 600; margin: 0;",
                    "Environment Variables"
                }
                TableOfContents {}
            }

            Toolbar {}
            SearchBar {}

            div {
                class: "group-list",
                style: "padding: 8px 24px 24px 24px;",
                for (index, group) in groups.into_iter().enumerate() {
                    EnvGroup { key: "{index}", group }
                }
            }
        }
    }
}
