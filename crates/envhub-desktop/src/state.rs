//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use envhub_core::{EnvStore, MetadataSpace, MetadataStore};

use crate::theme::ResolvedTheme;

/// Current sync status for the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    Loading,
    Synced,
    Offline,
    Error,
}

impl SyncStatus {
    /// Short label rendered in the toolbar
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading…",
            Self::Synced => "synced",
            Self::Offline => "offline",
            Self::Error => "sync error",
        }
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// The record store; single source of truth for rendering
    pub store: Signal<EnvStore>,
    /// Remote metadata store, if configured
    pub remote: Signal<Option<Arc<dyn MetadataStore>>>,
    /// Record class and namespace prefix used for remote calls
    pub space: Signal<MetadataSpace>,
    /// Hydration/connection status
    pub sync_status: Signal<SyncStatus>,
    /// Latest remote error message for UI display
    pub notice: Signal<Option<String>>,
    /// Active theme
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// Surface a user-visible error notification
    pub fn surface_error(&mut self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
    }
}
