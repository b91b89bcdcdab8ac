//! envhub Desktop Application
//!
//! A desktop editor for environment variable records kept in a remote
//! metadata store.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod actions;
mod app;
mod components;
mod config;
mod state;
mod theme;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("envhub=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting envhub...");

    dioxus::launch(app::App);
}
