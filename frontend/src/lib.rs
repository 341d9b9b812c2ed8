//! Manifold desktop client: stores, modal lifecycle, route guard and views.

use anyhow::Context;
use log::info;

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod routing;
pub mod services;
pub mod stores;

use app::{App, AppProps};
use config::ClientConfig;

/// Load configuration and mount the application into `<body>`
pub fn run() -> anyhow::Result<()> {
    let config = ClientConfig::load().context("failed to load client configuration")?;
    info!("Starting Manifold client against {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
    Ok(())
}
