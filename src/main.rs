mod app;
mod config;
mod data;
mod processing;
mod state;
mod tasks;
mod ui;

use std::sync::Arc;

use app::SampleScopeApp;
use clap::Parser;
use config::{AppConfig, Args};
use data::store::HttpSampleStore;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_args(Args::parse())?;
    let store = HttpSampleStore::new(config.endpoint.clone())?;
    tracing::info!("Using sample store at {}", config.endpoint.base());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SampleScope")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "SampleScope",
        options,
        Box::new(move |cc| Ok(Box::new(SampleScopeApp::new(cc, &config, Arc::new(store))))),
    )?;
    Ok(())
}
