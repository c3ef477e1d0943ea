use std::time::Duration;

use clap::Parser;

use crate::data::endpoint::{Endpoint, SampleCount};
use crate::state::notification::DEFAULT_AUTO_HIDE;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/samples";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("'{0}' is not an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("notification interval must be at least one second")]
    InvalidNotificationInterval,
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "samplescope", version, about = "Browse, plot and manage measurement samples")]
pub struct Args {
    /// Base URL of the sample store resource.
    #[arg(long, env = "SAMPLESCOPE_API_BASE", default_value = DEFAULT_API_BASE, value_parser = parse_base_url)]
    pub api_base: String,

    /// Initial value count for new samples (clamped to 1..=50).
    #[arg(long, default_value_t = SampleCount::default().get())]
    pub default_count: u32,

    /// Seconds a notification stays visible.
    #[arg(long, default_value_t = DEFAULT_AUTO_HIDE.as_secs())]
    pub notification_secs: u64,
}

/// Resolved settings, built once at startup and handed to the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: Endpoint,
    pub default_count: SampleCount,
    pub notification_timeout: Duration,
}

impl AppConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        if args.notification_secs == 0 {
            return Err(ConfigError::InvalidNotificationInterval);
        }
        Ok(Self {
            endpoint: Endpoint::new(parse_base_url(&args.api_base)?),
            default_count: SampleCount::clamped(args.default_count),
            notification_timeout: Duration::from_secs(args.notification_secs),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::new(DEFAULT_API_BASE),
            default_count: SampleCount::default(),
            notification_timeout: DEFAULT_AUTO_HIDE,
        }
    }
}

/// Accept absolute http(s) URLs only; strip a trailing slash.
pub fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = reqwest::Url::parse(trimmed)
        .map_err(|_| ConfigError::InvalidBaseUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
