#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use votecheck_core::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use votecheck_core::{ApiConfig, HttpVoterApi, Session};

/// votecheck - Check your voter registration
#[derive(Parser, Debug)]
#[command(name = "votecheck-desktop")]
#[command(about = "votecheck - Check your voter registration and sign up for reminders")]
struct Args {
    /// Root URL of the voter API
    #[arg(long, env = "VOTECHECK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "VOTECHECK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Window title
    #[arg(long, default_value = "votecheck")]
    title: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let api_config = ApiConfig::new(&args.api_url, Duration::from_secs(args.timeout_secs))
        .context("invalid voter API configuration")?;
    let api = HttpVoterApi::new(&api_config).context("failed to build voter API client")?;
    let session = Session::new(Arc::new(api));

    tracing::info!("Starting '{}' against {}", args.title, api_config.base_url);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(session)
        .launch(app::App);

    Ok(())
}
