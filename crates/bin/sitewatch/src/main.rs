//! # sitewatch — dashboard for a website change monitor
//!
//! Composition root that wires the adapters into the dashboard controller.
//!
//! ## Responsibilities
//! - Parse the command line and load `sitewatch.toml` (plus env overrides)
//! - Initialize `tracing` on stderr
//! - Construct the reqwest backend client and the terminal view/prompt
//! - Run one dashboard action, or poll the board until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sitewatch_adapter_http_reqwest::HttpWebsiteApi;
use sitewatch_app::services::dashboard::DashboardController;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::terminal::{TerminalPrompt, TerminalView};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config, cli.api_url.as_deref())
        .with_context(|| format!("loading {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let api = HttpWebsiteApi::new(&config.api)?;
    let controller = Arc::new(
        DashboardController::new(
            api,
            TerminalView::stdout(),
            TerminalPrompt::stdio(cli.assume_yes()),
        )
        .with_poll_interval(config.poll_interval()),
    );
    tracing::debug!(base_url = %config.api.base_url, "backend configured");

    // Failed actions have already been reported on the terminal.
    let succeeded = match cli.command.unwrap_or(Command::Watch) {
        Command::Watch => {
            controller.start();
            tokio::signal::ctrl_c().await?;
            controller.stop();
            true
        }
        Command::List => controller.load().await.is_ok(),
        Command::Add(args) => controller.add_website(args.into()).await.is_ok(),
        Command::Remove(args) => controller.remove_website(&args.website_id()).await.is_ok(),
        Command::Check(args) => controller.check_website(&args.website_id()).await.is_ok(),
        Command::CheckAll => controller
            .check_all()
            .await
            .is_ok_and(|summary| summary.failed == 0),
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
