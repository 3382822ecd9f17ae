//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sitewatch_domain::form::AddWebsiteForm;
use sitewatch_domain::id::WebsiteId;

/// sitewatch - dashboard for a website change monitor
#[derive(Parser, Debug)]
#[command(name = "sitewatch", version, about = "Dashboard for a website change monitor")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "sitewatch.toml", global = true)]
    pub config: PathBuf,

    /// Override the backend base URL (e.g. `http://localhost:5000`)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the board and refresh it periodically until Ctrl-C (default)
    Watch,
    /// Show the board once
    List,
    /// Start monitoring a website
    Add(AddArgs),
    /// Stop monitoring a website
    Remove(RemoveArgs),
    /// Check one website now
    Check(IdArgs),
    /// Check every website now
    CheckAll,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// URL to monitor
    pub url: String,

    /// Display name (defaults to the URL)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Use a client certificate / custom CA for this website
    #[arg(long)]
    pub pki: bool,

    /// Client certificate path on the backend host (requires --key)
    #[arg(long, default_value = "")]
    pub cert: String,

    /// Client key path on the backend host (requires --cert)
    #[arg(long, default_value = "")]
    pub key: String,

    /// Custom root CA path on the backend host
    #[arg(long, default_value = "")]
    pub ca: String,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Website id
    pub id: String,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Website id
    pub id: String,
}

impl Cli {
    /// Whether the removal confirmation should be answered automatically.
    #[must_use]
    pub fn assume_yes(&self) -> bool {
        matches!(&self.command, Some(Command::Remove(args)) if args.yes)
    }
}

impl From<AddArgs> for AddWebsiteForm {
    fn from(args: AddArgs) -> Self {
        Self {
            url: args.url,
            name: args.name,
            use_pki: args.pki,
            client_cert_path: args.cert,
            client_key_path: args.key,
            custom_root_ca_path: args.ca,
            skip_tls_verify: args.insecure,
        }
    }
}

impl RemoveArgs {
    #[must_use]
    pub fn website_id(&self) -> WebsiteId {
        WebsiteId::new(self.id.as_str())
    }
}

impl IdArgs {
    #[must_use]
    pub fn website_id(&self) -> WebsiteId {
        WebsiteId::new(self.id.as_str())
    }
}
