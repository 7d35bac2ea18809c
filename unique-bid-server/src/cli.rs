//! Command-line interface configuration

use clap::Parser;

use crate::config::AppConfig;

/// Unique Bid Server CLI
///
/// Flags left unset fall back to the configuration file and environment.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Server options
    /// Host to bind the server to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    // Internal API
    /// Shared secret expected in the X-INTERNAL-KEY header
    #[arg(long, env = "INTERNAL_API_KEY", hide_env_values = true)]
    pub internal_api_key: Option<String>,

    // Logging
    /// Log filter (e.g., "unique_bid_server=debug,unique_bid=info")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Emit compact text logs even if the configuration enables JSON
    #[arg(long, conflicts_with = "log_json")]
    pub no_log_json: bool,

    /// Path to configuration file (overridden by CLI args)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Cli {
    /// Apply flags that were given on top of a loaded configuration
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(key) = &self.internal_api_key {
            config.internal_api.key = key.clone();
        }
        if let Some(filter) = &self.log_filter {
            config.logging.filter = filter.clone();
        }
        if self.log_json {
            config.logging.json = true;
        } else if self.no_log_json {
            config.logging.json = false;
        }
        config
    }
}
