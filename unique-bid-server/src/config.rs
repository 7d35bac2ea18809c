use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default log filter for both crates
pub const DEFAULT_LOG_FILTER: &str = "unique_bid_server=info,unique_bid=info";

/// Application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub internal_api: InternalApiConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 8080)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Internal API configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct InternalApiConfig {
    /// Shared secret expected in X-INTERNAL-KEY. Empty disables the internal API.
    pub key: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Filter directives, overridden by RUST_LOG
    pub filter: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Load from config file if specified via environment variable
        if let Ok(config_file) = std::env::var("UNIQUE_BID_CONFIG_FILE") {
            builder = builder.add_source(File::from(Path::new(&config_file)));
        } else {
            // Try to load default config files
            builder = builder
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config").required(false));
        }

        Self::with_env(builder).build()?.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from(path.as_ref()));

        // Still allow environment overrides
        Self::with_env(builder).build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("internal_api.key", "")?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            .set_default("logging.json", false)
    }

    /// Override with environment variables (UNIQUE_BID_ prefix)
    ///
    /// Nested keys use a double underscore: `UNIQUE_BID_INTERNAL_API__KEY`.
    /// Values stay strings so secrets like `007` are kept verbatim; typed
    /// fields are converted during deserialization.
    fn with_env(
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            Environment::with_prefix("UNIQUE_BID")
                .prefix_separator("_")
                .separator("__"),
        )
    }
}
