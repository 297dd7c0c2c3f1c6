//! Command-line and environment configuration.

use clap::Parser;

/// Runtime configuration for the order service.
///
/// Every flag can also be set through the environment variable shown in `--help`.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "ORDERS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(short, long, env = "ORDERS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Request channel capacity of each store
    #[arg(long, env = "ORDERS_BUFFER_SIZE", default_value_t = 32)]
    pub buffer_size: usize,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, env = "ORDERS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Start with empty stores instead of the sample employees and orders
    #[arg(long, env = "ORDERS_NO_SEED")]
    pub no_seed: bool,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            buffer_size: 32,
            log_level: "info".to_string(),
            no_seed: false,
        }
    }
}
