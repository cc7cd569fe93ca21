//! Command-line and environment configuration.

use anyhow::{ensure, Result};
use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "food-ordering", about = "Food ordering backend", version)]
pub struct Config {
    #[arg(
        long,
        env = "FOOD_BIND",
        value_name = "ADDR",
        default_value = "0.0.0.0:5001",
        help = "Address the HTTP server listens on"
    )]
    pub bind: SocketAddr,

    #[arg(
        long,
        env = "FOOD_CHANNEL_BUFFER",
        value_name = "N",
        default_value_t = 32,
        help = "Bounded channel size of each actor"
    )]
    pub channel_buffer: usize,

    #[arg(
        long,
        env = "FOOD_REQUEST_TIMEOUT_SECS",
        value_name = "SECS",
        default_value_t = 30,
        help = "Per-request timeout"
    )]
    pub request_timeout_secs: u64,

    #[arg(
        long,
        env = "FOOD_CORS_ORIGINS",
        value_name = "ORIGIN",
        value_delimiter = ',',
        default_value = "http://localhost:3000",
        help = "Comma-separated list of allowed CORS origins"
    )]
    pub cors_origins: Vec<String>,

    #[arg(long, env = "FOOD_ADMIN_NAME", default_value = "Admin")]
    pub admin_name: String,

    #[arg(long, env = "FOOD_ADMIN_EMAIL", default_value = "admin@example.com")]
    pub admin_email: String,

    #[arg(
        long,
        env = "FOOD_ADMIN_TOKEN",
        help = "Fixed bearer token for the seeded admin; random when absent"
    )]
    pub admin_token: Option<String>,

    #[arg(
        long,
        env = "FOOD_SEED_CATALOG",
        help = "Create the sample menu on start-up"
    )]
    pub seed_catalog: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.channel_buffer > 0, "channel buffer must be at least 1");
        ensure!(
            self.request_timeout_secs > 0,
            "request timeout must be at least 1 second"
        );
        ensure!(!self.cors_origins.is_empty(), "at least one CORS origin is required");
        Ok(())
    }
}
