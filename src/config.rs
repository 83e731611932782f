//! Command-line/environment settings shared by both binaries.

use crate::api::{Client, DEFAULT_BASE_URL};
use crate::error::FetchError;
use clap::Args;
use std::time::Duration;

/// Upstream connection flags, flattened into each binary's parser.
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Network timeout in seconds (fractions allowed).
    #[arg(long, env = "POKEINFO_TIMEOUT", default_value = "10", value_parser = parse_timeout)]
    pub timeout: Duration,
    /// Upstream API base URL.
    #[arg(long, env = "POKEINFO_BASE_URL", default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,
}

impl ClientArgs {
    pub fn build_client(&self) -> Result<Client, FetchError> {
        Ok(Client::new(self.timeout)?.with_base_url(self.base_url.as_str()))
    }
}

/// Parse a positive, finite number of seconds.
pub fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid timeout '{s}', expected seconds"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got '{s}'"));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}
