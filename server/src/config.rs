use anyhow::{Context, Result};
use dotenvy::dotenv;
use fetcher::UpstreamConfig;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;

/// Process configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream: UpstreamConfig,
    /// Also write logs here, in addition to the console
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().context("PORT must be a valid number")?,
            None => DEFAULT_PORT,
        };

        let mut upstream = UpstreamConfig::default();
        if let Some(endpoint) = lookup("JOB_BOARD_ENDPOINT") {
            upstream.endpoint = endpoint;
        }
        if let Some(raw) = lookup("UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = raw
                .parse()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;
            upstream.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            port,
            upstream,
            log_file: lookup("LOG_FILE").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.upstream.endpoint, fetcher::upstream::DEFAULT_ENDPOINT);
        assert_eq!(config.upstream.tenant, fetcher::upstream::DEFAULT_TENANT);
        assert_eq!(config.upstream.timeout, Duration::from_secs(30));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
            ("JOB_BOARD_ENDPOINT", "http://localhost:9999/graphql"),
            ("LOG_FILE", "server.log"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream.timeout, Duration::from_secs(5));
        assert_eq!(config.upstream.endpoint, "http://localhost:9999/graphql");
        assert_eq!(config.log_file, Some(PathBuf::from("server.log")));
    }

    #[test]
    fn test_invalid_port() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("UPSTREAM_TIMEOUT_SECS", "-1")]).is_err());
    }
}
