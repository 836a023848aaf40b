//! Server configuration.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

/// Default listen address.
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Default tracing filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "subway_server=info,tower_http=info";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Listen address is not `host:port`
    #[error("invalid bind address {value:?}: {reason}")]
    InvalidBindAddr { value: String, reason: String },

    /// `RUST_LOG` has a directive `EnvFilter` cannot parse
    #[error("invalid log filter {value:?}: {reason}")]
    InvalidLogFilter { value: String, reason: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// `tracing-subscriber` env-filter directives.
    pub log_filter: String,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// - `SUBWAY_BIND_ADDR`: listen address (default `127.0.0.1:3000`)
    /// - `RUST_LOG`: log filter (default `subway_server=info,tower_http=info`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("SUBWAY_BIND_ADDR") {
            let addr = value
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidBindAddr {
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            config = config.with_bind_addr(addr);
        }

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            EnvFilter::try_new(&filter).map_err(|e| ConfigError::InvalidLogFilter {
                value: filter.clone(),
                reason: e.to_string(),
            })?;
            config = config.with_log_filter(filter);
        }

        Ok(config)
    }

    /// Set a custom listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set a custom log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_filter, "subway_server=info,tower_http=info");
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
        assert_eq!(config.log_filter, ServerConfig::default().log_filter);
    }

    #[test]
    fn environment_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SUBWAY_BIND_ADDR", "0.0.0.0:8080"),
            ("RUST_LOG", "subway_server=debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_filter, "subway_server=debug");
    }

    #[test]
    fn blank_log_filter_is_ignored() {
        let config = ServerConfig::from_lookup(lookup(&[("RUST_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn invalid_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("SUBWAY_BIND_ADDR", "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
        assert!(err.to_string().starts_with("invalid bind address \"localhost\""));
    }

    #[test]
    fn invalid_log_filter() {
        let err =
            ServerConfig::from_lookup(lookup(&[("RUST_LOG", "subway_server=loud")])).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidLogFilter { ref value, .. } if value == "subway_server=loud")
        );
    }

    #[test]
    fn default_log_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
