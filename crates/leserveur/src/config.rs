//! Server configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default host address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port number.
pub const DEFAULT_PORT: u16 = 3000;

/// Default CORS origins (localhost for development).
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// Cache lifetime for seo-check responses, in seconds.
pub const SEO_CHECK_MAX_AGE_SECS: u32 = 300;

/// Cache lifetime for sitemap responses, in seconds.
pub const SITEMAP_MAX_AGE_SECS: u32 = 3600;

/// Cache lifetime for site-stats responses, in seconds.
pub const SITE_STATS_MAX_AGE_SECS: u32 = 3600;

/// Server configuration loaded from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Public base URL used in sitemap/robots output. When unset, the base
    /// URL is derived from request headers per call.
    pub base_url: Option<String>,

    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,

    /// Enable request logging.
    pub enable_logging: bool,

    /// Log level for tracing.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_url: None,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables with fallback to defaults.
    ///
    /// Environment variables:
    /// - `LESEO_HOST` - Server host
    /// - `LESEO_PORT` - Server port
    /// - `LESEO_BASE_URL` - Public base URL for sitemap/robots output
    /// - `LESEO_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("LESEO_HOST") {
            config.host = host;
        }

        if let Ok(port_str) = std::env::var("LESEO_PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                config.port = port;
            }
        }

        if let Ok(base_url) = std::env::var("LESEO_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(log_level) = std::env::var("LESEO_LOG_LEVEL") {
            config.log_level = log_level;
        }

        config
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {}", e))
    }

    /// Get the full server URL.
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be zero".to_string());
        }

        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if let Some(base_url) = &self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(format!(
                    "Base URL must start with http:// or https://: {}",
                    base_url
                ));
            }
            if base_url.ends_with('/') {
                return Err("Base URL must not end with a slash".to_string());
            }
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.log_level
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.base_url.is_none());
        assert!(!config.cors_origins.is_empty());
        assert!(config.enable_logging);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_socket_addr() {
        let config = ServerConfig::default();
        let addr = config.socket_addr().expect("default address parses");
        assert_eq!(addr.ip(), std::net::Ipv4Addr::new(127, 0, 0, 1));
        assert_eq!(addr.port(), DEFAULT_PORT);
    }

    #[test]
    fn test_config_server_url() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.server_url(), "http://localhost:8080");
    }

    #[test]
    fn test_config_validate_success() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validate_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_base_url_scheme() {
        let config = ServerConfig {
            base_url: Some("example.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            base_url: Some("https://example.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_trailing_slash() {
        let config = ServerConfig {
            base_url: Some("https://example.com/".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_invalid_log_level() {
        let config = ServerConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
