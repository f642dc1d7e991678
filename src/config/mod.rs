// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig, RedirectConfig,
    RoutesConfig, ServerConfig,
};

impl Config {
    /// Load configuration from the default "config.toml" file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("NOWALL"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("redirect.submit_endpoint", "https://archive.today/submit/")?
            .set_default("redirect.query_param", "url")?
            .set_default("redirect.status_code", 302)?
            .set_default(
                "routes.favicon_paths",
                vec!["/favicon.ico", "/favicon.svg"],
            )?
            .set_default("routes.asset_dir", "static")?
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the rest of the server assumes are already sane
    fn validate(&self) -> Result<(), config::ConfigError> {
        match self.redirect.status_code {
            302 | 307 => Ok(()),
            other => Err(config::ConfigError::Message(format!(
                "redirect.status_code must be 302 or 307, got {other}"
            ))),
        }
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_section() {
        // No config file named like this should exist
        let cfg = Config::load_from("nonexistent-config").expect("defaults should suffice");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.redirect.status_code, 302);
        assert_eq!(cfg.redirect.query_param, "url");
        assert_eq!(
            cfg.redirect.submit_endpoint.as_str(),
            "https://archive.today/submit/"
        );
        assert!(cfg.routes.health.enabled);
        assert_eq!(cfg.routes.health.liveness_path, "/healthz");
        assert!(cfg
            .routes
            .favicon_paths
            .contains(&"/favicon.ico".to_string()));
        assert!(cfg.logging.access_log_file.is_none());
    }

    #[test]
    fn test_status_code_is_validated() {
        let cfg = Config::load_from("nonexistent-config").unwrap();
        let mut bad = cfg;
        bad.redirect.status_code = 301;
        assert!(bad.validate().is_err());
        bad.redirect.status_code = 307;
        assert!(bad.validate().is_ok());
    }

    #[test]
    fn test_socket_addr_parsing() {
        let mut cfg = Config::load_from("nonexistent-config").unwrap();
        assert!(cfg.get_socket_addr().is_ok());
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
