//! Application configuration module
//!
//! Provides the server configuration, read from the environment by the
//! binary and assembled through the builder in tests.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default SQLite database, created next to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://userboard.db";

/// bcrypt accepts work factors in this range
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info,userboard=debug,tower_http=debug";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host the listener binds to
    pub host: IpAddr,
    /// Port the listener binds to
    pub port: u16,
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// Reads `SERVER_HOST`, `SERVER_PORT`, `DATABASE_URL`, `BCRYPT_COST` and
    /// `RUST_LOG`. Unset variables fall back to defaults; set but malformed
    /// ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(host) = read_var("SERVER_HOST") {
            let host = host
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "SERVER_HOST", value: host })?;
            builder = builder.host(host);
        }
        if let Some(port) = read_var("SERVER_PORT") {
            let port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "SERVER_PORT", value: port })?;
            builder = builder.port(port);
        }
        if let Some(url) = read_var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(cost) = read_var("BCRYPT_COST") {
            let cost = cost
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "BCRYPT_COST", value: cost })?;
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(filter) = read_var("RUST_LOG") {
            builder = builder.log_filter(filter);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_URL",
                value: self.database_url.clone(),
            });
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn read_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    database_url: Option<String>,
    bcrypt_cost: Option<u32>,
    log_filter: Option<String>,
}

impl ServerConfigBuilder {
    /// Set the bind host
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the bind port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the log filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();
        let config = ServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            database_url: self.database_url.unwrap_or(defaults.database_url),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
