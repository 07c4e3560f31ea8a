//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,

    /// Maximum database connections in pool
    pub database_max_connections: u32,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Team service host/port
    pub team_service_host: String,
    pub team_service_port: u16,

    /// Sponsor service host/port
    pub sponsor_service_host: String,
    pub sponsor_service_port: u16,

    /// Facility service host/port
    pub facility_service_host: String,
    pub facility_service_port: u16,

    /// Bounded per-call timeout for upstream HTTP requests, in seconds
    pub http_client_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingEnv("DATABASE_URL"))?;

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS"))?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let (team_service_host, team_service_port) =
            upstream("TEAM_SERVICE_HOST", "TEAM_SERVICE_PORT")?;
        let (sponsor_service_host, sponsor_service_port) =
            upstream("SPONSOR_SERVICE_HOST", "SPONSOR_SERVICE_PORT")?;
        let (facility_service_host, facility_service_port) =
            upstream("FACILITY_SERVICE_HOST", "FACILITY_SERVICE_PORT")?;

        let http_client_timeout_secs = env::var("HTTP_CLIENT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HTTP_CLIENT_TIMEOUT_SECS"))?;

        Ok(Self {
            database_url,
            database_max_connections,
            host,
            port,
            team_service_host,
            team_service_port,
            sponsor_service_host,
            sponsor_service_port,
            facility_service_host,
            facility_service_port,
            http_client_timeout_secs,
        })
    }

    pub fn http_client_timeout(&self) -> Duration {
        Duration::from_secs(self.http_client_timeout_secs)
    }

    pub fn team_service_base_url(&self) -> String {
        format!(
            "http://{}:{}/api/v1/teams",
            self.team_service_host, self.team_service_port
        )
    }

    pub fn sponsor_service_base_url(&self) -> String {
        format!(
            "http://{}:{}/api/v1/sponsors",
            self.sponsor_service_host, self.sponsor_service_port
        )
    }

    pub fn facility_service_base_url(&self) -> String {
        format!(
            "http://{}:{}/api/v1/facilities",
            self.facility_service_host, self.facility_service_port
        )
    }
}

fn upstream(
    host_var: &'static str,
    port_var: &'static str,
) -> Result<(String, u16), ConfigError> {
    let host = env::var(host_var).map_err(|_| ConfigError::MissingEnv(host_var))?;
    let port = env::var(port_var)
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .map_err(|_| ConfigError::InvalidValue(port_var))?;
    Ok((host, port))
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
