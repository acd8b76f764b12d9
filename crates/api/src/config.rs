//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the rotaplan
//! API server. It retrieves configuration values from environment variables
//! and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `DUTY_WEEKDAY`: Weekday that carries duty slots (default: "wednesday")
//! - `FAIRNESS_POLICY`: "per-run" or "yearly-seeded" (default: "per-run")

use chrono::Weekday;
use eyre::{eyre, Result, WrapErr};
use rotaplan_core::engine::{FairnessPolicy, GeneratorConfig};
use std::env;
use tracing::Level;

/// Configuration for the rotaplan API server
///
/// This struct encapsulates all configuration options for the API server,
/// including networking, database connection, and scheduler policy settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Weekday that carries the two duty slots
    pub duty_weekday: Weekday,

    /// How fairness ordering is seeded across generation runs
    pub fairness_policy: FairnessPolicy,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - The DUTY_WEEKDAY or FAIRNESS_POLICY value is not recognized
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Scheduler settings
        let duty_weekday = env::var("DUTY_WEEKDAY")
            .unwrap_or_else(|_| "wednesday".to_string())
            .parse::<Weekday>()
            .map_err(|_| eyre!("Invalid DUTY_WEEKDAY value"))?;
        let fairness_policy = env::var("FAIRNESS_POLICY")
            .unwrap_or_else(|_| "per-run".to_string())
            .parse::<FairnessPolicy>()
            .map_err(|e| eyre!("Invalid FAIRNESS_POLICY value: {e}"))?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            duty_weekday,
            fairness_policy,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The generator knobs derived from this configuration
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            weekday: self.duty_weekday,
            fairness: self.fairness_policy,
        }
    }
}
