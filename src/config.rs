//! Application configuration loaded from environment variables.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` - PostgreSQL connection string
//!
//! ## Optional Variables
//!
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log filter (default: `info`)
//! - `DB_MAX_CONNECTIONS` - pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            db_max_connections,
            db_connect_timeout,
        })
    }
}
