//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DASHBOARD_DB_DRIVER` - Database driver, must be `postgres`
//! - `DASHBOARD_DB_SERVER` - Warehouse host, optionally `host:port` (default port: 5432)
//! - `DASHBOARD_DB_DATABASE` - Warehouse database name
//! - `DASHBOARD_DB_TRUSTED_CONNECTION` - `yes` to authenticate as the operating-system
//!   user, `no` to use explicit credentials
//! - `DASHBOARD_DB_TRUST_SERVER_CERTIFICATE` - `yes` to accept the server
//!   certificate without verification, `no` to verify the full chain
//!
//! ## Required when `DASHBOARD_DB_TRUSTED_CONNECTION=no`
//! - `DASHBOARD_DB_USER` - Warehouse login
//! - `DASHBOARD_DB_PASSWORD` - Warehouse password
//!
//! ## Optional
//! - `DASHBOARD_HOST` - Bind address (default: 127.0.0.1)
//! - `DASHBOARD_PORT` - Listen port (default: 8501)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry tracing sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default `PostgreSQL` port when `DASHBOARD_DB_SERVER` has no port.
const DEFAULT_DB_PORT: u16 = 5432;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Unsupported database driver '{0}': only postgres is supported")]
    UnsupportedDriver(String),
}

/// Database driver selection.
///
/// The warehouse runs on `PostgreSQL`; the driver variable exists so a
/// misconfigured deployment fails at startup with a clear message
/// instead of producing connection errors on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseDriver {
    Postgres,
}

impl std::fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Explicit warehouse login credentials.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DbCredentials {
    /// Warehouse login name
    pub user: String,
    /// Warehouse password
    pub password: SecretString,
}

impl std::fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbCredentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Warehouse connection configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database driver (always `postgres`)
    pub driver: DatabaseDriver,
    /// Warehouse host name
    pub host: String,
    /// Warehouse port
    pub port: u16,
    /// Database name
    pub database: String,
    /// Authenticate as the operating-system user instead of explicit credentials
    pub trusted_connection: bool,
    /// Explicit credentials, present when `trusted_connection` is false
    pub credentials: Option<DbCredentials>,
    /// Accept the server certificate without verification
    pub trust_server_certificate: bool,
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Warehouse connection settings
    pub database: DatabaseConfig,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry tracing sample rate
    pub sentry_traces_sample_rate: f32,
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if `DASHBOARD_DB_DRIVER` names anything other than `postgres`.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database = DatabaseConfig::from_env()?;
        let host = get_env_or_default("DASHBOARD_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASHBOARD_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("DASHBOARD_PORT", "8501")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASHBOARD_PORT".to_string(), e.to_string()))?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_env_or_default("SENTRY_SAMPLE_RATE", "1.0")
            .parse::<f32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SENTRY_SAMPLE_RATE".to_string(), e.to_string())
            })?;
        let sentry_traces_sample_rate = get_env_or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0")
            .parse::<f32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SENTRY_TRACES_SAMPLE_RATE".to_string(), e.to_string())
            })?;

        Ok(Self {
            database,
            host,
            port,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Load the warehouse connection settings from `DASHBOARD_DB_*`
    /// environment variables.
    ///
    /// Callers outside the server (the CLI) load `.env` themselves.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let driver = parse_driver(&get_required_env("DASHBOARD_DB_DRIVER")?)?;
        let (host, port) = parse_server(
            "DASHBOARD_DB_SERVER",
            &get_required_env("DASHBOARD_DB_SERVER")?,
        )?;
        let database = get_required_env("DASHBOARD_DB_DATABASE")?;

        let trusted_connection = parse_yes_no(
            "DASHBOARD_DB_TRUSTED_CONNECTION",
            &get_required_env("DASHBOARD_DB_TRUSTED_CONNECTION")?,
        )?;
        let credentials = if trusted_connection {
            None
        } else {
            Some(DbCredentials {
                user: get_required_env("DASHBOARD_DB_USER")?,
                password: SecretString::from(get_required_env("DASHBOARD_DB_PASSWORD")?),
            })
        };

        // One of the five required connection keys; a deployment that
        // forgets it must fail at startup, not silently pick an SSL mode
        let trust_server_certificate = parse_yes_no(
            "DASHBOARD_DB_TRUST_SERVER_CERTIFICATE",
            &get_required_env("DASHBOARD_DB_TRUST_SERVER_CERTIFICATE")?,
        )?;

        Ok(Self {
            driver,
            host,
            port,
            database,
            trusted_connection,
            credentials,
            trust_server_certificate,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse the database driver name.
fn parse_driver(value: &str) -> Result<DatabaseDriver, ConfigError> {
    if value.eq_ignore_ascii_case("postgres") {
        Ok(DatabaseDriver::Postgres)
    } else {
        Err(ConfigError::UnsupportedDriver(value.to_string()))
    }
}

/// Parse a `host` or `host:port` server string.
fn parse_server(key: &str, value: &str) -> Result<(String, u16), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "server must not be empty".to_string(),
        ));
    }

    match value.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar(key.to_string(), format!("invalid port '{port}': {e}"))
            })?;
            Ok((host.to_string(), port))
        }
        None => Ok((value.to_string(), DEFAULT_DB_PORT)),
    }
}

/// Parse a `yes`/`no` flag, matched case-insensitively.
fn parse_yes_no(key: &str, value: &str) -> Result<bool, ConfigError> {
    if value.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected 'yes' or 'no', got '{value}'"),
        ))
    }
}
