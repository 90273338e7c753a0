//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `STOREFRONT_CONTENT_DIR` - Markdown pages (default: crates/storefront/content)
//! - `STOREFRONT_STATIC_DIR` - Static assets (default: crates/storefront/static)
//! - `CHECKOUT_GATEWAY_URL` - Payment gateway that checkout redirects to
//! - `SESSION_EXPIRY_DAYS` - Session lifetime after last activity (default: 30)
//! - `LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `GA4_MEASUREMENT_ID` - Google Analytics 4 measurement ID
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Payment gateway used when `CHECKOUT_GATEWAY_URL` is not set.
pub const DEFAULT_CHECKOUT_GATEWAY_URL: &str = "https://www.cartasi.it/payment/gateway";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding `pages/*.md`
    pub content_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Absolute URL checkout redirects to
    pub checkout_gateway_url: Url,
    /// Days of inactivity before a session expires
    pub session_expiry_days: u32,
    /// Log output format
    pub log_format: LogFormat,
    /// Analytics tracking configuration
    pub analytics: AnalyticsConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

/// Analytics configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    /// Google Analytics 4 measurement ID
    pub ga4_measurement_id: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env("STOREFRONT_PORT", "3000")?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        let content_dir = get_env_or_default("STOREFRONT_CONTENT_DIR", "crates/storefront/content");
        let static_dir = get_env_or_default("STOREFRONT_STATIC_DIR", "crates/storefront/static");
        let checkout_gateway_url = parse_gateway_url(&get_env_or_default(
            "CHECKOUT_GATEWAY_URL",
            DEFAULT_CHECKOUT_GATEWAY_URL,
        ))?;
        let session_expiry_days = parse_env("SESSION_EXPIRY_DAYS", "30")?;
        let log_format = parse_log_format(&get_env_or_default("LOG_FORMAT", "pretty"))?;

        Ok(Self {
            host,
            port,
            base_url,
            content_dir: PathBuf::from(content_dir),
            static_dir: PathBuf::from(static_dir),
            checkout_gateway_url,
            session_expiry_days,
            log_format,
            analytics: AnalyticsConfig::from_env(),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration for tests and local tooling: every default, content and
    /// static files read from `crate_dir`.
    #[must_use]
    pub fn local(crate_dir: impl Into<PathBuf>) -> Self {
        let crate_dir = crate_dir.into();
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            content_dir: crate_dir.join("content"),
            static_dir: crate_dir.join("static"),
            checkout_gateway_url: default_gateway_url(),
            session_expiry_days: 30,
            log_format: LogFormat::Pretty,
            analytics: AnalyticsConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS (session cookie gets `Secure`).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl AnalyticsConfig {
    fn from_env() -> Self {
        Self {
            ga4_measurement_id: get_optional_env("GA4_MEASUREMENT_ID"),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_gateway_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| {
        ConfigError::InvalidEnvVar("CHECKOUT_GATEWAY_URL".to_string(), e.to_string())
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "CHECKOUT_GATEWAY_URL".to_string(),
            "must be an absolute http(s) URL".to_string(),
        ));
    }
    Ok(url)
}

#[allow(clippy::expect_used)]
fn default_gateway_url() -> Url {
    Url::parse(DEFAULT_CHECKOUT_GATEWAY_URL).expect("default gateway URL is valid")
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidEnvVar(
            "LOG_FORMAT".to_string(),
            format!("expected `pretty` or `json`, got `{other}`"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gateway_url_valid() {
        let url = parse_gateway_url("https://pay.example.com/gateway").unwrap();
        assert_eq!(url.host_str(), Some("pay.example.com"));
    }

    #[test]
    fn test_parse_gateway_url_rejects_relative() {
        assert!(parse_gateway_url("/payment").is_err());
        assert!(parse_gateway_url("mailto:pay@example.com").is_err());
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!(parse_log_format("JSON").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format("pretty").unwrap(), LogFormat::Pretty);
        assert!(matches!(
            parse_log_format("xml"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    #[test]
    fn test_default_gateway_url_parses() {
        assert_eq!(default_gateway_url().as_str(), DEFAULT_CHECKOUT_GATEWAY_URL);
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig::local("crates/storefront");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure() {
        let mut config = StorefrontConfig::local(".");
        assert!(!config.is_secure());
        config.base_url = "https://maxpublishing.it".to_string();
        assert!(config.is_secure());
    }

    #[test]
    fn test_local_paths() {
        let config = StorefrontConfig::local("/srv/site");
        assert_eq!(config.content_dir, PathBuf::from("/srv/site/content"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/site/static"));
    }
}
