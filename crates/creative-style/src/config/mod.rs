use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEVELOPMENT_TOKEN_SECRET: &str = "creative-style-development-secret";
/// Upper bound for admin token lifetimes, one year.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let admin = AdminConfig::from_env(environment)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            admin,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Credentials and token settings for the admin console.
///
/// Login is disabled while `password` is unset.
#[derive(Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: Option<String>,
    pub token_secret: String,
    pub token_ttl_hours: i64,
}

impl AdminConfig {
    fn from_env(environment: AppEnvironment) -> Result<Self, ConfigError> {
        let username = env::var("APP_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password = env::var("APP_ADMIN_PASSWORD")
            .ok()
            .filter(|value| !value.is_empty());

        let token_secret = match env::var("APP_ADMIN_TOKEN_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if environment == AppEnvironment::Production => {
                return Err(ConfigError::MissingTokenSecret)
            }
            _ => DEVELOPMENT_TOKEN_SECRET.to_string(),
        };

        let token_ttl_hours = env::var("APP_ADMIN_TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse::<i64>()
            .ok()
            .filter(|hours| (1..=MAX_TOKEN_TTL_HOURS).contains(hours))
            .ok_or(ConfigError::InvalidTokenTtl)?;

        Ok(Self {
            username,
            password,
            token_secret,
            token_ttl_hours,
        })
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("token_secret", &"<redacted>")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingTokenSecret,
    InvalidTokenTtl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingTokenSecret => {
                write!(f, "APP_ADMIN_TOKEN_SECRET must be set in production")
            }
            ConfigError::InvalidTokenTtl => {
                write!(
                    f,
                    "APP_ADMIN_TOKEN_TTL_HOURS must be between 1 and {MAX_TOKEN_TTL_HOURS}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::MissingTokenSecret
            | ConfigError::InvalidTokenTtl => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_ADMIN_USERNAME",
            "APP_ADMIN_PASSWORD",
            "APP_ADMIN_TOKEN_SECRET",
            "APP_ADMIN_TOKEN_TTL_HOURS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.admin.username, "admin");
        assert!(config.admin.password.is_none());
        assert_eq!(config.admin.token_ttl_hours, 24);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn production_requires_token_secret() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        let result = AppConfig::load();
        assert!(matches!(result, Err(ConfigError::MissingTokenSecret)));

        env::set_var("APP_ADMIN_TOKEN_SECRET", "s3cret");
        let config = AppConfig::load().expect("config loads with secret");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.admin.token_secret, "s3cret");
        reset_env();
    }

    #[test]
    fn rejects_non_positive_token_ttl() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ADMIN_TOKEN_TTL_HOURS", "0");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidTokenTtl)
        ));
        reset_env();
    }

    #[test]
    fn rejects_token_ttl_beyond_one_year() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        for hours in ["9223372036854775807", "2500000000", "8761"] {
            env::set_var("APP_ADMIN_TOKEN_TTL_HOURS", hours);
            assert!(
                matches!(AppConfig::load(), Err(ConfigError::InvalidTokenTtl)),
                "{hours} should be rejected"
            );
        }

        env::set_var("APP_ADMIN_TOKEN_TTL_HOURS", "8760");
        let config = AppConfig::load().expect("one year is accepted");
        assert_eq!(config.admin.token_ttl_hours, MAX_TOKEN_TTL_HOURS);
        reset_env();
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let config = AdminConfig {
            username: "admin".to_string(),
            password: Some("hunter2".to_string()),
            token_secret: "topsecret".to_string(),
            token_ttl_hours: 24,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("topsecret"));
    }
}
