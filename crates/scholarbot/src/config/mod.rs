use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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
    pub catalog: CatalogConfig,
    pub completion: CompletionConfig,
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

        let catalog = CatalogConfig {
            base_url: env::var("CATALOG_URL").ok().filter(|v| !v.is_empty()),
            api_key: env::var("CATALOG_API_KEY").ok().filter(|v| !v.is_empty()),
        };

        let completion = CompletionConfig {
            endpoint: env::var("COMPLETION_ENDPOINT")
                .ok()
                .filter(|v| !v.is_empty()),
            model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "claude-sonnet-4-20250514".to_string()),
            max_tokens: env::var("COMPLETION_MAX_TOKENS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidMaxTokens)?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            catalog,
            completion,
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Remote scholarship catalog. Both fields must be present for the service
/// to sync; otherwise the built-in catalog is served untouched.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl CatalogConfig {
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.api_key.is_some()
    }
}

/// Text-generation collaborator. Unset endpoint disables letter generation.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub endpoint: Option<String>,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidMaxTokens,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidMaxTokens => {
                write!(f, "COMPLETION_MAX_TOKENS must be a valid u32")
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidMaxTokens => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
