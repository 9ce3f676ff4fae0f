use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::path::Path;

/// API credentials plus optional base-URL override.
///
/// Immutable once constructed. An empty key/secret pair restricts the client
/// to public market-data endpoints; signed endpoints check
/// [`has_credentials`](Self::has_credentials) before any network I/O.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub api_key: Secret<String>,
    pub secret_key: Secret<String>,
    pub base_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 3)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            api_key: String,
            secret_key: String,
            #[serde(default)]
            base_url: Option<String>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            api_key: Secret::new(helper.api_key),
            secret_key: Secret::new(helper.secret_key),
            base_url: helper.base_url,
        })
    }
}

impl ExchangeConfig {
    /// Create a new configuration with API credentials
    #[must_use]
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
            base_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `COINEX_API_KEY`
    /// - `COINEX_SECRET_KEY`
    /// - `COINEX_BASE_URL` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("COINEX_API_KEY")
            .map_err(|_| ConfigError::MissingEnvironmentVariable("COINEX_API_KEY".to_string()))?;

        let secret_key = env::var("COINEX_SECRET_KEY").map_err(|_| {
            ConfigError::MissingEnvironmentVariable("COINEX_SECRET_KEY".to_string())
        })?;

        let base_url = env::var("COINEX_BASE_URL").ok();

        Ok(Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
            base_url,
        })
    }

    /// Create configuration from a JSON credentials file
    ///
    /// The file must contain at least `{"api_key": "...", "secret_key": "..."}`.
    /// A missing or unreadable file is a configuration error, not a panic.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::CredentialsFile(format!("{}: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            ConfigError::CredentialsFile(format!("{}: {}", path.display(), e))
        })
    }

    /// Create configuration from a .env file and environment variables
    ///
    /// Loads environment variables from the given file first (missing file is
    /// fine), then reads the standard `COINEX_*` variables.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // fall through to system environment variables
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env()
    }

    /// Create configuration for read-only operations (market data only)
    /// This doesn't require API credentials for public endpoints
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            api_key: Secret::new(String::new()),
            secret_key: Secret::new(String::new()),
            base_url: None,
        }
    }

    /// Check if this configuration has valid credentials for authenticated
    /// operations. Both halves must be non-empty.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get secret key (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Credentials file error: {0}")]
    CredentialsFile(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_halves() {
        assert!(ExchangeConfig::new("key".to_string(), "secret".to_string()).has_credentials());
        assert!(!ExchangeConfig::new("key".to_string(), String::new()).has_credentials());
        assert!(!ExchangeConfig::new(String::new(), "secret".to_string()).has_credentials());
        assert!(!ExchangeConfig::read_only().has_credentials());
    }

    #[test]
    fn missing_credentials_file_is_an_error() {
        let err = ExchangeConfig::from_file("/nonexistent/credentials.json").unwrap_err();
        assert!(matches!(err, ConfigError::CredentialsFile(_)));
    }

    #[test]
    fn serialization_redacts_secrets() {
        let config = ExchangeConfig::new("key".to_string(), "secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("[REDACTED]"));
    }
}
