use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub auth: AuthSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    /// Directory holding `vectorizer.json` and `classifier.json`.
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// The single bearer credential the static verifier accepts.
    pub api_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub enable_json: bool,
}

impl Settings {
    /// Assemble settings from environment variables with development
    /// defaults.
    pub fn from_env() -> Result<(Self, Environment), SettingsError> {
        let environment = match std::env::var("APP_ENV") {
            Ok(raw) => Environment::try_from(raw).map_err(SettingsError::InvalidEnvironment)?,
            Err(_) => Environment::Local,
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidPort(raw.clone()))?,
            Err(_) => 5000,
        };

        let settings = Settings {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            model: ModelSettings {
                dir: std::env::var("MODEL_DIR").unwrap_or_else(|_| "model".to_string()),
            },
            auth: AuthSettings {
                api_token: std::env::var("API_TOKEN")
                    .unwrap_or_else(|_| "stub_token_12345".to_string()),
            },
            logging: LoggingSettings {
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        };

        Ok((settings, environment))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    InvalidEnvironment(String),
    #[error("Invalid SERVER_PORT: {0}")]
    InvalidPort(String),
}
