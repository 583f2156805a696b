use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "./uploads";

/// Minimum length of `SESSION_SECRET`, the size of a signing key.
const MIN_SESSION_SECRET_LEN: usize = 64;

/// Deployment environment, controls how much error detail is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

/// Connection settings for the CDN HTTP API. All three must be set for it to be used.
#[derive(Debug, Clone, Default)]
pub struct CdnConfig {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub distribution_id: Option<String>,
}

pub struct Config {
    pub database_url: String,
    pub session_secret: String,
    pub app_url: String,
    pub environment: Environment,
    pub bind_address: String,
    pub upload_dir: PathBuf,
    pub overlay_font_path: Option<PathBuf>,
    pub cdn: CdnConfig,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr(_))` - A required variable is missing or invalid
    pub fn from_env() -> Result<Self, AppError> {
        let session_secret = required("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_SESSION_SECRET_LEN),
            }
            .into());
        }

        let environment = match optional("APP_ENV").as_deref() {
            None | Some("production") => Environment::Production,
            Some("development") => Environment::Development,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "APP_ENV".to_string(),
                    reason: format!("expected development or production, got {}", other),
                }
                .into())
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            session_secret,
            app_url: required("APP_URL")?,
            environment,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            upload_dir: optional("UPLOAD_DIR")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            overlay_font_path: optional("OVERLAY_FONT_PATH").map(PathBuf::from),
            cdn: CdnConfig {
                api_url: optional("CDN_API_URL"),
                api_token: optional("CDN_API_TOKEN"),
                distribution_id: optional("CDN_DISTRIBUTION_ID"),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
