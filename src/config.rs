use std::env;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub assets: AssetConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the events REST backend, without a trailing `/event`.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Base URL the backend serves uploaded media from.
    pub base_url: String,
    /// Upload subdirectory per asset kind. The backend's directory layout
    /// is not part of the event payload, so these stay configurable until
    /// confirmed against the deployed backend.
    pub image_dir: String,
    pub flyer_dir: String,
    pub certificate_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            api: ApiConfig {
                base_url: required_url("API_BASE_URL")?,
            },
            assets: AssetConfig {
                base_url: required_url("ASSET_BASE_URL")?,
                image_dir: env::var("ASSET_IMAGE_DIR")
                    .unwrap_or_else(|_| "uploads/gambar".to_string()),
                flyer_dir: env::var("ASSET_FLYER_DIR")
                    .unwrap_or_else(|_| "uploads/flyer".to_string()),
                certificate_dir: env::var("ASSET_CERTIFICATE_DIR")
                    .unwrap_or_else(|_| "uploads/sertifikat".to_string()),
            },
        })
    }
}

/// Read a required env var and check it parses as an absolute URL, so a
/// missing or mistyped base URL fails at startup instead of on the first
/// request.
fn required_url(name: &str) -> Result<String, ConfigError> {
    let value = env::var(name).map_err(|_| ConfigError::MissingEnv(name.to_string()))?;
    url::Url::parse(&value).map_err(|_| ConfigError::InvalidValue(name.to_string()))?;
    Ok(value)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            base_url: "http://localhost:8000".to_string(),
            image_dir: "uploads/gambar".to_string(),
            flyer_dir: "uploads/flyer".to_string(),
            certificate_dir: "uploads/sertifikat".to_string(),
        }
    }
}
