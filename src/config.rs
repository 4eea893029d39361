use anyhow::{Context, Result};
use std::env::var;
use std::path::PathBuf;
use std::time::Duration;

const API_KEY: &str = "SHAPESINC_API_KEY";
const SHAPE_USERNAME: &str = "SHAPESINC_SHAPE_USERNAME";
const BASE_URL: &str = "SHAPESINC_BASE_URL";
const TIMEOUT_SECS: &str = "SHAPESINC_TIMEOUT_SECS";
const PORT: &str = "PORT";
const UPLOAD_DIR: &str = "UPLOAD_DIR";

static DEFAULT_BASE_URL: &str = "https://api.shapes.inc/v1";
static DEFAULT_UPLOAD_DIR: &str = "uploads";
static MODEL_PREFIX: &str = "shapesinc";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub shape_username: String,
    pub base_url: String,
    pub timeout: Duration,
    pub port: u16,
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{key} must be set"))
        };

        let port = match lookup(PORT) {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("{PORT} is not a valid port: {port}"))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup(TIMEOUT_SECS) {
            Some(secs) => secs
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_SECS} is not a number of seconds: {secs}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_key: required(API_KEY)?,
            shape_username: required(SHAPE_USERNAME)?,
            base_url: lookup(BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            port,
            upload_dir: lookup(UPLOAD_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
        })
    }

    /// Model identifier the remote service expects for the configured shape.
    pub fn model_id(&self) -> String {
        format!("{}/{}", MODEL_PREFIX, self.shape_username)
    }
}
