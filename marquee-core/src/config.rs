//! Environment-driven configuration with hard defaults.
//!
//! Every knob can be left unset; the defaults point at the public catalog
//! service and a session file in the working directory. Override via
//! `MARQUEE_*` variables.

use std::path::PathBuf;
use std::time::Duration;

/// Default catalog API base
pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
/// Default image host base
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
/// Default language parameter sent with every catalog request
pub const DEFAULT_LANGUAGE: &str = "en-US";
/// Default path of the persisted session slot
pub const DEFAULT_SESSION_FILE: &str = "marquee_session.json";
/// Simulated latency applied to login/signup attempts
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(800);

/// Settings for the catalog gateway and its transport
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog API base URL, no trailing slash required
    pub base_url: String,
    /// API key injected into every request
    pub api_key: String,
    /// Language parameter injected into every request
    pub language: String,
    /// Image host base for poster/backdrop URLs
    pub image_base: String,
}

impl CatalogConfig {
    /// Configuration with the given key and all defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        }
    }

    /// Read configuration from `MARQUEE_API_KEY`, `MARQUEE_API_BASE`,
    /// `MARQUEE_LANGUAGE` and `MARQUEE_IMAGE_BASE`, defaulting anything
    /// unset. A missing API key is kept as an empty string; the service
    /// rejects it at request time and the gateway degrades to empty results.
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("MARQUEE_API_BASE", DEFAULT_API_BASE),
            api_key: std::env::var("MARQUEE_API_KEY").unwrap_or_default(),
            language: env_or("MARQUEE_LANGUAGE", DEFAULT_LANGUAGE),
            image_base: env_or("MARQUEE_IMAGE_BASE", DEFAULT_IMAGE_BASE),
        }
    }
}

/// Settings for the session store
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// File holding the single persisted session record
    pub storage_path: PathBuf,
    /// Simulated network latency for login/signup attempts
    pub simulated_latency: Duration,
}

impl SessionConfig {
    /// Read configuration from `MARQUEE_SESSION_FILE`, defaulting the rest
    pub fn from_env() -> Self {
        Self {
            storage_path: PathBuf::from(env_or("MARQUEE_SESSION_FILE", DEFAULT_SESSION_FILE)),
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_SESSION_FILE),
            simulated_latency: DEFAULT_LOGIN_LATENCY,
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
