//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STORE_NAME` - Store name used in order messages (default: HISTA STORE)
//! - `STORE_WHATSAPP_NUMBER` - Recipient phone number in international format,
//!   digits only (default: 2180915430176)
//! - `STORE_WHATSAPP_URL` - Click-to-chat service base URL (default: <https://wa.me>)

use thiserror::Error;
use url::Url;

const DEFAULT_STORE_NAME: &str = "HISTA STORE";
const DEFAULT_WHATSAPP_NUMBER: &str = "2180915430176";
const DEFAULT_WHATSAPP_URL: &str = "https://wa.me";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Store name shown in the order message header
    pub store_name: String,
    /// WhatsApp recipient, digits only
    pub whatsapp_number: String,
    /// Base URL of the click-to-chat service, https, without a trailing slash
    pub whatsapp_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            whatsapp_url: DEFAULT_WHATSAPP_URL.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a looked-up value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_name = lookup("STORE_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

        let whatsapp_number = match lookup("STORE_WHATSAPP_NUMBER") {
            Some(raw) => parse_phone_number(&raw)
                .map_err(|e| ConfigError::InvalidEnvVar("STORE_WHATSAPP_NUMBER".to_string(), e))?,
            None => DEFAULT_WHATSAPP_NUMBER.to_string(),
        };

        let whatsapp_url = match lookup("STORE_WHATSAPP_URL") {
            Some(raw) => parse_service_url(&raw)
                .map_err(|e| ConfigError::InvalidEnvVar("STORE_WHATSAPP_URL".to_string(), e))?,
            None => DEFAULT_WHATSAPP_URL.to_string(),
        };

        Ok(Self {
            store_name,
            whatsapp_number,
            whatsapp_url,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Normalize a phone number to the digits-only form click-to-chat expects.
///
/// A leading `+` and embedded spaces are accepted and dropped.
fn parse_phone_number(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let without_plus = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = without_plus.chars().filter(|c| *c != ' ').collect();

    if digits.is_empty() {
        return Err("phone number cannot be empty".to_string());
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("phone number must contain only digits (got '{raw}')"));
    }
    Ok(digits)
}

/// Parse and validate the click-to-chat base URL.
///
/// Returns the normalized URL with any trailing `/` removed.
fn parse_service_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    if url.scheme() != "https" {
        return Err(format!("must use https (got '{}')", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("must have a host".to_string());
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
