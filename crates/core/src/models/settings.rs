use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::security::password::KdfParams;

/// Default base URL of the mock REST backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Client configuration. Every field has a default, so a partial JSON
/// document (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the REST backend serving `/orders` and `/users`.
    pub api_base_url: String,

    /// Per-request timeout. Ignored on wasm32 where reqwest has no timeouts.
    pub request_timeout_secs: u64,

    /// ISO 4217 code whose sign prefixes every displayed amount.
    pub currency: String,

    /// Cost parameters for hashing passwords at registration.
    pub password_hashing: KdfParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            currency: "USD".to_string(),
            password_hashing: KdfParams::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(CoreError::InvalidSettings("api_base_url must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::InvalidSettings(format!(
                "api_base_url must start with http:// or https://, got '{url}'"
            )));
        }
        let currency = self.currency.trim();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidSettings(format!(
                "currency must be a three-letter code, got '{currency}'"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::InvalidSettings(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Join the base URL and a path like `/orders`, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
