//! Spaceship DNS Provider

mod env;
mod validate;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::http_client::{DEFAULT_REQUEST_TIMEOUT_SECS, HttpClientConfig};
use crate::types::{FieldType, ProviderCredentialField, ProviderLimits, ProviderMetadata};
use crate::utils::log_sanitizer::mask_secret;

pub use env::{ENV_API_KEY, ENV_API_SECRET, ENV_BASE_URL};

/// Provider identifier used in errors and logs.
pub const PROVIDER_NAME: &str = "spaceship";
/// Spaceship public API base URL.
pub const SPACESHIP_API_BASE: &str = "https://spaceship.dev/api/v1";
/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Spaceship DNS records API 单页最大记录数
pub const MAX_PAGE_SIZE: u32 = 500;

/// Spaceship DNS provider configuration.
///
/// Holds everything the record-management client needs: the API key pair, an
/// optional base URL override, the listing page size and the HTTP client settings.
/// Empty strings mean "not configured".
///
/// # Construction
///
/// ```rust
/// use dns_spaceship_provider::SpaceshipProvider;
///
/// let provider = SpaceshipProvider::new("your-api-key", "your-api-secret");
/// assert_eq!(provider.effective_base_url(), "https://spaceship.dev/api/v1");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceshipProvider {
    /// Spaceship API key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    /// Spaceship API secret.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_secret: String,
    /// API base URL; empty selects [`SPACESHIP_API_BASE`].
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_url: String,
    /// Records per page when listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// HTTP client settings; `None` leaves the defaults in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_client: Option<HttpClientConfig>,
}

impl std::fmt::Debug for SpaceshipProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceshipProvider")
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_secret", &mask_secret(&self.api_secret))
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("http_client", &self.http_client)
            .finish()
    }
}

impl SpaceshipProvider {
    /// Creates a provider with the given key pair and default settings.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            ..Self::default()
        }
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn effective_base_url(&self) -> &str {
        let url = self.base_url.trim();
        if url.is_empty() {
            SPACESHIP_API_BASE
        } else {
            url.trim_end_matches('/')
        }
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`.
    pub fn effective_page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Request timeout the HTTP client will use.
    pub fn request_timeout(&self) -> Duration {
        self.http_client.as_ref().map_or(
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            HttpClientConfig::effective_timeout,
        )
    }

    /// Builds the `reqwest` client from the configured HTTP settings.
    pub fn build_http_client(&self) -> Result<Client> {
        self.http_client
            .clone()
            .unwrap_or_default()
            .build(PROVIDER_NAME)
    }

    /// Parses a JSON provider configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ProviderError::ParseError {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        })
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ProviderError::SerializationError {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        })
    }

    /// Static metadata describing the accepted fields and API limits.
    pub fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: PROVIDER_NAME.to_string(),
            name: "Spaceship".to_string(),
            description: "Spaceship DNS".to_string(),
            fields: vec![
                ProviderCredentialField {
                    key: "api_key".to_string(),
                    label: "API Key".to_string(),
                    field_type: FieldType::Password,
                    env_var: Some(ENV_API_KEY.to_string()),
                    required: true,
                },
                ProviderCredentialField {
                    key: "api_secret".to_string(),
                    label: "API Secret".to_string(),
                    field_type: FieldType::Password,
                    env_var: Some(ENV_API_SECRET.to_string()),
                    required: true,
                },
                ProviderCredentialField {
                    key: "base_url".to_string(),
                    label: "API URL".to_string(),
                    field_type: FieldType::Text,
                    env_var: Some(ENV_BASE_URL.to_string()),
                    required: false,
                },
            ],
            limits: ProviderLimits {
                default_page_size: DEFAULT_PAGE_SIZE,
                max_page_size: MAX_PAGE_SIZE,
            },
        }
    }
}
