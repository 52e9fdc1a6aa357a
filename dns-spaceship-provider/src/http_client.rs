//! HTTP client settings
//!
//! The provider never sends requests while it is being configured; it only records
//! how its `reqwest::Client` must be built. Record-management code builds the client
//! from these settings when it first talks to the API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for the HTTP client used by the provider.
///
/// A present config with `timeout: None` means "client configured, timeout unset";
/// provisioning fills that gap with [`DEFAULT_REQUEST_TIMEOUT_SECS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout.
    #[serde(
        default,
        with = "crate::utils::duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    /// Settings with an explicit request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Timeout that will actually be applied to requests.
    pub fn effective_timeout(&self) -> Duration {
        self.timeout
            .filter(|t| !t.is_zero())
            .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// 创建带超时配置的 HTTP Client
    pub fn build(&self, provider_name: &str) -> Result<Client> {
        let timeout = self.effective_timeout();
        log::debug!(
            "[{provider_name}] Building HTTP client (timeout={}s)",
            timeout.as_secs()
        );
        Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::HttpClient {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            })
    }
}
