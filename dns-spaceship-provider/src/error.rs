use serde::{Deserialize, Serialize};

/// Error type for Spaceship provider configuration.
///
/// Each variant includes a `provider` field identifying the provider that produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The HTTP client could not be constructed from the configured settings.
    HttpClient {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// Failed to parse a serialized provider configuration.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize the provider configuration.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户配置错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient { provider, detail } => {
                write!(f, "[{provider}] Failed to build HTTP client: {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http_client() {
        let e = ProviderError::HttpClient {
            provider: "spaceship".to_string(),
            detail: "tls backend unavailable".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[spaceship] Failed to build HTTP client: tls backend unavailable"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = ProviderError::ParseError {
            provider: "spaceship".to_string(),
            detail: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[spaceship] Parse error: expected value at line 1 column 1"
        );
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = ProviderError::SerializationError {
            provider: "spaceship".to_string(),
            detail: "boom".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"SerializationError\""));
        assert!(json.contains("\"provider\":\"spaceship\""));
    }

    #[test]
    fn expected_variants() {
        assert!(
            ProviderError::ParseError {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::HttpClient {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
    }
}
