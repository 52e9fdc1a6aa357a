use serde::{Deserialize, Serialize};

// ============ Provider Metadata Types ============

/// The input type of a credential field (affects how hosts render or mask it).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
}

/// Definition of a single configuration field accepted by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentialField {
    /// Machine-readable field key (e.g., `"api_key"`).
    pub key: String,
    /// Human-readable label (e.g., `"API Key"`).
    pub label: String,
    /// Input type for rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Environment variable consulted when the field is left empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_var: Option<String>,
    /// Whether provisioning fails when the field stays empty.
    pub required: bool,
}

/// Provider-specific pagination limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLimits {
    /// Page size used when none is configured.
    pub default_page_size: u32,
    /// Maximum page size accepted by the DNS records API.
    pub max_page_size: u32,
}

/// Static metadata describing the provider.
///
/// Contains the provider's identity, accepted configuration fields and API limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider identifier.
    pub id: String,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Configuration fields accepted by this provider.
    pub fields: Vec<ProviderCredentialField>,
    /// API pagination limits for this provider.
    pub limits: ProviderLimits,
}

// ============ Credential Types ============

/// Validation error for provider credentials.
///
/// Returned when a credential field is empty or has an invalid format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: String,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field has an invalid format.
    InvalidFormat {
        /// Which provider the error relates to.
        provider: String,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl CredentialValidationError {
    /// Machine-readable key of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field, .. } | Self::InvalidFormat { field, .. } => field,
        }
    }
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}
