//! Provisioning error type

use dns_spaceship_provider::CredentialValidationError;
use thiserror::Error;

/// Errors raised while provisioning the module.
///
/// Parse-time problems are reported as [`dns_spaceship_host::ParseError`] instead.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Key or secret still empty after placeholder expansion and environment fallback
    #[error("spaceship: api_key and api_secret are required")]
    MissingCredentials,

    /// Zero page size supplied through JSON configuration
    #[error("spaceship: api_pagesize must be a positive integer")]
    InvalidPageSize,

    /// A resolved field has an unusable value
    #[error("spaceship: {0}")]
    InvalidField(#[from] CredentialValidationError),
}

impl ProvisionError {
    /// Whether it is expected behavior (operator configuration mistakes), used for log classification.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingCredentials | Self::InvalidPageSize | Self::InvalidField(_) => true,
        }
    }
}
