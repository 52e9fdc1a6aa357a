use super::{PROVIDER_NAME, SpaceshipProvider};
use crate::types::CredentialValidationError;

impl SpaceshipProvider {
    /// Checks that the key pair is present and the base URL override is usable.
    ///
    /// Does not contact the API.
    pub fn validate_credentials(&self) -> Result<(), CredentialValidationError> {
        Self::require_non_empty(&self.api_key, "api_key", "API Key")?;
        Self::require_non_empty(&self.api_secret, "api_secret", "API Secret")?;

        let url = self.base_url.trim();
        if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(CredentialValidationError::InvalidFormat {
                provider: PROVIDER_NAME.to_string(),
                field: "base_url".to_string(),
                label: "API URL".to_string(),
                reason: format!("'{url}' must start with http:// or https://"),
            });
        }
        Ok(())
    }

    fn require_non_empty(
        value: &str,
        key: &str,
        label: &str,
    ) -> Result<(), CredentialValidationError> {
        if value.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                provider: PROVIDER_NAME.to_string(),
                field: key.to_string(),
                label: label.to_string(),
            });
        }
        Ok(())
    }
}
