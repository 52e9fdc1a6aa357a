//! Provisioning: placeholder expansion, environment fallback and final checks

use std::time::Duration;

use dns_spaceship_host::{BoxError, ProvisionContext, Provisioner, Replacer};
use dns_spaceship_provider::{DEFAULT_REQUEST_TIMEOUT_SECS, SpaceshipProvider, mask_secret};

use crate::error::ProvisionError;
use crate::module::SpaceshipModule;

impl SpaceshipModule {
    /// Resolves the configuration into its final form.
    ///
    /// Placeholders are expanded (unknown ones become empty), empty fields are
    /// filled from the environment, and the result is expanded once more before
    /// the credentials are checked.
    pub fn provision(&mut self, ctx: &ProvisionContext) -> Result<(), ProvisionError> {
        let provider = &mut self.provider;

        expand_fields(provider, ctx.replacer());
        provider.populate_from(|name| ctx.env(name));
        // 环境变量的值本身也可能包含占位符
        expand_fields(provider, ctx.replacer());

        if let Some(client) = provider.http_client.as_mut()
            && client.timeout.is_none_or(|t| t.is_zero())
        {
            log::warn!(
                "spaceship: no HTTP timeout configured, using {DEFAULT_REQUEST_TIMEOUT_SECS}s"
            );
            client.timeout = Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
        }

        if provider.api_key.is_empty() || provider.api_secret.is_empty() {
            return Err(ProvisionError::MissingCredentials);
        }
        if provider.page_size == Some(0) {
            return Err(ProvisionError::InvalidPageSize);
        }
        provider.validate_credentials()?;

        log::debug!(
            "spaceship: provisioned (api_key={}, api_secret={}, base_url={}, page_size={}, timeout={:?})",
            mask_secret(&provider.api_key),
            mask_secret(&provider.api_secret),
            provider.effective_base_url(),
            provider.effective_page_size(),
            provider.request_timeout(),
        );
        Ok(())
    }
}

impl Provisioner for SpaceshipModule {
    fn provision(&mut self, ctx: &ProvisionContext) -> Result<(), BoxError> {
        Self::provision(self, ctx).map_err(Into::into)
    }
}

fn expand_fields(provider: &mut SpaceshipProvider, replacer: &Replacer) {
    for field in [
        &mut provider.api_key,
        &mut provider.api_secret,
        &mut provider.base_url,
    ] {
        *field = replacer.replace_all(field.as_str(), "");
    }
}
