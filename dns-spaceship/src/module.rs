//! Module type and registration

use std::any::Any;

use dns_spaceship_host::{
    HostResult, Module, ModuleId, ModuleInfo, ModuleRegistry, Provisioner, Unmarshaler,
};
use dns_spaceship_provider::SpaceshipProvider;
use serde::{Deserialize, Serialize};

/// Fixed identifier the module registers under.
pub const MODULE_ID: &str = "dns.providers.spaceship";

/// Lets the host read and manipulate DNS records hosted by Spaceship.
///
/// Wraps a [`SpaceshipProvider`] and fills it from directive tokens, JSON
/// configuration and the environment. Record management itself is done by the
/// provider's client once the module is provisioned.
///
/// The JSON form is the provider's own configuration:
///
/// ```json
/// { "api_key": "...", "api_secret": "...", "page_size": 250, "http_client": { "timeout": 15 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceshipModule {
    pub(crate) provider: SpaceshipProvider,
}

impl SpaceshipModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already populated provider configuration.
    pub fn from_provider(provider: SpaceshipProvider) -> Self {
        Self { provider }
    }

    /// The wrapped provider configuration.
    pub fn provider(&self) -> &SpaceshipProvider {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut SpaceshipProvider {
        &mut self.provider
    }

    /// Hands the configured provider over to record management.
    pub fn into_provider(self) -> SpaceshipProvider {
        self.provider
    }
}

impl Module for SpaceshipModule {
    fn id(&self) -> &'static str {
        MODULE_ID
    }

    fn module_info() -> HostResult<ModuleInfo> {
        Ok(ModuleInfo {
            id: ModuleId::new(MODULE_ID)?,
            new: || Box::new(Self::new()),
        })
    }

    fn load_json(&mut self, raw: serde_json::Value) -> Result<(), serde_json::Error> {
        *self = serde_json::from_value(raw)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_unmarshaler(&mut self) -> Option<&mut dyn Unmarshaler> {
        Some(self)
    }

    fn as_provisioner(&mut self) -> Option<&mut dyn Provisioner> {
        Some(self)
    }
}

/// Registers the Spaceship module with the host's registry.
pub fn register(registry: &mut ModuleRegistry) -> HostResult<()> {
    registry.register_module::<SpaceshipModule>()
}
