//! Module traits
//!
//! A module is a named, configurable component the host instantiates from its
//! registry. Optional capabilities (directive parsing, provisioning) are exposed
//! through `as_*` accessors so the host can drive a `Box<dyn Module>` without
//! knowing its concrete type.

use std::any::Any;
use std::borrow::Borrow;
use std::fmt;

use crate::dispenser::Dispenser;
use crate::error::{BoxError, HostError, HostResult, ParseError};
use crate::replacer::{EnvLookup, Replacer, process_env};

/// Dotted module identifier, e.g. `dns.providers.spaceship`.
///
/// Labels are non-empty and use lowercase ASCII letters, digits and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> HostResult<Self> {
        let id = id.into();
        let invalid = |reason: &str| HostError::InvalidModuleId {
            id: id.clone(),
            reason: reason.to_string(),
        };

        if id.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if id.split('.').any(str::is_empty) {
            return Err(invalid("labels must not be empty"));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.')
        {
            return Err(invalid("only lowercase letters, digits, '_' and '.' are allowed"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the last label (`dns.providers`), empty for top-level IDs.
    pub fn namespace(&self) -> &str {
        self.0.rsplit_once('.').map_or("", |(ns, _)| ns)
    }

    /// The last label (`spaceship`).
    pub fn name(&self) -> &str {
        self.0.rsplit_once('.').map_or(self.0.as_str(), |(_, name)| name)
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registration record for a module type.
#[derive(Clone)]
pub struct ModuleInfo {
    /// Fixed identifier the module is registered under.
    pub id: ModuleId,
    /// Creates an empty, unconfigured instance.
    pub new: fn() -> Box<dyn Module>,
}

impl fmt::Debug for ModuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleInfo")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// A host-loadable module.
pub trait Module: Any + fmt::Debug + Send + Sync {
    /// Registered identifier of this module.
    fn id(&self) -> &'static str;

    /// Registration record (type level, no instance needed).
    fn module_info() -> HostResult<ModuleInfo>
    where
        Self: Sized;

    /// Pre-populates the instance from its JSON configuration.
    fn load_json(&mut self, raw: serde_json::Value) -> Result<(), serde_json::Error>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Directive parsing capability.
    fn as_unmarshaler(&mut self) -> Option<&mut dyn Unmarshaler> {
        None
    }

    /// Provisioning capability.
    fn as_provisioner(&mut self) -> Option<&mut dyn Provisioner> {
        None
    }
}

/// Modules configurable from directive tokens.
pub trait Unmarshaler {
    fn unmarshal(&mut self, d: &mut Dispenser) -> Result<(), ParseError>;
}

/// Modules with a setup step run once after configuration.
pub trait Provisioner {
    fn provision(&mut self, ctx: &ProvisionContext) -> Result<(), BoxError>;
}

/// Host state handed to [`Provisioner::provision`].
#[derive(Clone)]
pub struct ProvisionContext {
    replacer: Replacer,
    env: EnvLookup,
}

impl fmt::Debug for ProvisionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisionContext")
            .field("replacer", &self.replacer)
            .finish_non_exhaustive()
    }
}

impl Default for ProvisionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvisionContext {
    /// Context backed by the process environment.
    pub fn new() -> Self {
        Self::with_env(process_env())
    }

    /// Context whose replacer and environment lookups both go through `env`.
    pub fn with_env(env: EnvLookup) -> Self {
        Self {
            replacer: Replacer::with_env(env.clone()),
            env,
        }
    }

    /// Placeholder expander for configuration strings.
    pub fn replacer(&self) -> &Replacer {
        &self.replacer
    }

    /// Reads an environment variable through the context's environment.
    pub fn env(&self, name: &str) -> Option<String> {
        (self.env)(name)
    }
}

/// Runs the module's provisioning hook, if it has one.
pub fn provision(module: &mut dyn Module, ctx: &ProvisionContext) -> HostResult<()> {
    let id = module.id();
    match module.as_provisioner() {
        Some(p) => {
            log::debug!("Provisioning module {id}");
            p.provision(ctx).map_err(|source| HostError::Provision {
                id: id.to_string(),
                source,
            })
        }
        None => Ok(()),
    }
}

/// Feeds a directive to the module's parser.
pub fn unmarshal(module: &mut dyn Module, d: &mut Dispenser) -> HostResult<()> {
    let id = module.id();
    let parser = module.as_unmarshaler().ok_or_else(|| HostError::Unsupported {
        id: id.to_string(),
        capability: "directive parsing".to_string(),
    })?;
    parser.unmarshal(d)?;
    Ok(())
}
