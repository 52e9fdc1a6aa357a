//! Module registry
//!
//! Modules are registered explicitly at startup by calling each module crate's
//! `register` function with the host's registry. The registry is filled once and
//! only read afterwards.
//!
//! ```rust,ignore
//! let mut registry = ModuleRegistry::new();
//! dns_spaceship::register(&mut registry)?;
//!
//! let module = registry.load("dns.providers.spaceship", json)?;
//! ```

use std::collections::BTreeMap;

use crate::dispenser::Dispenser;
use crate::error::{HostError, HostResult};
use crate::module::{Module, ModuleId, ModuleInfo, unmarshal};

/// Registry of module types keyed by ID.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<ModuleId, ModuleInfo>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module type. Each ID may be registered once.
    pub fn register(&mut self, info: ModuleInfo) -> HostResult<()> {
        if self.modules.contains_key(&info.id) {
            return Err(HostError::DuplicateModule(info.id.to_string()));
        }
        log::debug!("Registered module {}", info.id);
        self.modules.insert(info.id.clone(), info);
        Ok(())
    }

    /// Registers `M` using its [`Module::module_info`].
    pub fn register_module<M: Module>(&mut self) -> HostResult<()> {
        self.register(M::module_info()?)
    }

    pub fn get(&self, id: &str) -> Option<&ModuleInfo> {
        self.modules.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All registered IDs in sorted order.
    pub fn ids(&self) -> Vec<&ModuleId> {
        self.modules.keys().collect()
    }

    /// IDs whose namespace is exactly `namespace`.
    pub fn ids_in_namespace(&self, namespace: &str) -> Vec<&ModuleId> {
        self.modules
            .keys()
            .filter(|id| id.namespace() == namespace)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Creates an empty instance of the module registered under `id`.
    pub fn new_instance(&self, id: &str) -> HostResult<Box<dyn Module>> {
        let info = self
            .get(id)
            .ok_or_else(|| HostError::ModuleNotFound(id.to_string()))?;
        Ok((info.new)())
    }

    /// Creates an instance pre-populated from its JSON configuration.
    pub fn load(&self, id: &str, raw: serde_json::Value) -> HostResult<Box<dyn Module>> {
        let mut module = self.new_instance(id)?;
        module.load_json(raw).map_err(|source| HostError::Json {
            id: id.to_string(),
            source,
        })?;
        Ok(module)
    }

    /// Creates an instance configured from directive tokens.
    pub fn unmarshal(&self, id: &str, d: &mut Dispenser) -> HostResult<Box<dyn Module>> {
        let mut module = self.new_instance(id)?;
        unmarshal(module.as_mut(), d)?;
        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Echo {
        #[serde(default)]
        word: String,
    }

    impl Module for Echo {
        fn id(&self) -> &'static str {
            "test.echo"
        }

        fn module_info() -> HostResult<ModuleInfo> {
            Ok(ModuleInfo {
                id: ModuleId::new("test.echo")?,
                new: || Box::new(Self::default()),
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
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = ModuleRegistry::new();
        assert!(registry.is_empty());
        registry.register_module::<Echo>().unwrap();

        assert!(registry.contains("test.echo"));
        assert!(!registry.contains("test.other"));
        assert_eq!(registry.len(), 1);
        let ids: Vec<&str> = registry.ids().into_iter().map(ModuleId::as_str).collect();
        assert_eq!(ids, ["test.echo"]);
        assert_eq!(registry.ids_in_namespace("test").len(), 1);
        assert!(registry.ids_in_namespace("dns.providers").is_empty());
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = ModuleRegistry::new();
        registry.register_module::<Echo>().unwrap();
        let err = registry.register_module::<Echo>().unwrap_err();
        assert!(matches!(err, HostError::DuplicateModule(id) if id == "test.echo"));
    }

    #[test]
    fn load_applies_json() {
        let mut registry = ModuleRegistry::new();
        registry.register_module::<Echo>().unwrap();

        let module = registry
            .load("test.echo", serde_json::json!({ "word": "hi" }))
            .unwrap();
        let echo = module.as_any().downcast_ref::<Echo>().unwrap();
        assert_eq!(echo.word, "hi");
    }

    #[test]
    fn load_reports_bad_json() {
        let mut registry = ModuleRegistry::new();
        registry.register_module::<Echo>().unwrap();
        let err = registry
            .load("test.echo", serde_json::json!({ "word": 3 }))
            .unwrap_err();
        assert!(matches!(err, HostError::Json { .. }));
    }

    #[test]
    fn unknown_module() {
        let registry = ModuleRegistry::new();
        assert!(matches!(
            registry.new_instance("dns.providers.nope"),
            Err(HostError::ModuleNotFound(_))
        ));
    }

    #[test]
    fn unmarshal_requires_capability() {
        let mut registry = ModuleRegistry::new();
        registry.register_module::<Echo>().unwrap();
        let mut d = Dispenser::parse("test", "echo hi").unwrap();
        let err = registry.unmarshal("test.echo", &mut d).unwrap_err();
        assert!(matches!(err, HostError::Unsupported { .. }));
    }
}
