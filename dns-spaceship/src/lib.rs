//! # dns-spaceship
//!
//! Spaceship DNS provider module, registered as `dns.providers.spaceship`.
//!
//! The module is configured from a directive, from JSON, or both, and resolves
//! its credentials at provisioning time. All record management is left to the
//! wrapped [`SpaceshipProvider`].
//!
//! ## Directive
//!
//! ```text
//! spaceship [<api_key> [<api_secret>]] {
//!     api_key      <api_key>
//!     api_secret   <api_secret>
//!     api_url      <base_url>
//!     api_pagesize <records per page>
//!     api_timeout  <seconds>
//! }
//! ```
//!
//! Values may use placeholders such as `{env.SPACESHIP_KEY}`. Credentials left
//! empty are read from `LIBDNS_SPACESHIP_APIKEY`, `LIBDNS_SPACESHIP_APISECRET`
//! and `LIBDNS_SPACESHIP_BASEURL`.
//!
//! ## Usage
//!
//! ```rust
//! use dns_spaceship::{MODULE_ID, SpaceshipModule};
//! use dns_spaceship_host::{Dispenser, ModuleRegistry, ProvisionContext, provision};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = ModuleRegistry::new();
//! dns_spaceship::register(&mut registry)?;
//!
//! let mut d = Dispenser::parse("Caddyfile", "spaceship key secret {\n  api_timeout 15\n}")?;
//! let mut module = registry.unmarshal(MODULE_ID, &mut d)?;
//! provision(module.as_mut(), &ProvisionContext::new())?;
//!
//! let spaceship = module
//!     .as_any()
//!     .downcast_ref::<SpaceshipModule>()
//!     .ok_or("unexpected module type")?;
//! assert_eq!(spaceship.provider().api_key, "key");
//! # Ok(())
//! # }
//! ```

mod directive;
mod error;
mod module;
mod provision;

pub use error::ProvisionError;
pub use module::{MODULE_ID, SpaceshipModule, register};

pub use dns_spaceship_provider::SpaceshipProvider;
