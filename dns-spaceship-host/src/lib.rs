//! # dns-spaceship-host
//!
//! The host side of DNS provider modules: everything a module needs to be
//! configured from directive text and provisioned at startup.
//!
//! - [`tokenize`] / [`Token`]: lexing of the line-oriented directive syntax.
//! - [`Dispenser`]: cursor over tokens with argument and block helpers.
//! - [`Replacer`]: `{...}` placeholder expansion, including `{env.NAME}`.
//! - [`Module`], [`Unmarshaler`], [`Provisioner`]: module capabilities.
//! - [`ModuleRegistry`]: explicit registry modules are registered into.
//!
//! ## Usage
//!
//! ```rust
//! use dns_spaceship_host::{Dispenser, ModuleRegistry, ProvisionContext, provision};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ModuleRegistry::new();
//! // module crates register themselves here, e.g. `dns_spaceship::register(&mut registry)?`
//!
//! let mut d = Dispenser::parse("Caddyfile", "spaceship key secret")?;
//! if registry.contains("dns.providers.spaceship") {
//!     let mut module = registry.unmarshal("dns.providers.spaceship", &mut d)?;
//!     provision(module.as_mut(), &ProvisionContext::new())?;
//! }
//! # Ok(())
//! # }
//! ```

mod dispenser;
mod error;
mod lexer;
mod module;
mod registry;
mod replacer;
mod token;

pub use dispenser::Dispenser;
pub use error::{BoxError, HostError, HostResult, ParseError};
pub use lexer::{check_balanced, tokenize};
pub use module::{
    Module, ModuleId, ModuleInfo, ProvisionContext, Provisioner, Unmarshaler, provision, unmarshal,
};
pub use registry::ModuleRegistry;
pub use replacer::{EnvLookup, Replacer, process_env};
pub use token::Token;
