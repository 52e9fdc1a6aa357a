//! # dns-spaceship-provider
//!
//! Configuration for the [Spaceship](https://www.spaceship.com/) DNS provider.
//!
//! [`SpaceshipProvider`] carries the API key pair, an optional base URL override,
//! the page size used when listing records and the HTTP client settings. It knows
//! how to fill unset credentials from the environment and how to build the
//! `reqwest` client the record-management code uses. It performs no API calls
//! itself.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Environment
//!
//! | Variable | Field |
//! |----------|-------|
//! | `LIBDNS_SPACESHIP_APIKEY` | `api_key` |
//! | `LIBDNS_SPACESHIP_APISECRET` | `api_secret` |
//! | `LIBDNS_SPACESHIP_BASEURL` | `base_url` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_spaceship_provider::SpaceshipProvider;
//!
//! # fn main() -> dns_spaceship_provider::Result<()> {
//! let mut provider = SpaceshipProvider::default();
//! provider.populate_from_env();
//!
//! if let Err(e) = provider.validate_credentials() {
//!     eprintln!("spaceship not configured: {e}");
//!     return Ok(());
//! }
//!
//! let client = provider.build_http_client()?;
//! # let _ = client;
//! # Ok(())
//! # }
//! ```

mod error;
mod http_client;
mod spaceship;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

pub use http_client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, HttpClientConfig};

pub use spaceship::{
    DEFAULT_PAGE_SIZE, ENV_API_KEY, ENV_API_SECRET, ENV_BASE_URL, MAX_PAGE_SIZE, PROVIDER_NAME,
    SPACESHIP_API_BASE, SpaceshipProvider,
};

pub use types::{
    CredentialValidationError, FieldType, ProviderCredentialField, ProviderLimits,
    ProviderMetadata,
};

pub use utils::log_sanitizer::mask_secret;
