//! 环境变量回退
//!
//! Only fields that are still empty are filled; explicit configuration always wins.

use super::{PROVIDER_NAME, SpaceshipProvider};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "LIBDNS_SPACESHIP_APIKEY";
/// Environment variable holding the API secret.
pub const ENV_API_SECRET: &str = "LIBDNS_SPACESHIP_APISECRET";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "LIBDNS_SPACESHIP_BASEURL";

impl SpaceshipProvider {
    /// Fills empty fields from the process environment.
    pub fn populate_from_env(&mut self) {
        self.populate_from(|name| std::env::var(name).ok());
    }

    /// Fills empty fields using `lookup` to resolve environment variable names.
    ///
    /// Empty values returned by `lookup` are treated as unset.
    pub fn populate_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            (&mut self.api_key, ENV_API_KEY),
            (&mut self.api_secret, ENV_API_SECRET),
            (&mut self.base_url, ENV_BASE_URL),
        ];

        for (field, var) in fields {
            if !field.is_empty() {
                continue;
            }
            if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
                log::debug!("[{PROVIDER_NAME}] Using {var} from environment");
                *field = value;
            }
        }
    }
}
