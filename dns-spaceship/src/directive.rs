//! Directive parsing
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

use std::time::Duration;

use dns_spaceship_host::{Dispenser, ParseError, Token, Unmarshaler};
use dns_spaceship_provider::HttpClientConfig;

use crate::module::SpaceshipModule;

impl SpaceshipModule {
    /// Populates the provider from every occurrence of the directive in `d`.
    ///
    /// Fields already set (by JSON pre-population or an earlier occurrence) cannot
    /// be set again. Key and secret must both be present once all tokens are read.
    pub fn unmarshal_directive(&mut self, d: &mut Dispenser) -> Result<(), ParseError> {
        while d.next() {
            if d.token().is_some_and(Token::is_block_open) {
                return Err(d.err("unexpected '{'"));
            }
            log::debug!("Parsing '{}' directive", d.val());
            self.parse_inline_args(d)?;

            let nesting = d.nesting();
            while d.next_block(nesting) {
                self.parse_subdirective(d)?;
            }
        }

        if self.provider.api_key.is_empty() || self.provider.api_secret.is_empty() {
            return Err(d.err("missing api_key or api_secret"));
        }
        Ok(())
    }

    fn parse_inline_args(&mut self, d: &mut Dispenser) -> Result<(), ParseError> {
        if d.next_arg() {
            set_once(d, "api_key", &mut self.provider.api_key)?;
        }
        if d.next_arg() {
            set_once(d, "api_secret", &mut self.provider.api_secret)?;
        }
        if d.next_arg() {
            return Err(d.arg_err());
        }
        Ok(())
    }

    fn parse_subdirective(&mut self, d: &mut Dispenser) -> Result<(), ParseError> {
        let name = d.val().to_string();
        match name.as_str() {
            "api_key" => set_from_next_arg(d, &name, &mut self.provider.api_key)?,
            "api_secret" => set_from_next_arg(d, &name, &mut self.provider.api_secret)?,
            "api_url" => set_from_next_arg(d, &name, &mut self.provider.base_url)?,
            "api_pagesize" => {
                require_value(d, &name)?;
                let size = positive_int(d, "api_pagesize must be a positive integer")?;
                self.provider.page_size = Some(size);
            }
            "api_timeout" => {
                if !d.next_arg() {
                    return Err(d.err("api_timeout requires value (seconds)"));
                }
                let secs = positive_int(d, "api_timeout must be a positive integer (seconds)")?;
                let timeout = Duration::from_secs(u64::from(secs));
                match self.provider.http_client.as_mut() {
                    Some(client) => client.timeout = Some(timeout),
                    None => {
                        self.provider.http_client = Some(HttpClientConfig::with_timeout(timeout));
                    }
                }
            }
            other => {
                return Err(d.err(format!("unrecognized subdirective '{other}'")));
            }
        }

        // 每个子指令只接受一个值
        if d.next_arg() {
            return Err(d.arg_err());
        }
        Ok(())
    }
}

impl Unmarshaler for SpaceshipModule {
    fn unmarshal(&mut self, d: &mut Dispenser) -> Result<(), ParseError> {
        self.unmarshal_directive(d)
    }
}

fn ensure_unset(d: &Dispenser, name: &str, field: &str) -> Result<(), ParseError> {
    if field.is_empty() {
        Ok(())
    } else {
        Err(d.err(format!("{name} already set")))
    }
}

fn require_value(d: &mut Dispenser, name: &str) -> Result<(), ParseError> {
    if d.next_arg() {
        Ok(())
    } else {
        Err(d.err(format!("{name} requires value")))
    }
}

/// Stores the current token into `field` unless it already holds a value.
fn set_once(d: &Dispenser, name: &str, field: &mut String) -> Result<(), ParseError> {
    ensure_unset(d, name, field)?;
    *field = d.val().to_string();
    Ok(())
}

fn set_from_next_arg(d: &mut Dispenser, name: &str, field: &mut String) -> Result<(), ParseError> {
    ensure_unset(d, name, field)?;
    require_value(d, name)?;
    *field = d.val().to_string();
    Ok(())
}

fn positive_int(d: &Dispenser, message: &str) -> Result<u32, ParseError> {
    d.val()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| d.err(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<SpaceshipModule, ParseError> {
        let mut d = Dispenser::parse("Caddyfile", input)?;
        let mut module = SpaceshipModule::new();
        module.unmarshal_directive(&mut d)?;
        Ok(module)
    }

    fn parse_err(input: &str) -> String {
        parse(input).unwrap_err().message
    }

    #[test]
    fn inline_key_and_secret() {
        let m = parse("spaceship key secret").unwrap();
        assert_eq!(m.provider().api_key, "key");
        assert_eq!(m.provider().api_secret, "secret");
        assert!(m.provider().http_client.is_none());
    }

    #[test]
    fn inline_key_block_secret() {
        let m = parse("spaceship key {\n  api_secret secret\n}").unwrap();
        assert_eq!(m.provider().api_key, "key");
        assert_eq!(m.provider().api_secret, "secret");
    }

    #[test]
    fn too_many_inline_args() {
        let msg = parse_err("spaceship a b c");
        assert_eq!(msg, "wrong argument count or unexpected line ending after 'c'");
    }

    #[test]
    fn inline_then_block_duplicate() {
        let msg = parse_err("spaceship key secret {\n  api_key other\n}");
        assert_eq!(msg, "api_key already set");
    }

    #[test]
    fn subdirective_missing_value() {
        for name in ["api_key", "api_secret", "api_url", "api_pagesize"] {
            let msg = parse_err(&format!("spaceship {{\n  {name}\n}}"));
            assert_eq!(msg, format!("{name} requires value"));
        }
        let msg = parse_err("spaceship {\n  api_timeout\n}");
        assert_eq!(msg, "api_timeout requires value (seconds)");
    }

    #[test]
    fn subdirective_extra_value() {
        let msg = parse_err("spaceship {\n  api_key a b\n}");
        assert_eq!(msg, "wrong argument count or unexpected line ending after 'b'");
    }

    #[test]
    fn negative_and_overflowing_numbers() {
        let msg = parse_err("spaceship k s {\n  api_pagesize -5\n}");
        assert_eq!(msg, "api_pagesize must be a positive integer");
        let msg = parse_err("spaceship k s {\n  api_timeout 99999999999\n}");
        assert_eq!(msg, "api_timeout must be a positive integer (seconds)");
    }

    #[test]
    fn page_size_may_be_repeated() {
        let m = parse("spaceship k s {\n  api_pagesize 10\n  api_pagesize 20\n}").unwrap();
        assert_eq!(m.provider().page_size, Some(20));
    }

    #[test]
    fn timeout_updates_existing_client_settings() {
        let mut module = SpaceshipModule::new();
        module.provider_mut().http_client = Some(HttpClientConfig::default());
        let mut d = Dispenser::parse("Caddyfile", "spaceship k s {\n  api_timeout 7\n}").unwrap();
        module.unmarshal_directive(&mut d).unwrap();
        assert_eq!(
            module.provider().http_client.as_ref().and_then(|c| c.timeout),
            Some(Duration::from_secs(7))
        );
    }

    #[test]
    fn repeated_directive_fills_same_record() {
        let m = parse("spaceship key\nspaceship {\n  api_secret secret\n}").unwrap();
        assert_eq!(m.provider().api_key, "key");
        assert_eq!(m.provider().api_secret, "secret");
    }

    #[test]
    fn error_carries_location() {
        let err = parse("spaceship k s {\n  api_url https://a.test\n  bogus x\n}").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(
            err.to_string(),
            "Caddyfile:3 - Error during parsing: unrecognized subdirective 'bogus'"
        );
    }

    #[test]
    fn block_on_its_own_line_rejected() {
        let err = parse("spaceship key secret\n{\n  api_url https://x.test\n}").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.message, "unexpected '{'");
    }

    #[test]
    fn empty_input_names_source() {
        let err = parse("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Caddyfile - Error during parsing: missing api_key or api_secret"
        );
    }
}
