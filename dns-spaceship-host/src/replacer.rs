//! Placeholder expansion
//!
//! Replaces `{key}` references inside configuration strings. Built-in keys:
//!
//! | Placeholder | Value |
//! |-------------|-------|
//! | `{env.NAME}` | environment variable `NAME` (empty if unset) |
//! | `{system.os}` / `{system.arch}` | target OS / CPU architecture |
//! | `{system.wd}` | current working directory |
//! | `{time.now.unix}` / `{time.now.unix_ms}` | current Unix time |
//! | `{time.now.year}` / `{time.now.rfc3339}` | current UTC year / timestamp |
//!
//! `\{` and `\}` produce literal braces.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

/// Resolves environment variable names to values.
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Environment lookup backed by the process environment.
pub fn process_env() -> EnvLookup {
    Arc::new(|name: &str| std::env::var(name).ok())
}

const ENV_PREFIX: &str = "env.";

/// Placeholder replacer with a set of custom values and an environment source.
#[derive(Clone)]
pub struct Replacer {
    values: HashMap<String, String>,
    env: EnvLookup,
}

impl std::fmt::Debug for Replacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("Replacer").field("keys", &keys).finish_non_exhaustive()
    }
}

impl Default for Replacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Replacer {
    /// Replacer reading `{env.*}` from the process environment.
    pub fn new() -> Self {
        Self::with_env(process_env())
    }

    /// Replacer reading `{env.*}` through `env`.
    pub fn with_env(env: EnvLookup) -> Self {
        Self {
            values: HashMap::new(),
            env,
        }
    }

    /// Sets a custom placeholder value; custom keys shadow built-ins.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a custom placeholder value.
    pub fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Resolves a placeholder key, or `None` if it is unknown.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(v) = self.values.get(key) {
            return Some(v.clone());
        }
        if let Some(name) = key.strip_prefix(ENV_PREFIX) {
            return Some((self.env)(name).unwrap_or_default());
        }
        Self::global(key)
    }

    /// Replaces every placeholder; unknown ones become `empty`.
    pub fn replace_all(&self, input: &str, empty: &str) -> String {
        self.replace(input, Some(empty))
    }

    /// Replaces known placeholders and leaves unknown ones untouched.
    pub fn replace_known(&self, input: &str) -> String {
        self.replace(input, None)
    }

    fn global(key: &str) -> Option<String> {
        match key {
            "system.os" => Some(std::env::consts::OS.to_string()),
            "system.arch" => Some(std::env::consts::ARCH.to_string()),
            "system.wd" => std::env::current_dir()
                .ok()
                .map(|p| p.to_string_lossy().into_owned()),
            "time.now.unix" => Some(Utc::now().timestamp().to_string()),
            "time.now.unix_ms" => Some(Utc::now().timestamp_millis().to_string()),
            "time.now.year" => Some(Utc::now().format("%Y").to_string()),
            "time.now.rfc3339" => Some(Utc::now().to_rfc3339()),
            _ => None,
        }
    }

    fn replace(&self, input: &str, empty: Option<&str>) -> String {
        if !input.contains(['{', '\\']) {
            return input.to_string();
        }

        let bytes = input.as_bytes();
        let mut out = String::with_capacity(input.len());
        let mut last = 0;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\\' if matches!(bytes.get(i + 1), Some(b'{' | b'}')) => {
                    out.push_str(&input[last..i]);
                    out.push(char::from(bytes[i + 1]));
                    i += 2;
                    last = i;
                }
                b'{' => {
                    // unclosed brace: the rest is literal
                    let Some(end) = closing_brace(input, i + 1) else {
                        break;
                    };
                    out.push_str(&input[last..i]);
                    match (self.get(&input[i + 1..end]), empty) {
                        (Some(value), _) => out.push_str(&value),
                        (None, Some(empty)) => out.push_str(empty),
                        (None, None) => out.push_str(&input[i..=end]),
                    }
                    i = end + 1;
                    last = i;
                }
                _ => i += 1,
            }
        }

        out.push_str(&input[last..]);
        out
    }
}

/// Byte index of the first `}` at or after `from` that is not escaped with a backslash.
fn closing_brace(input: &str, from: usize) -> Option<usize> {
    let mut start = from;
    loop {
        let end = start + input[start..].find('}')?;
        if end > from && input.as_bytes()[end - 1] == b'\\' {
            start = end + 1;
            continue;
        }
        return Some(end);
    }
}
