//! Unified error type definition

use thiserror::Error;

/// A configuration error located at a token.
///
/// Renders as `<file>:<line> - Error during parsing: <message>`. Line 0 means the
/// input had no tokens; only the source name is shown then.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}Error during parsing: {message}", location(.file, .line))]
pub struct ParseError {
    /// Source name of the offending token.
    pub file: String,
    /// 1-based line of the offending token, or 0 when there is none.
    pub line: usize,
    /// Description of the problem.
    pub message: String,
}

impl ParseError {
    pub fn new(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn location(file: &str, line: &usize) -> String {
    match (file.is_empty(), *line) {
        (true, 0) => String::new(),
        (false, 0) => format!("{file} - "),
        (_, line) => format!("{file}:{line} - "),
    }
}

/// Boxed error returned by module provisioning hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Host layer error type
#[derive(Error, Debug)]
pub enum HostError {
    /// Module ID is malformed
    #[error("Invalid module ID '{id}': {reason}")]
    InvalidModuleId { id: String, reason: String },

    /// Module ID registered twice
    #[error("Module already registered: {0}")]
    DuplicateModule(String),

    /// No module under this ID
    #[error("Module not registered: {0}")]
    ModuleNotFound(String),

    /// Module does not implement the requested capability
    #[error("Module {id} does not support {capability}")]
    Unsupported { id: String, capability: String },

    /// Directive parsing failed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// JSON configuration could not be applied
    #[error("Loading module {id}: {source}")]
    Json {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Provisioning hook failed
    #[error("Provisioning module {id}: {source}")]
    Provision {
        id: String,
        #[source]
        source: BoxError,
    },
}

impl HostError {
    /// Whether it is expected behavior (operator configuration mistakes), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::Json { .. } | Self::Provision { .. } | Self::ModuleNotFound(_)
        )
    }
}

/// Host layer Result type alias
pub type HostResult<T> = std::result::Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let e = ParseError::new("Caddyfile", 3, "api_key already set");
        assert_eq!(
            e.to_string(),
            "Caddyfile:3 - Error during parsing: api_key already set"
        );
    }

    #[test]
    fn parse_error_without_line() {
        let e = ParseError::new("Caddyfile", 0, "missing api_key or api_secret");
        assert_eq!(
            e.to_string(),
            "Caddyfile - Error during parsing: missing api_key or api_secret"
        );
        let e = ParseError::new("", 0, "empty");
        assert_eq!(e.to_string(), "Error during parsing: empty");
    }

    #[test]
    fn parse_error_converts_transparently() {
        let e: HostError = ParseError::new("f", 1, "boom").into();
        assert_eq!(e.to_string(), "f:1 - Error during parsing: boom");
        assert!(e.is_expected());
    }

    #[test]
    fn duplicate_is_not_expected() {
        assert!(!HostError::DuplicateModule("dns.providers.x".into()).is_expected());
    }
}
