/// A single lexical token of directive text.
///
/// Tokens are produced once by [`tokenize`](crate::tokenize) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Source name the token was read from.
    pub file: String,
    /// 1-based line the token starts on.
    pub line: usize,
    /// Token text with quotes and escapes removed.
    pub text: String,
    /// Whether the text came from a quoted string.
    pub was_quoted: bool,
}

impl Token {
    pub fn new(file: impl Into<String>, line: usize, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            text: text.into(),
            was_quoted: false,
        }
    }

    pub fn quoted(file: impl Into<String>, line: usize, text: impl Into<String>) -> Self {
        Self {
            was_quoted: true,
            ..Self::new(file, line, text)
        }
    }

    /// An unquoted `{`.
    pub fn is_block_open(&self) -> bool {
        !self.was_quoted && self.text == "{"
    }

    /// An unquoted `}`.
    pub fn is_block_close(&self) -> bool {
        !self.was_quoted && self.text == "}"
    }

    /// Line the token ends on; differs from `line` for multi-line quoted text.
    pub fn end_line(&self) -> usize {
        self.line + self.text.matches('\n').count()
    }

    /// Whether `next` starts on a later line (or another file) than `self` ends.
    pub fn is_followed_on_new_line(&self, next: &Token) -> bool {
        self.file != next.file || next.line > self.end_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_brace_is_not_a_block() {
        assert!(Token::new("f", 1, "{").is_block_open());
        assert!(!Token::quoted("f", 1, "{").is_block_open());
        assert!(Token::new("f", 1, "}").is_block_close());
    }

    #[test]
    fn multi_line_text_shifts_end_line() {
        let a = Token::quoted("f", 2, "one\ntwo");
        assert_eq!(a.end_line(), 3);
        assert!(!a.is_followed_on_new_line(&Token::new("f", 3, "x")));
        assert!(a.is_followed_on_new_line(&Token::new("f", 4, "x")));
        assert!(a.is_followed_on_new_line(&Token::new("g", 3, "x")));
    }
}
