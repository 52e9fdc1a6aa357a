//! Token dispenser
//!
//! A cursor over a token stream that understands the line-oriented directive
//! grammar: arguments must share the line of their directive, and a block
//! opened with `{` at the end of a line holds one sub-directive per line.

use crate::error::ParseError;
use crate::lexer::{check_balanced, tokenize};
use crate::token::Token;

/// Walks a token stream one directive at a time.
///
/// The cursor starts before the first token; call [`next`](Self::next) to
/// land on the directive name.
///
/// ```rust
/// use dns_spaceship_host::Dispenser;
///
/// let mut d = Dispenser::parse("Caddyfile", "spaceship {\n api_key abc\n}").unwrap();
/// assert!(d.next());
/// assert_eq!(d.val(), "spaceship");
/// assert!(!d.next_arg());
///
/// let nesting = d.nesting();
/// assert!(d.next_block(nesting));
/// assert_eq!(d.val(), "api_key");
/// assert!(d.next_arg());
/// assert_eq!(d.val(), "abc");
/// assert!(!d.next_block(nesting));
/// ```
#[derive(Debug, Clone)]
pub struct Dispenser {
    /// Source name used for errors when there is no token to point at.
    file: String,
    tokens: Vec<Token>,
    /// Index of the current token plus one; zero means "before the first token".
    pos: usize,
    nesting: usize,
}

impl Dispenser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            file: tokens.first().map(|t| t.file.clone()).unwrap_or_default(),
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    /// Lexes `input` and checks brace balance before dispensing.
    pub fn parse(file: &str, input: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(file, input)?;
        check_balanced(&tokens)?;
        Ok(Self {
            file: file.to_string(),
            ..Self::new(tokens)
        })
    }

    /// Advances to the next token regardless of line boundaries.
    pub fn next(&mut self) -> bool {
        if self.pos < self.tokens.len() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advances to the next token only if it is an argument on the current line.
    ///
    /// A block opener is not an argument; the cursor stays put when one follows.
    pub fn next_arg(&mut self) -> bool {
        if !self.next_on_same_line() {
            return false;
        }
        if self.current().is_some_and(Token::is_block_open) {
            self.pos -= 1;
            return false;
        }
        true
    }

    /// Current block depth.
    pub fn nesting(&self) -> usize {
        self.nesting
    }

    /// Moves to the next sub-directive of the block opened at `initial_nesting`.
    ///
    /// On the first call this consumes the opening `{` if one ends the current
    /// line. Returns `false` when there is no block, the block is empty, or its
    /// closing `}` has been reached.
    pub fn next_block(&mut self, initial_nesting: usize) -> bool {
        if self.nesting > initial_nesting {
            if !self.next() {
                return false;
            }
            if self.current().is_some_and(Token::is_block_close) {
                self.nesting -= 1;
            } else if self.current().is_some_and(Token::is_block_open) {
                self.nesting += 1;
            }
            return self.nesting > initial_nesting;
        }

        if !self.next_on_same_line() {
            return false;
        }
        if !self.current().is_some_and(Token::is_block_open) {
            self.pos -= 1;
            return false;
        }
        if !self.next() || self.current().is_some_and(Token::is_block_close) {
            return false;
        }
        self.nesting += 1;
        true
    }

    /// Text of the current token, or `""` before the first token.
    pub fn val(&self) -> &str {
        self.current().map_or("", |t| t.text.as_str())
    }

    /// The current token.
    pub fn token(&self) -> Option<&Token> {
        self.current()
    }

    /// Error located at the current token.
    pub fn err(&self, message: impl Into<String>) -> ParseError {
        let located = self.current().or_else(|| self.tokens.first());
        match located {
            Some(t) => ParseError::new(&t.file, t.line, message),
            None => ParseError::new(&self.file, 0, message),
        }
    }

    /// Error for a wrong number of arguments after the current token.
    pub fn arg_err(&self) -> ParseError {
        if self.current().is_some_and(Token::is_block_open) {
            return self.err("unexpected token '{', expecting argument");
        }
        self.err(format!(
            "wrong argument count or unexpected line ending after '{}'",
            self.val()
        ))
    }

    fn current(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    fn next_on_same_line(&mut self) -> bool {
        if self.pos == 0 {
            return self.next();
        }
        let same_line = match (self.current(), self.tokens.get(self.pos)) {
            (Some(curr), Some(next)) => !curr.is_followed_on_new_line(next),
            _ => false,
        };
        if same_line {
            self.pos += 1;
        }
        same_line
    }
}
