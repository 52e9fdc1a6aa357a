//! Directive text lexer
//!
//! - Tokens are separated by whitespace; `{` and `}` only delimit blocks when they
//!   stand alone, so placeholders like `{env.KEY}` stay a single token.
//! - `"..."` and `` `...` `` produce one quoted token; inside double quotes `\"` is
//!   a literal quote.
//! - `#` at the start of a token comments out the rest of the line.

use crate::error::ParseError;
use crate::token::Token;

/// Splits `input` into tokens attributed to `file`.
pub fn tokenize(file: &str, input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut buf_line = 1;
    let mut line = 1;
    let mut quote: Option<char> = None;
    let mut in_comment = false;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
                line += 1;
            }
            continue;
        }

        if let Some(q) = quote {
            if q == '"' && ch == '\\' && chars.peek() == Some(&'"') {
                chars.next();
                buf.push('"');
            } else if ch == q {
                tokens.push(Token::quoted(file, buf_line, std::mem::take(&mut buf)));
                quote = None;
            } else {
                if ch == '\n' {
                    line += 1;
                }
                buf.push(ch);
            }
            continue;
        }

        match ch {
            c if c.is_whitespace() => {
                if !buf.is_empty() {
                    tokens.push(Token::new(file, buf_line, std::mem::take(&mut buf)));
                }
                if c == '\n' {
                    line += 1;
                }
            }
            '"' | '`' if buf.is_empty() => {
                quote = Some(ch);
                buf_line = line;
            }
            '#' if buf.is_empty() => in_comment = true,
            _ => {
                if buf.is_empty() {
                    buf_line = line;
                }
                buf.push(ch);
            }
        }
    }

    if quote.is_some() {
        return Err(ParseError::new(file, buf_line, "unterminated quoted string"));
    }
    if !buf.is_empty() {
        tokens.push(Token::new(file, buf_line, buf));
    }

    log::trace!("[{file}] lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// Verifies every `{` has a matching `}`.
pub fn check_balanced(tokens: &[Token]) -> Result<(), ParseError> {
    let mut open: Vec<&Token> = Vec::new();
    for token in tokens {
        if token.is_block_open() {
            open.push(token);
        } else if token.is_block_close() && open.pop().is_none() {
            return Err(ParseError::new(
                &token.file,
                token.line,
                "unexpected '}' without matching '{'",
            ));
        }
    }
    match open.pop() {
        Some(token) => Err(ParseError::new(
            &token.file,
            token.line,
            "unclosed '{': missing '}'",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn splits_words_and_lines() {
        let tokens = tokenize("test", "spaceship key123 secret456").unwrap();
        assert_eq!(texts(&tokens), ["spaceship", "key123", "secret456"]);
        assert!(tokens.iter().all(|t| t.line == 1 && t.file == "test"));
    }

    #[test]
    fn block_braces_are_tokens() {
        let input = "spaceship {\n\tapi_key a\n}";
        let tokens = tokenize("test", input).unwrap();
        assert_eq!(texts(&tokens), ["spaceship", "{", "api_key", "a", "}"]);
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, [1, 1, 2, 2, 3]);
    }

    #[test]
    fn placeholder_stays_one_token() {
        let tokens = tokenize("test", "api_key {env.SPACESHIP_KEY}").unwrap();
        assert_eq!(texts(&tokens), ["api_key", "{env.SPACESHIP_KEY}"]);
        assert!(!tokens[1].is_block_open());
    }

    #[test]
    fn quoted_strings() {
        let tokens = tokenize("test", r#"api_secret "has space \"q\"" `raw`"#).unwrap();
        assert_eq!(texts(&tokens), ["api_secret", r#"has space "q""#, "raw"]);
        assert!(tokens[1].was_quoted);
        assert!(tokens[2].was_quoted);
    }

    #[test]
    fn empty_quoted_string_is_a_token() {
        let tokens = tokenize("test", r#"api_key """#).unwrap();
        assert_eq!(texts(&tokens), ["api_key", ""]);
    }

    #[test]
    fn multi_line_quote_keeps_start_line() {
        let tokens = tokenize("test", "a \"x\ny\" b\nc").unwrap();
        assert_eq!(tokens[1].line, 1);
        assert_eq!(tokens[2].line, 2);
        assert_eq!(tokens[3].line, 3);
    }

    #[test]
    fn comments_skipped() {
        let input = "# header\nspaceship k s # trailing\n";
        let tokens = tokenize("test", input).unwrap();
        assert_eq!(texts(&tokens), ["spaceship", "k", "s"]);
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn hash_inside_word_is_literal() {
        let tokens = tokenize("test", "api_secret ab#cd").unwrap();
        assert_eq!(texts(&tokens), ["api_secret", "ab#cd"]);
    }

    #[test]
    fn unterminated_quote() {
        let err = tokenize("test", "a\n\"open").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("unterminated"));
    }

    #[test]
    fn balance_check() {
        let ok = tokenize("t", "a {\n b {\n }\n}").unwrap();
        assert!(check_balanced(&ok).is_ok());

        let unclosed = tokenize("t", "a {\n b c").unwrap();
        assert_eq!(check_balanced(&unclosed).unwrap_err().line, 1);

        let stray = tokenize("t", "a\n}").unwrap();
        assert_eq!(check_balanced(&stray).unwrap_err().line, 2);
    }
}
