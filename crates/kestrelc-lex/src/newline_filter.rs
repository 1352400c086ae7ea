//! Newline-significance filter (§4.2).
//!
//! Wraps the raw [`Lexer`] and is the only token producer the parser ever
//! sees. It decides which raw `Line` tokens matter: a newline after a
//! "continuation" token - an opener, a separator, a binary operator, or a
//! keyword that cannot terminate an expression - is never significant,
//! and runs of blank lines collapse to at most one `Line` token.

use crate::lexer::Lexer;
use crate::token::{Token, TokenType};

/// `true` for tokens after which a following newline is swallowed rather
/// than surfaced as a statement terminator.
fn is_continuation(kind: TokenType) -> bool {
    kind.is_opener_or_separator() || kind.is_operator() || kind.is_non_terminating_keyword()
}

pub struct NewlineFilter<'s> {
    lexer: Lexer<'s>,
    /// Governs whether the *next* raw `Line` is swallowed. Set to `true`
    /// right after emitting a `Line` (so consecutive newlines collapse)
    /// and after any continuation token.
    skip_newlines: bool,
}

impl<'s> NewlineFilter<'s> {
    pub fn new(source: &'s str) -> Self {
        NewlineFilter {
            lexer: Lexer::new(source),
            // A leading blank line before the first real token is not a
            // statement terminator for anything.
            skip_newlines: true,
        }
    }

    pub fn source(&self) -> &'s str {
        self.lexer.source()
    }

    pub fn had_lex_error(&self) -> bool {
        self.lexer.had_error
    }

    /// Pull the next token the parser should see.
    pub fn next_token(&mut self) -> Token {
        loop {
            let raw = self.lexer.next_token();

            if raw.kind == TokenType::Line {
                let skip = self.skip_newlines;
                self.skip_newlines = true;
                if skip {
                    continue;
                }
                return raw;
            }

            self.skip_newlines = is_continuation(raw.kind);
            return raw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenType> {
        let mut filter = NewlineFilter::new(src);
        let mut out = Vec::new();
        loop {
            let tok = filter.next_token();
            if tok.kind == TokenType::Eof {
                break;
            }
            out.push(tok.kind);
        }
        out
    }

    #[test]
    fn newline_after_continuation_operator_is_swallowed() {
        // "1 +\n2" should read as a single expression: no Line token.
        assert_eq!(
            kinds("1 +\n2"),
            vec![TokenType::Number, TokenType::Plus, TokenType::Number]
        );
    }

    #[test]
    fn plain_newline_between_statements_is_significant() {
        assert_eq!(
            kinds("1\n2"),
            vec![TokenType::Number, TokenType::Line, TokenType::Number]
        );
    }

    #[test]
    fn consecutive_blank_lines_collapse_to_one() {
        assert_eq!(
            kinds("1\n\n\n2"),
            vec![TokenType::Number, TokenType::Line, TokenType::Number]
        );
    }

    #[test]
    fn newline_after_opener_is_swallowed() {
        assert_eq!(
            kinds("(\n1)"),
            vec![
                TokenType::LeftParen,
                TokenType::Number,
                TokenType::RightParen
            ]
        );
    }

    #[test]
    fn newline_after_non_terminating_keyword_is_swallowed() {
        assert_eq!(
            kinds("if\n(true)"),
            vec![
                TokenType::If,
                TokenType::LeftParen,
                TokenType::True,
                TokenType::RightParen
            ]
        );
    }

    #[test]
    fn leading_blank_lines_produce_no_leading_line_token() {
        assert_eq!(kinds("\n\nx"), vec![TokenType::Name]);
    }
}
