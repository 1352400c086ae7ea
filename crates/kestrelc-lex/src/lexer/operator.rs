//! Punctuation and operator lexing (§4.1).
//!
//! A top-level dispatch on the already-consumed byte emits single-char
//! tokens directly; the four two-char operators (`==`, `!=`, `<=`, `>=`)
//! are formed by peeking and conditionally consuming a following `=`.

use super::core::Lexer;
use crate::token::{Token, TokenType};

pub(super) fn scan<'s>(lexer: &mut Lexer<'s>, first: u8) -> Token {
    let kind = match first {
        b'(' => TokenType::LeftParen,
        b')' => TokenType::RightParen,
        b'{' => TokenType::LeftBrace,
        b'}' => TokenType::RightBrace,
        b'[' => TokenType::LeftBracket,
        b']' => TokenType::RightBracket,
        b',' => TokenType::Comma,
        b'.' => TokenType::Dot,
        b'+' => TokenType::Plus,
        b'-' => TokenType::Minus,
        b'*' => TokenType::Star,
        b'/' => TokenType::Slash,
        b'%' => TokenType::Percent,
        b'|' => TokenType::Pipe,
        b'&' => TokenType::Amp,
        b'~' => TokenType::Tilde,
        b'!' => {
            if lexer.match_char(b'=') {
                TokenType::BangEqual
            } else {
                TokenType::Bang
            }
        }
        b'=' => {
            if lexer.match_char(b'=') {
                TokenType::EqualEqual
            } else {
                TokenType::Equal
            }
        }
        b'<' => {
            if lexer.match_char(b'=') {
                TokenType::LessEqual
            } else {
                TokenType::Less
            }
        }
        b'>' => {
            if lexer.match_char(b'=') {
                TokenType::GreaterEqual
            } else {
                TokenType::Greater
            }
        }
        _ => return lexer.error(),
    };
    lexer.token(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one(src: &str) -> Token {
        let mut lexer = Lexer::new(src);
        lexer.next_token()
    }

    #[test]
    fn single_char_punctuation() {
        for (src, expected) in [
            ("(", TokenType::LeftParen),
            (")", TokenType::RightParen),
            ("{", TokenType::LeftBrace),
            ("}", TokenType::RightBrace),
            (",", TokenType::Comma),
            (".", TokenType::Dot),
            ("+", TokenType::Plus),
            ("*", TokenType::Star),
            ("/", TokenType::Slash),
            ("%", TokenType::Percent),
            ("|", TokenType::Pipe),
            ("&", TokenType::Amp),
            ("~", TokenType::Tilde),
        ] {
            assert_eq!(lex_one(src).kind, expected, "token {src}");
        }
    }

    #[test]
    fn two_char_operators_require_the_trailing_equals() {
        for (src, expected) in [
            ("==", TokenType::EqualEqual),
            ("!=", TokenType::BangEqual),
            ("<=", TokenType::LessEqual),
            (">=", TokenType::GreaterEqual),
        ] {
            assert_eq!(lex_one(src).kind, expected, "token {src}");
        }
    }

    #[test]
    fn bare_comparison_operators() {
        assert_eq!(lex_one("<").kind, TokenType::Less);
        assert_eq!(lex_one(">").kind, TokenType::Greater);
        assert_eq!(lex_one("=").kind, TokenType::Equal);
        assert_eq!(lex_one("!").kind, TokenType::Bang);
    }
}
