//! Identifier and keyword lexing: `[A-Za-z_][A-Za-z_0-9]*`, rewritten to a
//! keyword token type when the slice matches the reserved-word table
//! exactly.

use super::core::{is_alnum, Lexer};
use crate::token::{keyword, Token, TokenType};

pub(super) fn scan<'s>(lexer: &mut Lexer<'s>) -> Token {
    while is_alnum(lexer.peek()) {
        lexer.advance();
    }

    let text = &lexer.bytes()[lexer.token_start_offset()..lexer.current_offset()];
    let text = std::str::from_utf8(text).expect("source is valid utf-8, identifiers are ascii");

    let kind = keyword(text).unwrap_or(TokenType::Name);
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
    fn plain_identifier() {
        let tok = lex_one("foo_bar1");
        assert_eq!(tok.kind, TokenType::Name);
    }

    #[test]
    fn underscore_only_identifier() {
        let tok = lex_one("_");
        assert_eq!(tok.kind, TokenType::Name);
    }

    #[test]
    fn keywords_rewrite_the_token_type() {
        for (word, expected) in [
            ("class", TokenType::Class),
            ("else", TokenType::Else),
            ("false", TokenType::False),
            ("fn", TokenType::Fn),
            ("if", TokenType::If),
            ("is", TokenType::Is),
            ("null", TokenType::Null),
            ("static", TokenType::Static),
            ("this", TokenType::This),
            ("true", TokenType::True),
            ("var", TokenType::Var),
        ] {
            assert_eq!(lex_one(word).kind, expected, "keyword {word}");
        }
    }

    #[test]
    fn keyword_prefix_is_still_an_identifier() {
        assert_eq!(lex_one("classy").kind, TokenType::Name);
    }
}
