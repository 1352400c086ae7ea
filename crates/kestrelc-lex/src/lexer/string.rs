//! String literal lexing (§4.1, §9).
//!
//! Opening `"` begins a string; bytes are consumed until the next `"`.
//! Escape sequences and embedded newlines are not handled - an unterminated
//! string silently runs to EOF rather than reporting an error (known
//! limitation, §9, carried over unchanged from the source system).

use super::core::Lexer;
use crate::token::{Token, TokenType};

pub(super) fn scan<'s>(lexer: &mut Lexer<'s>) -> Token {
    while lexer.peek() != b'"' && !lexer.at_end() {
        lexer.advance();
    }

    if lexer.at_end() {
        // Unterminated string: stop at EOF without reporting (§9).
        return lexer.token(TokenType::String);
    }

    lexer.advance(); // closing quote
    lexer.token(TokenType::String)
}
