//! Number literal lexing (§4.1).
//!
//! A run of digits, optionally followed by `.` *iff* the next character is
//! also a digit - so a method call on an integer literal like `3.foo`
//! lexes as dot-access rather than a malformed float. Unary minus fuses
//! into the literal when it is immediately followed by a digit; that fusion
//! happens in [`super::core::Lexer::next_token`], which only calls this
//! scanner once the leading `-` (if any) has already been consumed, so the
//! digit run picked up here starts wherever the cursor is and the `-` is
//! still included in the final slice via `token_start`.
//!
//! Parsing the slice into an `f64` happens at the parser's literal site
//! (§4.8), not here: the lexer only needs to delimit the lexeme.

use super::core::{is_digit, Lexer};
use crate::token::{Token, TokenType};

pub(super) fn scan<'s>(lexer: &mut Lexer<'s>) -> Token {
    while is_digit(lexer.peek()) {
        lexer.advance();
    }

    if lexer.peek() == b'.' && is_digit(lexer.peek_next()) {
        lexer.advance(); // the '.'
        while is_digit(lexer.peek()) {
            lexer.advance();
        }
    }

    lexer.token(TokenType::Number)
}
