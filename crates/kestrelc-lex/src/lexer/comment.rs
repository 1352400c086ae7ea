//! Comment skipping (§4.1).
//!
//! `//` runs to (but does not consume) the next newline, so the newline
//! itself is still visible to the newline filter. `/* ... */` nests: an
//! internal depth counter tracks open/close pairs and only stops once it
//! returns to zero. An unterminated block comment silently stops at EOF
//! rather than reporting an error (§9).

use super::core::Lexer;

pub(super) fn skip_line<'s>(lexer: &mut Lexer<'s>) {
    debug_assert_eq!(lexer.peek(), b'/');
    lexer.advance(); // second '/'
    while lexer.peek() != b'\n' && !lexer.at_end() {
        lexer.advance();
    }
}

pub(super) fn skip_block<'s>(lexer: &mut Lexer<'s>) {
    debug_assert_eq!(lexer.peek(), b'*');
    lexer.advance(); // '*'
    let mut depth: u32 = 1;
    while depth > 0 && !lexer.at_end() {
        if lexer.peek() == b'/' && lexer.peek_next() == b'*' {
            lexer.advance();
            lexer.advance();
            depth += 1;
        } else if lexer.peek() == b'*' && lexer.peek_next() == b'/' {
            lexer.advance();
            lexer.advance();
            depth -= 1;
        } else {
            lexer.advance();
        }
    }
}
