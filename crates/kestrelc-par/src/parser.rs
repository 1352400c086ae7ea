//! Parser driver (§4.3): tracks current/previous tokens over the
//! newline-filtered stream and exposes `peek`/`advance`/`match_token`/
//! `consume`.

use kestrelc_lex::{NewlineFilter, Token, TokenType};
use kestrelc_util::diagnostic::{Handler, Span};

pub struct Parser<'s> {
    source: &'s str,
    tokens: NewlineFilter<'s>,
    pub current: Token,
    pub previous: Token,
    pub handler: Handler,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        let tokens = NewlineFilter::new(source);
        // Neither slot points at a real token yet; `advance()` below fills
        // `current` with the first real token and leaves this sentinel in
        // `previous`, which is never reported against.
        let sentinel = Token::new(TokenType::Error, 0, 0, 1);
        let mut parser = Parser {
            source,
            tokens,
            current: sentinel,
            previous: sentinel,
            handler: Handler::new(),
        };
        parser.advance();
        parser
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// The type of the token not yet consumed.
    pub fn peek(&self) -> TokenType {
        self.current.kind
    }

    /// `current` becomes `previous`; pull the next filtered token into `current`.
    pub fn advance(&mut self) {
        self.previous = self.current;
        loop {
            self.current = self.tokens.next_token();
            if self.current.kind != TokenType::Error {
                break;
            }
            self.error_at_current("unexpected character");
        }
    }

    /// Advance iff `current` is of type `kind`. Returns whether it matched.
    pub fn match_token(&mut self, kind: TokenType) -> bool {
        if self.peek() != kind {
            return false;
        }
        self.advance();
        true
    }

    pub fn check(&self, kind: TokenType) -> bool {
        self.peek() == kind
    }

    /// Always advances. Reports `message` if the just-consumed token was
    /// not `kind` - advancing past a mismatch anyway is deliberate so a
    /// single bad token doesn't wedge the rest of the file (§4.3).
    pub fn consume(&mut self, kind: TokenType, message: &str) {
        if self.peek() == kind {
            self.advance();
            return;
        }
        self.error_at_current(message);
        self.advance();
    }

    pub fn lexeme(&self, token: Token) -> &'s str {
        token.text(self.source)
    }

    pub fn previous_lexeme(&self) -> &'s str {
        self.lexeme(self.previous)
    }

    pub fn current_lexeme(&self) -> &'s str {
        self.lexeme(self.current)
    }

    /// Report an error at `previous` - the usual site, since in Pratt
    /// parsing `previous` is the token whose rule was just invoked.
    pub fn error(&mut self, message: &str) {
        let span = Span::new(self.previous.line);
        let lexeme = self.previous_lexeme().to_string();
        self.handler.error(span, lexeme, message);
    }

    pub fn error_at_current(&mut self, message: &str) {
        let span = Span::new(self.current.line);
        let lexeme = self.current_lexeme().to_string();
        self.handler.error(span, lexeme, message);
    }

    pub fn had_lex_error(&self) -> bool {
        self.tokens.had_lex_error()
    }
}
