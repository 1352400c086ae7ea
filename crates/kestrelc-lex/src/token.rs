//! Token types and the raw `Token` record.
//!
//! Tokens own nothing: they index into the caller-owned source buffer via
//! `(start, end)` byte offsets, plus the one-based line the token started
//! on. The text itself is recovered on demand by slicing `source`.

/// Tag for every kind of raw token the lexer can produce.
///
/// `Line` is the synthetic newline token whose significance is decided by
/// [`crate::NewlineFilter`], not the lexer itself. `Error` carries no
/// payload; the parser reports it the next time it is consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Single-char punctuation.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Dot,
    Minus,
    Plus,
    Slash,
    Star,
    Percent,
    Pipe,
    Amp,
    Bang,
    Tilde,
    Equal,
    Less,
    Greater,

    // Two-char operators.
    BangEqual,
    EqualEqual,
    LessEqual,
    GreaterEqual,

    // Keywords.
    Class,
    Else,
    False,
    Fn,
    If,
    Is,
    Null,
    Static,
    This,
    True,
    Var,

    // Literals.
    Name,
    Number,
    String,

    /// A significant newline, surfaced only by the newline filter.
    Line,

    Error,
    Eof,
}

impl TokenType {
    /// `true` for the keyword set that cannot terminate an expression, and
    /// therefore counts as a continuation token for the newline filter
    /// (§4.2): a newline right after one of these is always swallowed.
    pub fn is_non_terminating_keyword(self) -> bool {
        matches!(
            self,
            TokenType::Class
                | TokenType::Else
                | TokenType::If
                | TokenType::Is
                | TokenType::Static
                | TokenType::Var
        )
    }

    /// `true` for openers and separators that always expect more input.
    pub fn is_opener_or_separator(self) -> bool {
        matches!(
            self,
            TokenType::LeftParen
                | TokenType::LeftBracket
                | TokenType::LeftBrace
                | TokenType::Dot
                | TokenType::Comma
        )
    }

    /// `true` for the binary/unary operator set, including `!` and `-`
    /// which the grammar tolerates in both prefix and infix position.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenType::Star
                | TokenType::Slash
                | TokenType::Percent
                | TokenType::Plus
                | TokenType::Minus
                | TokenType::Pipe
                | TokenType::Amp
                | TokenType::Bang
                | TokenType::Equal
                | TokenType::Less
                | TokenType::Greater
                | TokenType::LessEqual
                | TokenType::GreaterEqual
                | TokenType::EqualEqual
                | TokenType::BangEqual
        )
    }
}

/// A single lexed token: a type tag plus a byte range and line into the
/// source buffer it was lexed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub start: u32,
    pub end: u32,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenType, start: u32, end: u32, line: u32) -> Self {
        Token {
            kind,
            start,
            end,
            line,
        }
    }

    /// Recover the lexeme text by slicing `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not the same buffer this token was lexed from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start as usize..self.end as usize]
    }
}

/// Reserved-word table consulted after an identifier is scanned; rewrites
/// the token type when the slice matches exactly.
pub fn keyword(text: &str) -> Option<TokenType> {
    Some(match text {
        "class" => TokenType::Class,
        "else" => TokenType::Else,
        "false" => TokenType::False,
        "fn" => TokenType::Fn,
        "if" => TokenType::If,
        "is" => TokenType::Is,
        "null" => TokenType::Null,
        "static" => TokenType::Static,
        "this" => TokenType::This,
        "true" => TokenType::True,
        "var" => TokenType::Var,
        _ => return None,
    })
}
