//! kestrelc-lex - lexical analysis.
//!
//! Turns source bytes into the token stream the parser consumes, in two
//! layers:
//!
//! - [`lexer::Lexer`]: a single-pass raw scanner (§4.1) - punctuation,
//!   keywords, names, numbers, strings, comments, and the synthetic `Line`
//!   token for every newline.
//! - [`NewlineFilter`]: the only token producer the parser ever sees. It
//!   decides which of those raw `Line` tokens are actually significant
//!   (§4.2), so the grammar can be line-terminated without losing the
//!   ability to continue an expression across a line break.
//!
//! # Example
//!
//! ```
//! use kestrelc_lex::{NewlineFilter, TokenType};
//!
//! let mut tokens = NewlineFilter::new("1 +\n2");
//! assert_eq!(tokens.next_token().kind, TokenType::Number);
//! assert_eq!(tokens.next_token().kind, TokenType::Plus);
//! // the newline right after `+` is a continuation token, so it never
//! // reaches the parser as a `Line`.
//! assert_eq!(tokens.next_token().kind, TokenType::Number);
//! assert_eq!(tokens.next_token().kind, TokenType::Eof);
//! ```

mod lexer;
mod newline_filter;
mod token;

pub use lexer::Lexer;
pub use newline_filter::NewlineFilter;
pub use token::{keyword, Token, TokenType};
