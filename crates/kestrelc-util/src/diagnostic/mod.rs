//! Diagnostic reporting - sticky-error handler for the compiler front end.
//!
//! Kestrel never unwinds on a lexical, syntactic or semantic error: a
//! `Handler` simply records that *something* went wrong and keeps going, so
//! one `compile()` call can surface every error in a file rather than
//! stopping at the first one. The entry point consults
//! [`Handler::has_errors`] at the very end and withholds the compiled
//! function on any failure.
//!
//! # Example
//!
//! ```
//! use kestrelc_util::diagnostic::{Handler, Span};
//!
//! let mut handler = Handler::new();
//! handler.error(Span::new(3), "x", "undefined variable");
//! assert!(handler.has_errors());
//! ```

use std::fmt;

/// Severity of a reported diagnostic.
///
/// The compiler itself only ever emits [`Level::Error`] today (see §9 of the
/// design notes: there is no recovery, so there is nothing a `Warning` would
/// usefully describe yet). The level still exists as a first-class concept
/// so a future pass (e.g. "unused variable") has somewhere to report without
/// every call site needing to agree on a new ad-hoc shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "Error"),
            Level::Warning => write!(f, "Warning"),
        }
    }
}

/// A source location truncated to a line number.
///
/// Per the non-goals, Kestrel does not track column offsets or byte spans
/// for diagnostics beyond the line a token started on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    pub line: u32,
}

impl Span {
    pub const fn new(line: u32) -> Self {
        Span { line }
    }
}

/// One reported error or warning.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub span: Span,
    /// The source text of the token the error was reported against.
    pub lexeme: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Line {}] {} on '{}': {}",
            self.span.line, self.level, self.lexeme, self.message
        )
    }
}

/// Collects diagnostics during a single compilation and remembers, via a
/// sticky flag, whether any error-level diagnostic was ever reported.
///
/// The flag is sticky on purpose: once `hasError` is true it must stay true
/// for the rest of the compile, even if every statement after the bad one
/// parses cleanly. The entry point is the only thing that ever resets it
/// (by constructing a fresh `Handler`).
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
    has_error: bool,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            has_error: false,
        }
    }

    /// Report an error at `span` against the given lexeme, printing
    /// `[Line L] Error on 'LEXEME': MESSAGE` to stderr immediately.
    pub fn error(&mut self, span: Span, lexeme: impl Into<String>, message: impl Into<String>) {
        self.emit(Level::Error, span, lexeme.into(), message.into());
    }

    fn emit(&mut self, level: Level, span: Span, lexeme: String, message: String) {
        let diag = Diagnostic {
            level,
            span,
            lexeme,
            message,
        };
        eprintln!("{diag}");
        log::debug!("{diag}");
        if level == Level::Error {
            self.has_error = true;
        }
        self.diagnostics.push(diag);
    }

    pub fn has_errors(&self) -> bool {
        self.has_error
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_handler_has_no_errors() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn error_sets_sticky_flag() {
        let mut handler = Handler::new();
        handler.error(Span::new(1), "+", "no prefix parser");
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn flag_stays_sticky_across_further_calls() {
        let mut handler = Handler::new();
        handler.error(Span::new(1), "a", "undefined variable");
        handler.error(Span::new(5), "b", "undefined variable");
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn display_matches_diagnostic_format() {
        let diag = Diagnostic {
            level: Level::Error,
            span: Span::new(7),
            lexeme: "this".into(),
            message: "cannot use 'this' outside of a method".into(),
        };
        assert_eq!(
            diag.to_string(),
            "[Line 7] Error on 'this': cannot use 'this' outside of a method"
        );
    }
}
