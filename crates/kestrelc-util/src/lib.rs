//! kestrelc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared primitives used by every stage of the Kestrel compiler: the
//! append-only symbol table that backs local/global/method name resolution,
//! and the diagnostic machinery (`Handler`, `Diagnostic`, `Span`) used to
//! report lexical, syntactic and semantic errors without unwinding.
//!
//! None of these types know anything about Kestrel grammar or bytecode;
//! they are the same kind of zero-cost bookkeeping types a compiler reaches
//! for regardless of source language.

pub mod diagnostic;
pub mod error;
pub mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level, Span};
pub use error::CompileFailed;
pub use symbol::{Symbol, SymbolTable};

pub use rustc_hash::{FxHashMap, FxHashSet};
