//! Symbol table - append-only, insertion-ordered name -> index mapping.
//!
//! Kestrel resolves three independent kinds of names through the same
//! primitive: locals within a compiling frame, globals at the VM level, and
//! method selectors in the VM-wide method table. Each of those owns its own
//! [`SymbolTable`] instance (locals live on the per-frame compiler scope;
//! globals and methods live on the VM) rather than sharing one global
//! interner, since a local named `x` in one function must not collide with a
//! global named `x`.
//!
//! # Example
//!
//! ```
//! use kestrelc_util::SymbolTable;
//!
//! let mut locals = SymbolTable::new();
//! let a = locals.add("a").unwrap();
//! assert_eq!(locals.find("a"), Some(a));
//! assert_eq!(locals.add("a"), None); // duplicate
//! assert_eq!(locals.ensure("b"), locals.ensure("b"));
//! ```

use std::fmt;

use crate::FxHashMap;

/// A dense index into a [`SymbolTable`].
///
/// Slot 0 in a locals table is reserved for the receiver in any method or
/// function frame; this type carries no such meaning itself, it is just a
/// stable handle into the table that produced it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Wrap a raw index. Only meaningful relative to the table that produced it.
    pub const fn from_raw(index: u32) -> Self {
        Symbol(index)
    }

    /// The raw index, e.g. for use as a `LOAD_LOCAL`/`LOAD_GLOBAL` operand.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Append-only, insertion-ordered table mapping names to dense [`Symbol`]s.
///
/// This is the one primitive shared by local-variable slots, the VM's global
/// variable table, and the VM's method-selector table. It never removes or
/// reorders an entry once assigned: a `Symbol` returned by `add`/`ensure`
/// stays valid (and keeps pointing at the same name) for the table's whole
/// lifetime.
#[derive(Default)]
pub struct SymbolTable {
    names: Vec<Box<str>>,
    index: FxHashMap<Box<str>, Symbol>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Number of names currently registered.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up an existing name. Returns `None` if it has never been added.
    pub fn find(&self, name: &str) -> Option<Symbol> {
        self.index.get(name).copied()
    }

    /// Register a new name, returning its fresh index.
    ///
    /// Returns `None` if the name is already present (the Wren-derived
    /// convention uses a negative sentinel for this; we use `Option` since
    /// there is no unsigned "index" that would also need a bogus negative
    /// value).
    pub fn add(&mut self, name: &str) -> Option<Symbol> {
        if self.index.contains_key(name) {
            return None;
        }
        let symbol = Symbol(self.names.len() as u32);
        self.names.push(name.into());
        self.index.insert(name.into(), symbol);
        Some(symbol)
    }

    /// Look up `name`, registering it if it isn't already present.
    pub fn ensure(&mut self, name: &str) -> Symbol {
        if let Some(symbol) = self.find(name) {
            return symbol;
        }
        // `add` cannot return None here: we just checked `find` above.
        self.add(name).expect("name was just confirmed absent")
    }

    /// The name stored at `symbol`, if `symbol` came from this table.
    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.names.get(symbol.0 as usize).map(|s| s.as_ref())
    }

    /// Iterate `(Symbol, name)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (Symbol(i as u32), name.as_ref()))
    }
}
