//! Arity-mangled method selector construction (§4.6).
//!
//! A method selector is its base name followed by exactly one space per
//! argument: `foo.bar()`, `foo.bar(x)` and `foo.bar(x, y)` dispatch to the
//! distinct selectors `"bar"`, `"bar "` and `"bar  "`. Both call sites
//! (§4.6) and method-definition sites (§4.10) build the selector through
//! this one bounded builder so the two constructions can never drift
//! apart - that agreement is the dispatch scheme's integrity invariant.

/// Selectors are capped at this many bytes (§4.6, §9): the source system
/// left overflow unchecked, but per the re-architecture guidance in §9 we
/// give it an explicit, reported error instead of silent truncation or a
/// buffer overrun.
pub const MAX_SELECTOR_LEN: usize = 256;

#[derive(Debug, PartialEq, Eq)]
pub struct SelectorOverflow;

/// Builds a selector incrementally: start with a base name, then push one
/// space per argument/parameter in declaration or call order.
pub struct SelectorBuilder {
    text: String,
}

impl SelectorBuilder {
    pub fn new(base: &str) -> Self {
        SelectorBuilder {
            text: base.to_string(),
        }
    }

    /// Record one more argument/parameter, appending a single space.
    pub fn push_arity(&mut self) -> Result<(), SelectorOverflow> {
        if self.text.len() + 1 > MAX_SELECTOR_LEN {
            return Err(SelectorOverflow);
        }
        self.text.push(' ');
        Ok(())
    }

    pub fn arity(&self) -> usize {
        self.text.len() - self.text.trim_end_matches(' ').len()
    }

    pub fn finish(self) -> String {
        self.text
    }
}

/// Build the selector for a call or definition with `base` and `arity`
/// arguments/parameters in one step.
pub fn mangled(base: &str, arity: u8) -> Result<String, SelectorOverflow> {
    let mut builder = SelectorBuilder::new(base);
    for _ in 0..arity {
        builder.push_arity()?;
    }
    Ok(builder.finish())
}
