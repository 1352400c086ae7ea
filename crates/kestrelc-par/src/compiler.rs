//! Scope frames and the emitter (§2 "Emitter & scope", §4.12).
//!
//! The specification describes nested `Compiler` instances chained to
//! their enclosing compiler via a `parent` link, so that `this`-legality
//! can be searched upward. §9's re-architecture guidance says to model
//! that as "a stack of frames with explicit ownership instead of raw
//! back-pointers", searched top-down - that's what [`Compiler`] does:
//! `frames` is exactly the parent chain at any point during a depth-first
//! compile, and compiling a nested function/method body is pushing a
//! `Frame`, recursing, then popping it.

use std::rc::Rc;

use kestrelc_lex::TokenType;
use kestrelc_objects::{FunctionObject, Opcode, Value, Vm, MAX_CALL_ARITY};
use kestrelc_util::SymbolTable;

use crate::parser::Parser;
use crate::selector::{mangled, SelectorOverflow};

/// Slot 0 in every method/function frame is reserved for the receiver,
/// registered under this name so it can never collide with a real local.
pub const RECEIVER_NAME: &str = "(this)";

/// One compiling scope: either the top-level script (no parent - `frames`
/// has exactly one entry) or a function/method body nested under it.
///
/// `function` is `Rc`-wrapped from the moment the frame is pushed rather
/// than only once its body is finished, so the root frame's function can
/// be registered with the VM's root set (`pin`) for the whole of
/// compilation (§5) instead of only after the fact. It stays uniquely
/// owned until [`Compiler::pop_frame`] hands the `Rc` out, so mutating it
/// in place via `Rc::get_mut` is sound throughout.
pub struct Frame {
    pub function: Rc<FunctionObject>,
    pub locals: SymbolTable,
    pub is_method: bool,
    pub is_function: bool,
}

impl Frame {
    fn new(name: Option<Box<str>>, is_method: bool, is_function: bool) -> Self {
        let mut locals = SymbolTable::new();
        if is_method || is_function {
            locals.add(RECEIVER_NAME).expect("fresh table");
        }
        Frame {
            function: Rc::new(FunctionObject::new(name)),
            locals,
            is_method,
            is_function,
        }
    }

    /// The function is uniquely owned until the frame is popped.
    fn function_mut(&mut self) -> &mut FunctionObject {
        Rc::get_mut(&mut self.function).expect("frame's function has no other owner while compiling")
    }
}

/// Borrows the caller's `Vm` for the duration of one `compile()` call: the
/// global and method tables it owns must survive across separate
/// compiles (e.g. successive REPL lines), so they live in the caller, not
/// in the `Compiler` (§6).
pub struct Compiler<'s, 'vm> {
    pub parser: Parser<'s>,
    pub vm: &'vm mut Vm,
    frames: Vec<Frame>,
}

impl<'s, 'vm> Compiler<'s, 'vm> {
    pub fn new(source: &'s str, vm: &'vm mut Vm) -> Self {
        Compiler {
            parser: Parser::new(source),
            vm,
            frames: vec![Frame::new(None, false, false)],
        }
    }

    pub fn current(&mut self) -> &mut Frame {
        self.frames.last_mut().expect("frames is never empty")
    }

    /// `true` while compiling the top-level script body.
    pub fn at_top_level(&self) -> bool {
        self.frames.len() == 1
    }

    /// Push a new frame for a nested function/method body.
    pub fn push_frame(&mut self, name: Option<Box<str>>, is_method: bool, is_function: bool) {
        self.frames.push(Frame::new(name, is_method, is_function));
    }

    /// Pop the innermost frame, after its body (including `END`) has been
    /// emitted, returning its finished function object.
    pub fn pop_frame(&mut self) -> Rc<FunctionObject> {
        self.frames.pop().expect("push/pop are balanced").function
    }

    /// Walk frames innermost-first looking for one marked `is_method`, the
    /// legality test for `this` (§4.7).
    pub fn this_is_legal(&self) -> bool {
        self.frames.iter().rev().any(|f| f.is_method)
    }

    // ---- bytecode emission ----

    pub fn emit_byte(&mut self, byte: u8) -> usize {
        self.current().function_mut().write_byte(byte)
    }

    pub fn emit_op(&mut self, op: Opcode) -> usize {
        self.emit_byte(op.as_byte())
    }

    pub fn emit_op_operand(&mut self, op: Opcode, operand: u8) {
        self.emit_op(op);
        self.emit_byte(operand);
    }

    /// Emit `op` followed by a placeholder byte, returning the placeholder's
    /// offset for later patching by [`Self::patch_jump`].
    pub fn emit_jump(&mut self, op: Opcode) -> usize {
        self.emit_op(op);
        self.emit_byte(0)
    }

    /// Patch the placeholder at `offset` with the forward distance to the
    /// current end of the code stream. Reports an error (rather than
    /// corrupting the bytecode) if the jump doesn't fit in a byte.
    pub fn patch_jump(&mut self, offset: usize) {
        if self.current().function_mut().patch_jump(offset).is_none() {
            self.parser.error("jump distance too large to encode");
        }
    }

    /// Intern `value` into the current frame's constant pool and emit a
    /// `CONSTANT` instruction for it.
    pub fn emit_constant(&mut self, value: Value) {
        match self.current().function_mut().add_constant(value) {
            Some(idx) => self.emit_op_operand(Opcode::Constant, idx),
            None => self.parser.error("too many constants in one function"),
        }
    }

    /// Intern `value` into the current frame's constant pool *without*
    /// emitting a `CONSTANT` push - used by `METHOD`, whose own const-index
    /// operand names the constant directly (§4.10).
    pub fn intern_constant(&mut self, value: Value) -> Option<u8> {
        let idx = self.current().function_mut().add_constant(value);
        if idx.is_none() {
            self.parser.error("too many constants in one function");
        }
        idx
    }

    // ---- method selectors (§4.6) ----

    /// Resolve a call/definition selector, reporting an error instead of
    /// silently truncating on overflow (§9).
    pub fn selector(&mut self, base: &str, arity: u8) -> Option<kestrelc_util::Symbol> {
        match mangled(base, arity) {
            Ok(sel) => Some(self.vm.methods.ensure(&sel)),
            Err(SelectorOverflow) => {
                self.parser.error("method selector too long");
                None
            }
        }
    }

    /// Emit a `CALL_<arity>` for the selector `base`/`arity` (§4.5/§4.6): the
    /// receiver and arguments are already on the stack in call order.
    pub fn emit_call(&mut self, base: &str, arity: u8) {
        if arity > MAX_CALL_ARITY {
            self.parser.error("too many arguments in call");
            return;
        }
        let Some(sym) = self.selector(base, arity) else {
            return;
        };
        let sel = sym.as_u32();
        if sel > u8::MAX as u32 {
            self.parser.error("too many distinct method selectors");
            return;
        }
        self.emit_op(Opcode::Call(arity));
        self.emit_byte(sel as u8);
    }

    // ---- variables (§4.7, §4.12) ----

    /// Search the *current* frame's locals only - enclosing non-top-level
    /// scopes are not searched (§4.7: no closures in this version).
    pub fn resolve_local(&mut self, name: &str) -> Option<u32> {
        self.current().locals.find(name).map(|s| s.as_u32())
    }

    pub fn resolve_global(&mut self, name: &str) -> Option<u32> {
        self.vm.globals.find(name).map(|s| s.as_u32())
    }

    /// Consume a `NAME`, declaring it in the current scope (locals if
    /// nested, `vm.globals` at top level). Reports a duplicate-variable
    /// error and returns `None` on redefinition.
    pub fn declare_variable(&mut self) -> Option<u32> {
        self.parser.consume(TokenType::Name, "expect variable name");
        let name = self.parser.previous_lexeme().to_string();
        let symbol = if self.at_top_level() {
            self.vm.globals.add(&name)
        } else {
            self.current().locals.add(&name)
        };
        match symbol {
            Some(sym) => Some(sym.as_u32()),
            None => {
                self.parser.error("variable is already defined");
                None
            }
        }
    }

    /// Finish defining the variable declared with symbol `sym`: globals
    /// store the initializer that's already on the stack; locals rely on
    /// the initializer already occupying the local's slot, and emit a
    /// `DUP` to cancel the `POP` the enclosing block will emit for this
    /// statement's value (§4.12's documented DUP idiom).
    pub fn define_variable(&mut self, sym: u32) {
        if self.at_top_level() {
            self.emit_op_operand(Opcode::StoreGlobal, sym as u8);
        } else {
            self.emit_op(Opcode::Dup);
        }
    }
}
