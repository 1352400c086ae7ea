//! kestrelc-par - Single-pass Parser and Bytecode Emitter
//!
//! Lexes, parses and emits bytecode for one source file in a single
//! depth-first walk, with no intermediate AST (§1, §2): a Pratt parser
//! ([`rules`], [`expr`]) drives straight into the emitter ([`compiler`]),
//! and statements/class bodies ([`stmt`]) call back into both as they go.
//!
//! [`compile`] is the one entry point the rest of the toolchain uses.

mod compiler;
mod expr;
mod rules;
mod selector;
mod stmt;

pub mod parser;

use std::rc::Rc;

use kestrelc_lex::TokenType;
use kestrelc_objects::{FunctionObject, Opcode, Vm};
use kestrelc_util::CompileFailed;

pub use compiler::Compiler;
pub use parser::Parser;
pub use selector::{mangled, SelectorBuilder, SelectorOverflow, MAX_SELECTOR_LEN};

/// Compile `source` against `vm`'s global/method tables, producing the
/// top-level script body as a function object (§6).
///
/// `vm` is threaded through rather than created here because its symbol
/// tables must survive across separate `compile()` calls (e.g. a REPL
/// compiling one line at a time against accumulated globals). On failure
/// every error already went to stderr as it was found (`Handler` never
/// unwinds); the `Err` only carries the count.
pub fn compile(vm: &mut Vm, source: &str) -> Result<Rc<FunctionObject>, CompileFailed> {
    let mut compiler = Compiler::new(source, vm);

    // Pin the root function for the whole compile so that allocations it
    // triggers further down (string constants, nested function objects)
    // can't reclaim it before it's returned (§5). `Vm::pin` only records a
    // pointer, not a clone, so dropping `root` right away leaves the frame
    // as the function's sole owner - it can keep mutating it in place.
    let root = Rc::clone(&compiler.current().function);
    compiler.vm.pin(&root);
    drop(root);

    stmt::skip_lines(&mut compiler);
    if compiler.parser.check(TokenType::Eof) {
        compiler.emit_op(Opcode::Null);
    } else {
        loop {
            stmt::definition(&mut compiler);
            stmt::skip_lines(&mut compiler);
            if compiler.parser.check(TokenType::Eof) {
                break;
            }
            compiler.emit_op(Opcode::Pop);
        }
    }
    compiler.emit_op(Opcode::End);

    let had_errors = compiler.parser.handler.has_errors();
    let error_count = compiler.parser.handler.error_count();
    let script = compiler.pop_frame();
    drop(compiler);
    vm.unpin(&script);

    if had_errors {
        return Err(CompileFailed { error_count });
    }

    Ok(script)
}
