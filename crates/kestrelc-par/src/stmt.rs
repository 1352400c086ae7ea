//! Statements, blocks, and class bodies (§4.9, §4.10, §4.11).
//!
//! Every statement leaves exactly one value on the stack: a block's result
//! is its last statement's value, and `if`/`else` is an expression for the
//! same reason (§4.9). Definitions (`var`, `class`) are statements too, so
//! they follow the same one-value convention as everything else.

use kestrelc_lex::TokenType;
use kestrelc_objects::{Opcode, Value};

use crate::compiler::Compiler;
use crate::expr::expression;
use crate::rules::rule;
use crate::selector::SelectorBuilder;

/// Consume as many `LINE` tokens as follow, reporting whether any did.
pub(crate) fn skip_lines(compiler: &mut Compiler) -> bool {
    let mut any = false;
    while compiler.parser.match_token(TokenType::Line) {
        any = true;
    }
    any
}

/// A definition is a `var`/`class` declaration, or an ordinary statement.
pub fn definition(compiler: &mut Compiler) {
    if compiler.parser.match_token(TokenType::Class) {
        class_declaration(compiler);
    } else if compiler.parser.match_token(TokenType::Var) {
        var_declaration(compiler);
    } else {
        statement(compiler);
    }
}

fn var_declaration(compiler: &mut Compiler) {
    let errors_before = compiler.parser.handler.error_count();
    let sym = compiler.declare_variable();

    // Only require `=` if the name itself parsed cleanly - otherwise
    // `declare_variable`'s own mismatch already reported the problem, and
    // piling a second "expect '='" on top of a missing name would just be
    // cascading noise off the same bad token.
    if compiler.parser.handler.error_count() == errors_before {
        compiler.parser.consume(TokenType::Equal, "expect '=' after variable name");
        expression(compiler);
    }

    if let Some(sym) = sym {
        compiler.define_variable(sym);
    }
}

pub fn statement(compiler: &mut Compiler) {
    if compiler.parser.match_token(TokenType::If) {
        if_statement(compiler);
    } else if compiler.parser.match_token(TokenType::LeftBrace) {
        block(compiler);
    } else {
        expression(compiler);
    }
}

/// Either a `{ block }` or a single bare statement, used for both arms of
/// `if`/`else` (§4.9).
fn branch(compiler: &mut Compiler) {
    if compiler.parser.match_token(TokenType::LeftBrace) {
        block(compiler);
    } else {
        statement(compiler);
    }
}

fn if_statement(compiler: &mut Compiler) {
    compiler.parser.consume(TokenType::LeftParen, "expect '(' after 'if'");
    expression(compiler);
    compiler.parser.consume(TokenType::RightParen, "expect ')' after condition");

    let then_jump = compiler.emit_jump(Opcode::JumpIf);
    branch(compiler);

    let else_jump = compiler.emit_jump(Opcode::Jump);
    compiler.patch_jump(then_jump);

    skip_lines(compiler);
    if compiler.parser.match_token(TokenType::Else) {
        branch(compiler);
    } else {
        compiler.emit_op(Opcode::Null);
    }
    compiler.patch_jump(else_jump);
}

/// Parse a brace-delimited sequence of definitions. Assumes the opening
/// `{` is already consumed; consumes the closing `}`. Leaves exactly one
/// value on the stack: the last statement's, or `null` for an empty block.
///
/// After each statement: if `}` follows, the block is done. Otherwise a
/// `LINE` must separate it from the next statement - without one, `}` is
/// required right there rather than silently treating two statements on
/// one line as a single statement followed by `POP` (§4.9).
pub fn block(compiler: &mut Compiler) {
    skip_lines(compiler);

    if compiler.parser.match_token(TokenType::RightBrace) {
        compiler.emit_op(Opcode::Null);
        return;
    }

    loop {
        definition(compiler);
        let saw_line = skip_lines(compiler);

        if compiler.parser.match_token(TokenType::RightBrace) {
            return;
        }
        if compiler.parser.check(TokenType::Eof) {
            compiler.parser.error_at_current("expect '}' to close block");
            return;
        }
        if !saw_line {
            compiler.parser.consume(TokenType::RightBrace, "expect '}' after statement");
            return;
        }
        compiler.emit_op(Opcode::Pop);
    }
}

// ---- class bodies (§4.10) ----

fn class_declaration(compiler: &mut Compiler) {
    if !compiler.at_top_level() {
        compiler.parser.error("classes can only be declared at the top level");
    }

    let Some(sym) = compiler.declare_variable() else {
        skip_class_body(compiler);
        return;
    };
    let class_name = compiler.parser.previous_lexeme().to_string();
    let interned = compiler.vm.new_string(&class_name);
    compiler.emit_constant(Value::Str(interned));

    if compiler.parser.match_token(TokenType::Is) {
        expression(compiler);
        compiler.emit_op(Opcode::Subclass);
    } else {
        compiler.emit_op(Opcode::Class);
    }

    // Keep a working copy on the stack for the METHOD installs below; the
    // other copy is stored into the global, same as any other variable.
    compiler.emit_op(Opcode::Dup);
    compiler.define_variable(sym);

    class_body(compiler);
}

/// On a malformed class header, still consume the body so a single bad
/// class doesn't cascade errors through the rest of the file.
fn skip_class_body(compiler: &mut Compiler) {
    if compiler.parser.match_token(TokenType::Is) {
        expression(compiler);
        compiler.emit_op(Opcode::Pop);
    }
    compiler.parser.consume(TokenType::LeftBrace, "expect '{' before class body");
    let mut depth = 1u32;
    while depth > 0 && !compiler.parser.check(TokenType::Eof) {
        if compiler.parser.match_token(TokenType::LeftBrace) {
            depth += 1;
        } else if compiler.parser.match_token(TokenType::RightBrace) {
            depth -= 1;
        } else {
            compiler.parser.advance();
        }
    }
}

fn class_body(compiler: &mut Compiler) {
    compiler.parser.consume(TokenType::LeftBrace, "expect '{' before class body");
    skip_lines(compiler);

    while !compiler.parser.match_token(TokenType::RightBrace) {
        if compiler.parser.check(TokenType::Eof) {
            compiler.parser.error_at_current("expect '}' to close class body");
            return;
        }
        method_declaration(compiler);
        skip_lines(compiler);
    }
}

fn method_declaration(compiler: &mut Compiler) {
    let is_static = compiler.parser.match_token(TokenType::Static);

    compiler.parser.advance();
    let token_kind = compiler.parser.previous.kind;
    let Some(signature_fn) = rule(token_kind).method_signature else {
        compiler.parser.error("expect a method name or operator");
        return;
    };
    let base_name = compiler.parser.previous_lexeme().to_string();

    compiler.push_frame(Some(base_name.clone().into_boxed_str()), true, false);
    let mut builder = SelectorBuilder::new(&base_name);
    signature_fn(compiler, &mut builder);
    let selector_text = builder.finish();

    compiler.parser.consume(TokenType::LeftBrace, "expect '{' before method body");
    block(compiler);
    compiler.emit_op(Opcode::End);

    let method_fn = compiler.pop_frame();
    let Some(const_idx) = compiler.intern_constant(Value::Function(method_fn)) else {
        return;
    };

    let sel = compiler.vm.methods.ensure(&selector_text).as_u32();
    if sel > u8::MAX as u32 {
        compiler.parser.error("too many distinct method selectors");
        return;
    }

    if is_static {
        compiler.emit_op(Opcode::Metaclass);
    }
    compiler.emit_op(Opcode::Method);
    compiler.emit_byte(sel as u8);
    compiler.emit_byte(const_idx);
}

// ---- method_signature parsers (§4.6, §4.10) ----
//
// Each of these is called immediately after the token that names the
// method (a `Name` or an operator token) has been consumed, with a frame
// already pushed so any parameter it declares lands in the method's own
// locals.

/// `Name` signature: `foo`, or `foo(a, b)`.
pub fn parameter_list(compiler: &mut Compiler, builder: &mut SelectorBuilder) {
    if !compiler.parser.match_token(TokenType::LeftParen) {
        return;
    }
    if !compiler.parser.check(TokenType::RightParen) {
        loop {
            if builder.push_arity().is_err() {
                compiler.parser.error("method has too many parameters");
            }
            compiler.declare_variable();
            if !compiler.parser.match_token(TokenType::Comma) {
                break;
            }
        }
    }
    compiler.parser.consume(TokenType::RightParen, "expect ')' after parameters");
}

/// Unary-only operator signature (`!`, `~`): always arity 0. An empty
/// parameter list is tolerated for symmetry with the call syntax.
pub fn unary_signature(compiler: &mut Compiler, _builder: &mut SelectorBuilder) {
    if compiler.parser.match_token(TokenType::LeftParen) {
        compiler
            .parser
            .consume(TokenType::RightParen, "a unary operator method takes no parameters");
    }
}

/// Infix-only operator signature (`+`, `*`, `==`, `<`, ...): always exactly
/// one parameter, the right-hand operand.
pub fn infix_signature(compiler: &mut Compiler, builder: &mut SelectorBuilder) {
    compiler.parser.consume(TokenType::LeftParen, "expect '(' after operator");
    if builder.push_arity().is_err() {
        compiler.parser.error("method selector too long");
    }
    compiler.declare_variable();
    compiler
        .parser
        .consume(TokenType::RightParen, "expect ')' after operand parameter");
}

/// Mixed signature for `-`, which is both a unary and an infix operator:
/// no parameter list (or an empty one) means arity 0, one parameter means
/// arity 1.
pub fn mixed_signature(compiler: &mut Compiler, builder: &mut SelectorBuilder) {
    if !compiler.parser.match_token(TokenType::LeftParen) {
        return;
    }
    if !compiler.parser.check(TokenType::RightParen) {
        if builder.push_arity().is_err() {
            compiler.parser.error("method selector too long");
        }
        compiler.declare_variable();
    }
    compiler.parser.consume(TokenType::RightParen, "expect ')' after parameter");
}
