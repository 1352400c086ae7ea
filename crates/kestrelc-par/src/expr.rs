//! Pratt expression core (§4.4, §4.5) and every prefix/infix handler the
//! rule table in [`crate::rules`] points at.
//!
//! Operators are never special bytecode: `a + b` and `a.+(b)` compile to the
//! identical `CALL_1` against selector `"+ "` (§4.5). `unary_op`/`infix_op`
//! are the two places that difference collapses back into an ordinary
//! method dispatch.

use kestrelc_lex::TokenType;
use kestrelc_objects::{Opcode, Value};

use crate::compiler::{Compiler, RECEIVER_NAME};
use crate::rules::{rule, Precedence};

/// Parse and emit one expression, at the loosest (assignment) precedence.
pub fn expression(compiler: &mut Compiler) {
    parse_precedence(compiler, Precedence::Assignment);
}

/// The Pratt core: consume a prefix expression, then fold in infix
/// operators whose precedence is at least `precedence`, left to right.
pub fn parse_precedence(compiler: &mut Compiler, precedence: Precedence) {
    compiler.parser.advance();
    let prefix = rule(compiler.parser.previous.kind).prefix;
    let Some(prefix) = prefix else {
        compiler.parser.error("expect expression");
        return;
    };

    let can_assign = precedence <= Precedence::Assignment;
    prefix(compiler, can_assign);

    while precedence <= rule(compiler.parser.peek()).precedence {
        compiler.parser.advance();
        let infix = rule(compiler.parser.previous.kind)
            .infix
            .expect("loop condition guarantees an infix rule");
        infix(compiler, can_assign);
    }

    if can_assign && compiler.parser.match_token(TokenType::Equal) {
        compiler.parser.error("invalid assignment target");
    }
}

pub fn grouping(compiler: &mut Compiler, _can_assign: bool) {
    expression(compiler);
    compiler.parser.consume(TokenType::RightParen, "expect ')' after expression");
}

/// Prefix `-`, `!`, `~`: parse the sole operand, then dispatch it as a
/// zero-argument method call on the operand (§4.5).
pub fn unary_op(compiler: &mut Compiler, _can_assign: bool) {
    let operator_name = rule(compiler.parser.previous.kind)
        .operator_name
        .expect("unary rule always carries an operator name");
    parse_precedence(compiler, Precedence::Unary);
    compiler.emit_call(operator_name, 0);
}

/// Infix binary operator: the left operand is already on the stack: parse
/// the right operand at one precedence level tighter (left-associative),
/// then dispatch as a one-argument method call (§4.5).
pub fn infix_op(compiler: &mut Compiler, _can_assign: bool) {
    let op_rule = rule(compiler.parser.previous.kind);
    let operator_name = op_rule
        .operator_name
        .expect("infix rule always carries an operator name");
    parse_precedence(compiler, op_rule.precedence.higher());
    compiler.emit_call(operator_name, 1);
}

pub fn boolean(compiler: &mut Compiler, _can_assign: bool) {
    match compiler.parser.previous.kind {
        TokenType::True => compiler.emit_op(Opcode::True),
        TokenType::False => compiler.emit_op(Opcode::False),
        _ => unreachable!("boolean is only installed on True/False"),
    };
}

pub fn null(compiler: &mut Compiler, _can_assign: bool) {
    compiler.emit_op(Opcode::Null);
}

/// `this`: legal anywhere lexically nested under a method body, resolved
/// to the current frame's own reserved receiver slot (§4.7).
pub fn this_(compiler: &mut Compiler, _can_assign: bool) {
    if !compiler.this_is_legal() {
        compiler.parser.error("cannot use 'this' outside of a method");
        return;
    }
    let slot = compiler
        .resolve_local(RECEIVER_NAME)
        .expect("every frame reserves a receiver slot");
    compiler.emit_op_operand(Opcode::LoadLocal, slot as u8);
}

/// Identifier reference: resolves against the current frame's locals first,
/// then the VM's globals (§4.7). A name found in neither is reported as
/// undefined rather than auto-declared. Followed by `=` in assignable
/// position, it's a store instead of a load.
pub fn name(compiler: &mut Compiler, can_assign: bool) {
    let ident = compiler.parser.previous_lexeme().to_string();

    if let Some(slot) = compiler.resolve_local(&ident) {
        if can_assign && compiler.parser.match_token(TokenType::Equal) {
            expression(compiler);
            compiler.emit_op_operand(Opcode::StoreLocal, slot as u8);
        } else {
            compiler.emit_op_operand(Opcode::LoadLocal, slot as u8);
        }
        return;
    }

    let Some(sym) = compiler.resolve_global(&ident) else {
        compiler.parser.error("undefined variable");
        if can_assign && compiler.parser.match_token(TokenType::Equal) {
            expression(compiler);
        }
        return;
    };
    if sym > u8::MAX as u32 {
        compiler.parser.error("too many global variables");
        return;
    }
    if can_assign && compiler.parser.match_token(TokenType::Equal) {
        expression(compiler);
        compiler.emit_op_operand(Opcode::StoreGlobal, sym as u8);
    } else {
        compiler.emit_op_operand(Opcode::LoadGlobal, sym as u8);
    }
}

pub fn number(compiler: &mut Compiler, _can_assign: bool) {
    let text = compiler.parser.previous_lexeme();
    match text.parse::<f64>() {
        Ok(value) => compiler.emit_constant(Value::Number(value)),
        Err(_) => compiler.parser.error("invalid number literal"),
    }
}

/// The lexeme spans the surrounding quotes; strip them before interning.
pub fn string(compiler: &mut Compiler, _can_assign: bool) {
    let text = compiler.parser.previous_lexeme();
    let literal = &text[1..text.len().saturating_sub(1)];
    let interned = compiler.vm.new_string(literal);
    compiler.emit_constant(Value::Str(interned));
}

/// Anonymous function literal: `fn (params) { body }`. Its own frame, its
/// own receiver slot (unused unless it's later invoked as a method), no
/// name to disassemble by.
pub fn function(compiler: &mut Compiler, _can_assign: bool) {
    compiler.push_frame(None, false, true);

    compiler.parser.consume(TokenType::LeftParen, "expect '(' after 'fn'");
    if !compiler.parser.check(TokenType::RightParen) {
        loop {
            compiler.declare_variable();
            if !compiler.parser.match_token(TokenType::Comma) {
                break;
            }
        }
    }
    compiler.parser.consume(TokenType::RightParen, "expect ')' after parameters");
    compiler.parser.consume(TokenType::LeftBrace, "expect '{' before function body");
    crate::stmt::block(compiler);

    compiler.emit_op(Opcode::End);
    let function_obj = compiler.pop_frame();
    compiler.emit_constant(Value::Function(function_obj));
}

/// `.` postfix: bare access (`recv.name`), call (`recv.name(args)`), or
/// assignment sugar (`recv.name = value`, selector shared with the
/// one-argument call form by construction, §4.6).
pub fn call(compiler: &mut Compiler, can_assign: bool) {
    compiler.parser.consume(TokenType::Name, "expect property name after '.'");
    let base = compiler.parser.previous_lexeme().to_string();

    if can_assign && compiler.parser.match_token(TokenType::Equal) {
        expression(compiler);
        compiler.emit_call(&base, 1);
        return;
    }

    if compiler.parser.match_token(TokenType::LeftParen) {
        let mut arity: u8 = 0;
        if !compiler.parser.check(TokenType::RightParen) {
            loop {
                expression(compiler);
                arity = arity.saturating_add(1);
                if !compiler.parser.match_token(TokenType::Comma) {
                    break;
                }
            }
        }
        compiler.parser.consume(TokenType::RightParen, "expect ')' after arguments");
        compiler.emit_call(&base, arity);
    } else {
        compiler.emit_call(&base, 0);
    }
}

/// `value is Class`: a fixed-arity builtin test, not a method dispatch
/// (§4.9) - it has its own opcode rather than going through `CALL_n`.
pub fn is_expr(compiler: &mut Compiler, _can_assign: bool) {
    parse_precedence(compiler, Precedence::Is.higher());
    compiler.emit_op(Opcode::Is);
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrelc_objects::{Opcode as Op, Vm};

    fn compile_expr<'s>(vm: &mut Vm, src: &'s str) -> Compiler<'s, '_> {
        let mut compiler = Compiler::new(src, vm);
        expression(&mut compiler);
        compiler
    }

    #[test]
    fn number_literal_emits_a_constant() {
        let mut vm = Vm::new();
        let compiler = compile_expr(&mut vm, "42");
        assert!(!compiler.parser.handler.has_errors());
    }

    #[test]
    fn binary_plus_compiles_to_a_one_arg_call() {
        let mut vm = Vm::new();
        let compiler = compile_expr(&mut vm, "1 + 2");
        assert!(!compiler.parser.handler.has_errors());
        drop(compiler);
        assert!(vm.methods.find("+ ").is_some());
    }

    #[test]
    fn unary_minus_compiles_to_a_zero_arg_call() {
        let mut vm = Vm::new();
        let compiler = compile_expr(&mut vm, "-x");
        drop(compiler);
        assert!(vm.methods.find("-").is_some());
    }

    #[test]
    fn this_outside_a_method_is_an_error() {
        let mut vm = Vm::new();
        let compiler = compile_expr(&mut vm, "this");
        assert!(compiler.parser.handler.has_errors());
    }

    #[test]
    fn unresolved_name_is_reported_as_undefined() {
        let mut vm = Vm::new();
        let compiler = compile_expr(&mut vm, "nope");
        assert!(compiler.parser.handler.has_errors());
        drop(compiler);
        assert!(vm.globals.find("nope").is_none());
    }

    #[test]
    fn a_global_declared_earlier_resolves_without_error() {
        let mut vm = Vm::new();
        vm.globals.add("x").expect("fresh table");
        let compiler = compile_expr(&mut vm, "x");
        assert!(!compiler.parser.handler.has_errors());
    }

    #[test]
    fn method_call_mangles_by_argument_count() {
        let mut vm = Vm::new();
        let compiler = compile_expr(&mut vm, "foo.bar(1, 2)");
        drop(compiler);
        assert!(vm.methods.find("bar  ").is_some());
    }

    #[test]
    fn bare_property_access_is_arity_zero() {
        let mut vm = Vm::new();
        let compiler = compile_expr(&mut vm, "foo.bar");
        drop(compiler);
        assert!(vm.methods.find("bar").is_some());
    }

    #[test]
    fn is_expression_emits_is_opcode() {
        let mut vm = Vm::new();
        let mut compiler = compile_expr(&mut vm, "x is Foo");
        let code = compiler.current().function.code.clone();
        assert!(code.iter().any(|&b| Op::from_byte(b) == Some(Op::Is)));
    }
}
