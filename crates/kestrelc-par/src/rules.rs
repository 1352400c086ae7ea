//! Per-token parse rule table (§4.4): maps a [`TokenType`] to its prefix
//! and infix Pratt handlers, its class-body method-signature parser, its
//! binding precedence, and - for operator tokens - the bare operator name
//! used to build a method selector (§4.5).
//!
//! Modeled as a pattern match rather than an array of function pointers
//! indexed by a numeric tag (§9's re-architecture guidance: "in a language
//! with tagged unions, replace with pattern-matched dispatch").

use kestrelc_lex::TokenType;

use crate::compiler::Compiler;
use crate::selector::SelectorBuilder;

/// Precedence ladder, lowest to highest (§4.4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None,
    Lowest,
    Assignment,
    Is,
    Equality,
    Comparison,
    Bitwise,
    Term,
    Factor,
    Unary,
    Call,
}

impl Precedence {
    /// One level tighter than `self`; used by `infix_op` to parse a
    /// left-associative binary operator's right-hand side.
    pub fn higher(self) -> Precedence {
        use Precedence::*;
        match self {
            None => Lowest,
            Lowest => Assignment,
            Assignment => Is,
            Is => Equality,
            Equality => Comparison,
            Comparison => Bitwise,
            Bitwise => Term,
            Term => Factor,
            Factor => Unary,
            Unary => Call,
            Call => Call,
        }
    }
}

pub type PrefixFn = for<'s, 'vm> fn(&mut Compiler<'s, 'vm>, bool);
pub type InfixFn = for<'s, 'vm> fn(&mut Compiler<'s, 'vm>, bool);
pub type SignatureFn = for<'s, 'vm> fn(&mut Compiler<'s, 'vm>, &mut SelectorBuilder);

#[derive(Clone, Copy)]
pub struct Rule {
    pub prefix: Option<PrefixFn>,
    pub infix: Option<InfixFn>,
    pub method_signature: Option<SignatureFn>,
    pub precedence: Precedence,
    /// Bare operator text (no arity spaces) for operator-as-method tokens.
    pub operator_name: Option<&'static str>,
}

const NONE: Rule = Rule {
    prefix: None,
    infix: None,
    method_signature: None,
    precedence: Precedence::None,
    operator_name: None,
};

/// Look up the rule for `kind`.
pub fn rule(kind: TokenType) -> Rule {
    use crate::expr::{boolean, call, function, grouping, infix_op, is_expr, name, null, number, string, this_, unary_op};
    use crate::stmt::{infix_signature, mixed_signature, parameter_list, unary_signature};

    match kind {
        TokenType::LeftParen => Rule {
            prefix: Some(grouping),
            ..NONE
        },
        TokenType::Dot => Rule {
            infix: Some(call),
            precedence: Precedence::Call,
            ..NONE
        },
        TokenType::Minus => Rule {
            prefix: Some(unary_op),
            infix: Some(infix_op),
            method_signature: Some(mixed_signature),
            precedence: Precedence::Term,
            operator_name: Some("-"),
        },
        TokenType::Plus => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Term,
            operator_name: Some("+"),
        },
        TokenType::Slash => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Factor,
            operator_name: Some("/"),
        },
        TokenType::Star => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Factor,
            operator_name: Some("*"),
        },
        TokenType::Percent => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Factor,
            operator_name: Some("%"),
        },
        TokenType::Pipe => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Bitwise,
            operator_name: Some("|"),
        },
        TokenType::Amp => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Bitwise,
            operator_name: Some("&"),
        },
        TokenType::Bang => Rule {
            prefix: Some(unary_op),
            method_signature: Some(unary_signature),
            operator_name: Some("!"),
            ..NONE
        },
        TokenType::Tilde => Rule {
            prefix: Some(unary_op),
            method_signature: Some(unary_signature),
            operator_name: Some("~"),
            ..NONE
        },
        TokenType::EqualEqual => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Equality,
            operator_name: Some("=="),
        },
        TokenType::BangEqual => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Equality,
            operator_name: Some("!="),
        },
        TokenType::Less => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Comparison,
            operator_name: Some("<"),
        },
        TokenType::Greater => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Comparison,
            operator_name: Some(">"),
        },
        TokenType::LessEqual => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Comparison,
            operator_name: Some("<="),
        },
        TokenType::GreaterEqual => Rule {
            infix: Some(infix_op),
            method_signature: Some(infix_signature),
            precedence: Precedence::Comparison,
            operator_name: Some(">="),
        },
        TokenType::Is => Rule {
            infix: Some(is_expr),
            precedence: Precedence::Is,
            ..NONE
        },
        TokenType::True | TokenType::False => Rule {
            prefix: Some(boolean),
            ..NONE
        },
        TokenType::Null => Rule {
            prefix: Some(null),
            ..NONE
        },
        TokenType::This => Rule {
            prefix: Some(this_),
            ..NONE
        },
        TokenType::Fn => Rule {
            prefix: Some(function),
            ..NONE
        },
        TokenType::Name => Rule {
            prefix: Some(name),
            method_signature: Some(parameter_list),
            ..NONE
        },
        TokenType::Number => Rule {
            prefix: Some(number),
            ..NONE
        },
        TokenType::String => Rule {
            prefix: Some(string),
            ..NONE
        },
        _ => NONE,
    }
}
