//! The bytecode instruction set the compiler emits.
//!
//! This is the wire contract between the compiler and the (out of scope)
//! virtual machine: every `Opcode` here corresponds 1:1 to the table in the
//! specification's external-interfaces section. Operand widths are fixed at
//! one byte, which is why jump distances and constant-pool indices are
//! capped at 255 (see [`MAX_CALL_ARITY`] and the `too_many_constants`-style
//! checks in `kestrelc-par`).

/// Largest number of arguments a single `CALL_n` instruction can carry.
///
/// `CALL_0 .. CALL_n` are contiguous opcodes (`CALL_k = CALL_0 + k`), so the
/// byte space reserved for them bounds the maximum method/ function arity.
pub const MAX_CALL_ARITY: u8 = 16;

/// A single Kestrel bytecode instruction, decoded from its opcode byte.
///
/// `Call` is the only variant that folds an operand into the opcode byte
/// itself (the argument count), mirroring the spec's "arity in the opcode"
/// convention; every other instruction's operands follow as separate bytes
/// in the instruction stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    /// Push `constants[idx]`. Operand: constant index (1 byte).
    Constant,
    Null,
    True,
    False,
    /// Operand: local slot (1 byte).
    LoadLocal,
    /// Operand: local slot (1 byte).
    StoreLocal,
    /// Operand: global symbol (1 byte).
    LoadGlobal,
    /// Operand: global symbol (1 byte).
    StoreGlobal,
    Dup,
    Pop,
    /// Invoke method `sel` with `arity` arguments. Operand: selector index (1 byte).
    Call(u8),
    /// Operand: forward jump distance (1 byte).
    Jump,
    /// Pop a value; if false, jump. Operand: forward jump distance (1 byte).
    JumpIf,
    Is,
    Class,
    Subclass,
    /// Install the function at `constIdx` as method `sel`. Operands: selector index, constant index.
    Method,
    /// Switch the target of the following `Method` to the metaclass.
    Metaclass,
    End,
}

const CALL_BASE: u8 = 0;
const CALL_COUNT: u8 = MAX_CALL_ARITY + 1;
const CONSTANT: u8 = CALL_BASE + CALL_COUNT;
const NULL: u8 = CONSTANT + 1;
const TRUE: u8 = NULL + 1;
const FALSE: u8 = TRUE + 1;
const LOAD_LOCAL: u8 = FALSE + 1;
const STORE_LOCAL: u8 = LOAD_LOCAL + 1;
const LOAD_GLOBAL: u8 = STORE_LOCAL + 1;
const STORE_GLOBAL: u8 = LOAD_GLOBAL + 1;
const DUP: u8 = STORE_GLOBAL + 1;
const POP: u8 = DUP + 1;
const JUMP: u8 = POP + 1;
const JUMP_IF: u8 = JUMP + 1;
const IS: u8 = JUMP_IF + 1;
const CLASS: u8 = IS + 1;
const SUBCLASS: u8 = CLASS + 1;
const METHOD: u8 = SUBCLASS + 1;
const METACLASS: u8 = METHOD + 1;
const END: u8 = METACLASS + 1;

impl Opcode {
    /// Encode this opcode to its single-byte representation.
    ///
    /// # Panics
    ///
    /// Panics if `Call(arity)` carries an arity above [`MAX_CALL_ARITY`];
    /// callers are expected to have already rejected that at the selector
    /// construction site, with a proper diagnostic, before emission.
    pub fn as_byte(self) -> u8 {
        match self {
            Opcode::Call(arity) => {
                assert!(arity <= MAX_CALL_ARITY, "call arity out of range");
                CALL_BASE + arity
            }
            Opcode::Constant => CONSTANT,
            Opcode::Null => NULL,
            Opcode::True => TRUE,
            Opcode::False => FALSE,
            Opcode::LoadLocal => LOAD_LOCAL,
            Opcode::StoreLocal => STORE_LOCAL,
            Opcode::LoadGlobal => LOAD_GLOBAL,
            Opcode::StoreGlobal => STORE_GLOBAL,
            Opcode::Dup => DUP,
            Opcode::Pop => POP,
            Opcode::Jump => JUMP,
            Opcode::JumpIf => JUMP_IF,
            Opcode::Is => IS,
            Opcode::Class => CLASS,
            Opcode::Subclass => SUBCLASS,
            Opcode::Method => METHOD,
            Opcode::Metaclass => METACLASS,
            Opcode::End => END,
        }
    }

    /// Decode a byte back into an `Opcode`, if it names one.
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        Some(match byte {
            b if b < CALL_COUNT => Opcode::Call(b),
            CONSTANT => Opcode::Constant,
            NULL => Opcode::Null,
            TRUE => Opcode::True,
            FALSE => Opcode::False,
            LOAD_LOCAL => Opcode::LoadLocal,
            STORE_LOCAL => Opcode::StoreLocal,
            LOAD_GLOBAL => Opcode::LoadGlobal,
            STORE_GLOBAL => Opcode::StoreGlobal,
            DUP => Opcode::Dup,
            POP => Opcode::Pop,
            JUMP => Opcode::Jump,
            JUMP_IF => Opcode::JumpIf,
            IS => Opcode::Is,
            CLASS => Opcode::Class,
            SUBCLASS => Opcode::Subclass,
            METHOD => Opcode::Method,
            METACLASS => Opcode::Metaclass,
            END => Opcode::End,
            _ => return None,
        })
    }
}
