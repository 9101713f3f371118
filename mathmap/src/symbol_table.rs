//! The static, process-wide table of recognised lexemes.
//!
//! Every operator, function name and the two synthetic load opcodes are
//! described here as one immutable [`Symbol`] row. The lexer scans this
//! table, in declared order, against the unconsumed suffix of the
//! expression text; the scheduler consults the same rows for priorities
//! and stack effects. Nothing elsewhere hand-codes a lexeme's spelling or
//! precedence — it all comes from this table.

use crate::opcode::Opcode;

/// One row of the static symbol table.
///
/// | Field | Meaning |
/// |---|---|
/// | `text` | Exact spelling to match against the source, or `""` for the two synthetic load entries |
/// | `oper_left` | Looks like an operator when seen from the left |
/// | `oper_right` | Looks like an operator when seen from the right |
/// | `unary_next` | May be followed by a unary `+`/`-` |
/// | `unary_oper` | Is itself a unary `+`/`-` |
/// | `left_priority` | Priority when this symbol is the incoming token |
/// | `right_priority` | Priority when this symbol is sitting on the pending stack |
/// | `par_increment` | Change in parenthesis depth: `-1`, `0`, or `+1` |
/// | `stack_increment` | Change in evaluation stack size for a fixed-arity symbol; ignored for variadic openers, whose true delta is resolved from the observed argument count |
/// | `nargs` | `0` = not a function; positive = fixed argument count; negative = minimum argument count for a variadic function |
/// | `opcode` | Opcode emitted when this symbol is popped, or [`Opcode::Null`] if it has no runtime effect |
#[derive(Clone, Copy, Debug)]
pub struct Symbol {
    pub text: &'static str,
    pub oper_left: bool,
    pub oper_right: bool,
    pub unary_next: bool,
    pub unary_oper: bool,
    pub left_priority: i32,
    pub right_priority: i32,
    pub par_increment: i32,
    pub stack_increment: i32,
    pub nargs: i32,
    pub opcode: Opcode,
}

/// Index of the synthetic "load variable" entry.
pub const SYMBOL_LDVAR: usize = 0;
/// Index of the synthetic "load constant" entry.
pub const SYMBOL_LDCON: usize = 1;

/// The static symbol table, in the order the lexer scans it.
///
/// Order matters: `"-"` and `"+"` each appear twice (binary, then unary),
/// and the binary forms must be tried first so that `oper_left`/`unary_next`
/// disambiguate correctly. Longer operators such as `"**"` must precede any
/// prefix of themselves — there are none here, but function names are
/// ordered so that no name is a prefix of a later one with a different
/// opcode.
pub static SYMBOLS: &[Symbol] = &[
    // Synthetic load entries: never matched by text (empty text is
    // skipped by the scanner), only ever emitted directly by the lexer.
    Symbol {
        text: "",
        oper_left: false,
        oper_right: false,
        unary_next: false,
        unary_oper: false,
        left_priority: 10,
        right_priority: 10,
        par_increment: 0,
        stack_increment: 1,
        nargs: 0,
        opcode: Opcode::Ldvar,
    },
    Symbol {
        text: "",
        oper_left: false,
        oper_right: false,
        unary_next: false,
        unary_oper: false,
        left_priority: 10,
        right_priority: 10,
        par_increment: 0,
        stack_increment: 1,
        nargs: 0,
        opcode: Opcode::Ldcon,
    },
    Symbol {
        text: ")",
        oper_left: true,
        oper_right: false,
        unary_next: false,
        unary_oper: false,
        left_priority: 2,
        right_priority: 10,
        par_increment: -1,
        stack_increment: 0,
        nargs: 0,
        opcode: Opcode::Null,
    },
    Symbol {
        text: "(",
        oper_left: false,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 10,
        right_priority: 1,
        par_increment: 1,
        stack_increment: 0,
        nargs: 0,
        opcode: Opcode::Null,
    },
    Symbol {
        text: "-",
        oper_left: true,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 4,
        right_priority: 4,
        par_increment: 0,
        stack_increment: -1,
        nargs: 0,
        opcode: Opcode::Sub,
    },
    Symbol {
        text: "+",
        oper_left: true,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 4,
        right_priority: 4,
        par_increment: 0,
        stack_increment: -1,
        nargs: 0,
        opcode: Opcode::Add,
    },
    Symbol {
        text: "**",
        oper_left: true,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 9,
        right_priority: 6,
        par_increment: 0,
        stack_increment: -1,
        nargs: 0,
        opcode: Opcode::Pwr,
    },
    Symbol {
        text: "*",
        oper_left: true,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 5,
        right_priority: 5,
        par_increment: 0,
        stack_increment: -1,
        nargs: 0,
        opcode: Opcode::Mul,
    },
    Symbol {
        text: "/",
        oper_left: true,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 5,
        right_priority: 5,
        par_increment: 0,
        stack_increment: -1,
        nargs: 0,
        opcode: Opcode::Div,
    },
    Symbol {
        text: ",",
        oper_left: true,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 2,
        right_priority: 2,
        par_increment: 0,
        stack_increment: 0,
        nargs: 0,
        opcode: Opcode::Null,
    },
    Symbol {
        text: "-",
        oper_left: false,
        oper_right: true,
        unary_next: false,
        unary_oper: true,
        left_priority: 8,
        right_priority: 7,
        par_increment: 0,
        stack_increment: 0,
        nargs: 0,
        opcode: Opcode::Neg,
    },
    Symbol {
        text: "+",
        oper_left: false,
        oper_right: true,
        unary_next: false,
        unary_oper: true,
        left_priority: 8,
        right_priority: 7,
        par_increment: 0,
        stack_increment: 0,
        nargs: 0,
        opcode: Opcode::Null,
    },
    unary_fn("sqrt(", Opcode::Sqrt),
    unary_fn("log(", Opcode::Log),
    unary_fn("log10(", Opcode::Log10),
    unary_fn("exp(", Opcode::Exp),
    unary_fn("sin(", Opcode::Sin),
    unary_fn("cos(", Opcode::Cos),
    unary_fn("tan(", Opcode::Tan),
    unary_fn("sind(", Opcode::Sind),
    unary_fn("cosd(", Opcode::Cosd),
    unary_fn("tand(", Opcode::Tand),
    unary_fn("asin(", Opcode::Asin),
    unary_fn("acos(", Opcode::Acos),
    unary_fn("atan(", Opcode::Atan),
    unary_fn("asind(", Opcode::Asind),
    unary_fn("acosd(", Opcode::Acosd),
    unary_fn("atand(", Opcode::Atand),
    unary_fn("sinh(", Opcode::Sinh),
    unary_fn("cosh(", Opcode::Cosh),
    unary_fn("tanh(", Opcode::Tanh),
    unary_fn("abs(", Opcode::Abs),
    unary_fn("fabs(", Opcode::Abs),
    unary_fn("ceil(", Opcode::Ceil),
    unary_fn("floor(", Opcode::Floor),
    unary_fn("nint(", Opcode::Nint),
    variadic_fn("min(", Opcode::Min),
    variadic_fn("max(", Opcode::Max),
    binary_fn("dim(", Opcode::Dim),
    binary_fn("mod(", Opcode::Mod),
    binary_fn("sign(", Opcode::Sign),
    binary_fn("atan2(", Opcode::Atan2),
    binary_fn("atan2d(", Opcode::Atan2d),
    Symbol {
        text: "<bad>",
        oper_left: false,
        oper_right: false,
        unary_next: false,
        unary_oper: false,
        left_priority: 10,
        right_priority: 10,
        par_increment: 0,
        stack_increment: 1,
        nargs: 0,
        opcode: Opcode::Ldbad,
    },
];

const fn unary_fn(text: &'static str, opcode: Opcode) -> Symbol {
    Symbol {
        text,
        oper_left: false,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 10,
        right_priority: 1,
        par_increment: 1,
        stack_increment: 0,
        nargs: 1,
        opcode,
    }
}

const fn binary_fn(text: &'static str, opcode: Opcode) -> Symbol {
    Symbol {
        text,
        oper_left: false,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 10,
        right_priority: 1,
        par_increment: 1,
        stack_increment: -1,
        nargs: 2,
        opcode,
    }
}

const fn variadic_fn(text: &'static str, opcode: Opcode) -> Symbol {
    Symbol {
        text,
        oper_left: false,
        oper_right: true,
        unary_next: true,
        unary_oper: false,
        left_priority: 10,
        right_priority: 1,
        par_increment: 1,
        stack_increment: -1,
        nargs: -2,
        opcode,
    }
}
