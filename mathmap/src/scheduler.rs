//! Shunting-yard scheduling: converts the infix token stream from
//! [`crate::lexer`] into the postfix [`crate::program::Program`], per
//! §4.6.

use crate::lexer::Tokens;
use crate::opcode::Opcode;
use crate::program::Program;
use crate::symbol_table::{SYMBOLS, SYMBOL_LDCON, SYMBOL_LDVAR};

/// Schedules a validated token stream into its compiled program.
///
/// The caller must have already produced `tokens` successfully from
/// [`crate::lexer::tokenize`] — this function performs no further
/// validation; it assumes the symbol sequence is well-formed.
pub fn schedule(tokens: &Tokens) -> Program {
    let symlist = &tokens.symbols;
    let con = &tokens.constants;
    let nsym = symlist.len();

    let mut pending: Vec<usize> = Vec::new();
    let mut output: Vec<Opcode> = Vec::new();
    let mut isym = 0usize;
    let mut flush = false;
    let mut icon = 0usize;
    let mut nstack: i32 = 0;
    let mut stacksize: i32 = 0;

    while !pending.is_empty() || isym < nsym {
        let push = if pending.is_empty() {
            true
        } else if isym >= nsym {
            false
        } else if flush {
            flush = false;
            false
        } else {
            let top = *pending.last().unwrap();
            SYMBOLS[symlist[isym]].left_priority > SYMBOLS[top].right_priority
        };

        if push {
            let sym = symlist[isym];
            isym += 1;
            if SYMBOLS[sym].par_increment < 0 {
                flush = true;
            } else {
                pending.push(sym);
            }
        } else {
            let sym = pending.pop().expect("scheduler popped an empty stack");
            if sym == SYMBOL_LDVAR || sym == SYMBOL_LDCON {
                icon += 1;
            }
            let entry = &SYMBOLS[sym];
            if entry.opcode != Opcode::Null {
                output.push(entry.opcode);
                if entry.nargs >= 0 {
                    nstack += entry.stack_increment;
                } else {
                    let k = (con[icon] + 0.5) as i32;
                    icon += 1;
                    nstack -= k - 1;
                }
                stacksize = stacksize.max(nstack);
            }
        }
    }

    Program {
        opcodes: output,
        constants: con.clone(),
        stacksize: (stacksize.max(1)) as usize,
    }
}
