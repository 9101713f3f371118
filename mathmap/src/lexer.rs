//! The symbol walker: lexer and validator fused into a single left-to-right
//! pass, per §4.4.
//!
//! This produces exactly what [`crate::scheduler`] needs: a flat list of
//! symbol-table indices in source order, and the parallel constant pool
//! (literal values, variable indices, and variadic-closer argument counts,
//! all in the order they were encountered).

use crate::error::CompileError;
use crate::numeric::{parse_constant, parse_variable};
use crate::symbol_table::{SYMBOLS, SYMBOL_LDCON, SYMBOL_LDVAR};

/// The result of walking an expression: symbol indices in source order,
/// and the constant pool accumulated alongside them.
pub struct Tokens {
    pub symbols: Vec<usize>,
    pub constants: Vec<f64>,
}

/// Per-depth bookkeeping the validator needs: how many arguments have been
/// seen so far, and which symbol opened this level.
struct ParenLevel {
    argcount: i32,
    opener: usize,
}

/// Walks `expr` (already cleaned: lowercased, whitespace-free) against
/// `vars`, the declared free-variable namespace, producing its token
/// stream or the first error encountered.
pub fn tokenize(expr: &str, vars: &[String]) -> Result<Tokens, CompileError> {
    let mut symbols = Vec::new();
    let mut constants = Vec::new();
    let mut levels: Vec<ParenLevel> = Vec::new();

    let mut oper_next = false;
    let mut unary_next = true;
    let mut pos = 0usize;
    let len = expr.len();

    while pos < len {
        let found = SYMBOLS.iter().enumerate().find(|(_, sym)| {
            !sym.text.is_empty()
                && sym.oper_left == oper_next
                && (!sym.unary_oper || unary_next)
                && expr[pos..].starts_with(sym.text)
        });

        let sym_index = if let Some((index, sym)) = found {
            let end = pos + sym.text.len();
            validate_symbol(index, &expr[..end], &mut levels, &mut constants)?;
            pos = end;
            index
        } else if oper_next {
            return Err(CompileError::MissingOperator {
                fragment: expr[..=pos].to_string(),
            });
        } else if let Some((value, end)) = parse_constant(expr, pos)? {
            constants.push(value);
            pos = end;
            SYMBOL_LDCON
        } else {
            match parse_variable(expr, pos, vars)? {
                Some((index, end)) => {
                    constants.push(index as f64);
                    pos = end;
                    SYMBOL_LDVAR
                }
                None => {
                    return Err(CompileError::MissingOperand {
                        fragment: expr[..=pos].to_string(),
                    });
                }
            }
        };

        oper_next = !SYMBOLS[sym_index].oper_right;
        unary_next = SYMBOLS[sym_index].unary_next;
        symbols.push(sym_index);
    }

    if !oper_next {
        return Err(CompileError::MissingOperand {
            fragment: expr.to_string(),
        });
    }
    if !levels.is_empty() {
        return Err(CompileError::MissingRightParen);
    }

    Ok(Tokens { symbols, constants })
}

fn validate_symbol(
    sym_index: usize,
    consumed: &str,
    levels: &mut Vec<ParenLevel>,
    constants: &mut Vec<f64>,
) -> Result<(), CompileError> {
    let sym = &SYMBOLS[sym_index];

    if sym.text == "," {
        match levels.last_mut() {
            Some(level) if level.argcount != 0 => {
                level.argcount += 1;
                Ok(())
            }
            _ => Err(CompileError::SpuriousComma {
                fragment: consumed.to_string(),
            }),
        }
    } else if sym.par_increment > 0 {
        levels.push(ParenLevel {
            argcount: if sym.nargs != 0 { 1 } else { 0 },
            opener: sym_index,
        });
        Ok(())
    } else if sym.par_increment < 0 {
        let level = match levels.pop() {
            Some(level) => level,
            None => {
                return Err(CompileError::MissingLeftParen {
                    fragment: consumed.to_string(),
                })
            }
        };
        let opener = &SYMBOLS[level.opener];
        if opener.nargs > 0 {
            if level.argcount != opener.nargs {
                return Err(CompileError::WrongArgCount {
                    fragment: consumed.to_string(),
                });
            }
        } else if opener.nargs < 0 {
            if level.argcount < -opener.nargs {
                return Err(CompileError::WrongArgCount {
                    fragment: consumed.to_string(),
                });
            }
            constants.push(level.argcount as f64);
        }
        Ok(())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn simple_addition() {
        let tokens = tokenize("x+1", &vars(&["x"])).unwrap();
        assert_eq!(tokens.symbols.len(), 3);
        assert_eq!(tokens.constants, vec![0.0, 1.0]);
    }

    #[test]
    fn variadic_max_records_argcount() {
        let tokens = tokenize("max(a,b,c)", &vars(&["a", "b", "c"])).unwrap();
        assert_eq!(tokens.constants, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn fixed_arity_mismatch_is_an_error() {
        let err = tokenize("dim(a)", &vars(&["a"])).unwrap_err();
        assert_eq!(err.code(), "WRNFA");
    }

    #[test]
    fn spurious_comma_is_an_error() {
        let err = tokenize("1,2", &vars(&[])).unwrap_err();
        assert_eq!(err.code(), "DELIN");
    }

    #[test]
    fn missing_left_paren_is_an_error() {
        let err = tokenize("1)", &vars(&[])).unwrap_err();
        assert_eq!(err.code(), "MLPAR");
    }

    #[test]
    fn unclosed_paren_is_an_error() {
        let err = tokenize("(1+2", &vars(&[])).unwrap_err();
        assert_eq!(err.code(), "MRPAR");
    }

    #[test]
    fn trailing_operator_is_an_error() {
        let err = tokenize("1+", &vars(&[])).unwrap_err();
        assert_eq!(err.code(), "MIOPA");
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let err = tokenize("q", &vars(&["x"])).unwrap_err();
        assert_eq!(err.code(), "UDVOF");
    }
}
