//! Numeric literal and identifier scanning.
//!
//! These are the two "fallback" parsers the symbol walker in
//! [`crate::lexer`] reaches for once the static symbol table has no match
//! at the current position: a numeral or an identifier (variable
//! reference). Both report "not applicable here" by returning `None`
//! rather than an error — only a *committed but malformed* literal is an
//! error.

use crate::error::CompileError;

/// Attempts to parse a numeric literal starting at byte offset `start` of
/// `expr`. `expr` must already be lowercased and whitespace-free.
///
/// Returns `Ok(None)` if `expr[start]` is not a digit or `.` (i.e. this
/// position clearly isn't a numeral). Once the first character commits to
/// "this is a numeral", any subsequent syntax violation is
/// [`CompileError::InvalidConstant`].
///
/// On success, returns the parsed value and the exclusive end offset.
pub fn parse_constant(expr: &str, start: usize) -> Result<Option<(f64, usize)>, CompileError> {
    let bytes = expr.as_bytes();
    let first = bytes[start];
    let mut numer = first.is_ascii_digit();
    let mut dpoint = first == b'.';
    if !numer && !dpoint {
        return Ok(None);
    }

    let mut expon = false;
    let mut sign = false;
    let mut valid = true;
    let mut end = start;
    let mut more = true;

    while more {
        let next = end + 1;
        if next >= bytes.len() {
            break;
        }
        let c = bytes[next];
        more = false;

        if c.is_ascii_digit() {
            numer = true;
            more = true;
        } else if c == b'.' {
            if !(dpoint || expon) {
                dpoint = true;
                more = true;
            } else {
                valid = false;
            }
        } else if c == b'd' || c == b'e' {
            if !expon && numer {
                expon = true;
                numer = false;
                more = true;
            } else {
                valid = false;
            }
        } else if c == b'+' || c == b'-' {
            if expon && !sign && !numer {
                sign = true;
                more = true;
            } else if !numer {
                valid = false;
            }
        }

        if more || !valid {
            end += 1;
        } else {
            break;
        }
    }

    valid = valid && numer;

    if !valid {
        return Err(CompileError::InvalidConstant {
            fragment: expr[..=end].to_string(),
        });
    }

    let canonical: String = expr[start..=end]
        .chars()
        .map(|c| if c == 'd' { 'e' } else { c })
        .collect();

    match canonical.parse::<f64>() {
        Ok(value) => Ok(Some((value, end + 1))),
        Err(_) => Err(CompileError::InvalidConstant {
            fragment: expr[..=end].to_string(),
        }),
    }
}

/// Attempts to parse an identifier (first character alphabetic, the rest
/// alphanumeric or `_`) starting at byte offset `start`.
///
/// Returns `Ok(None)` if `expr[start]` is not alphabetic. This never
/// fails: any alphabetic start yields *some* identifier.
pub fn parse_identifier(expr: &str, start: usize) -> Option<(&str, usize)> {
    let bytes = expr.as_bytes();
    if !bytes[start].is_ascii_alphabetic() {
        return None;
    }
    let mut end = start;
    while end + 1 < bytes.len() {
        let c = bytes[end + 1];
        if c.is_ascii_alphanumeric() || c == b'_' {
            end += 1;
        } else {
            break;
        }
    }
    Some((&expr[start..=end], end + 1))
}

/// Attempts to parse a variable reference: an identifier that must
/// resolve against `vars`.
///
/// Returns `Ok(None)` if there is no identifier here at all.
/// Returns `Err(UndefinedVariableOrFunction)` if there is an identifier
/// but it is not in `vars`.
/// On success, returns the variable's index in `vars` and the exclusive
/// end offset.
pub fn parse_variable(
    expr: &str,
    start: usize,
    vars: &[String],
) -> Result<Option<(usize, usize)>, CompileError> {
    let (name, end) = match parse_identifier(expr, start) {
        Some(found) => found,
        None => return Ok(None),
    };
    match vars.iter().position(|v| v == name) {
        Some(index) => Ok(Some((index, end))),
        None => Err(CompileError::UndefinedVariableOrFunction {
            fragment: expr[..end].to_string(),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain_integer() {
        assert_eq!(parse_constant("42", 0).unwrap(), Some((42.0, 2)));
    }

    #[test]
    fn leading_decimal_point() {
        assert_eq!(parse_constant(".5", 0).unwrap(), Some((0.5, 2)));
    }

    #[test]
    fn exponent_with_d_marker() {
        assert_eq!(parse_constant("1.5d2", 0).unwrap(), Some((150.0, 5)));
    }

    #[test]
    fn exponent_with_sign() {
        assert_eq!(parse_constant("1e-3", 0).unwrap(), Some((0.001, 4)));
    }

    #[test]
    fn not_a_number_returns_none() {
        assert_eq!(parse_constant("x+1", 0).unwrap(), None);
    }

    #[test]
    fn double_decimal_point_is_an_error() {
        assert!(parse_constant("1.2.3", 0).is_err());
    }

    #[test]
    fn double_exponent_marker_is_an_error() {
        assert!(parse_constant("1e2e3", 0).is_err());
    }

    #[test]
    fn exponent_without_mantissa_digit_is_an_error() {
        assert!(parse_constant("1e", 0).is_err());
    }

    #[test]
    fn parses_identifier_and_stops_at_first_non_alnum() {
        assert_eq!(parse_identifier("abc_1+2", 0), Some(("abc_1", 5)));
    }

    #[test]
    fn unknown_variable_is_an_error() {
        let vars = vec!["x".to_string()];
        assert!(parse_variable("y", 0, &vars).is_err());
    }

    #[test]
    fn known_variable_resolves_to_its_index() {
        let vars = vec!["x".to_string(), "y".to_string()];
        assert_eq!(parse_variable("y", 0, &vars).unwrap(), Some((1, 1)));
    }
}
