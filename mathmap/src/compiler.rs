//! Front-end glue: cleaning raw function text, splitting it into
//! left/right-hand sides, and compiling a whole direction's worth of
//! expressions against a shared variable namespace. Per §4.1–4.3, §4.7.

use crate::error::CompileError;
use crate::lexer::tokenize;
use crate::numeric::parse_identifier;
use crate::program::Program;
use crate::scheduler::schedule;

/// Strips every ASCII whitespace character (not just the ends) and
/// lowercases what remains.
///
/// Embedded whitespace is stripped throughout, matching the original's
/// "skip any character the whitespace predicate accepts" pass rather
/// than the narrower `str::trim`.
pub fn clean_functions(raw: &[&str]) -> Vec<String> {
    raw.iter()
        .map(|s| s.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase())
        .collect()
}

/// Extracts the left-hand-side variable name from each cleaned function
/// string: the prefix up to the first `=`, or the whole string if no `=`
/// is present.
///
/// Fails `MISVN` on a blank prefix, `VARIN` if the prefix is not
/// entirely consumed by a single identifier, `DUVAR` on the first name
/// that repeats an earlier one.
pub fn extract_lhs_names(cleaned: &[String]) -> Result<Vec<String>, CompileError> {
    let mut names = Vec::with_capacity(cleaned.len());
    for (index, function) in cleaned.iter().enumerate() {
        let prefix = match function.find('=') {
            Some(pos) => &function[..pos],
            None => &function[..],
        };
        if prefix.is_empty() {
            return Err(CompileError::MissingVariableName { index });
        }
        match parse_identifier(prefix, 0) {
            Some((name, end)) if end == prefix.len() => names.push(name.to_string()),
            _ => {
                return Err(CompileError::InvalidVariableName {
                    index,
                    fragment: prefix.to_string(),
                })
            }
        }
    }

    for index in 0..names.len() {
        if names[..index].contains(&names[index]) {
            return Err(CompileError::DuplicateVariableName {
                index,
                name: names[index].clone(),
            });
        }
    }

    Ok(names)
}

/// Extracts the right-hand-side expression from each cleaned function
/// string. `Ok(None)` means the direction is undefined: no function has
/// an `=` anywhere. A mixed population (some with, some without) fails
/// `NORHS` at the first function lacking one; an `=` with nothing after
/// it also fails `NORHS` at that index.
pub fn extract_rhs(cleaned: &[String]) -> Result<Option<Vec<String>>, CompileError> {
    if cleaned.iter().all(|f| !f.contains('=')) {
        return Ok(None);
    }

    let mut rhs = Vec::with_capacity(cleaned.len());
    for (index, function) in cleaned.iter().enumerate() {
        match function.find('=') {
            Some(pos) if pos + 1 < function.len() => rhs.push(function[pos + 1..].to_string()),
            _ => return Err(CompileError::MissingRhs { index }),
        }
    }
    Ok(Some(rhs))
}

/// The compiled programs for one transform direction, plus the
/// high-water stack size recorded across all of them (stored alongside
/// the programs on the owning `MathMap`, per §3's "two stack sizes").
pub struct CompiledDirection {
    pub programs: Vec<Program>,
    pub stacksize: usize,
}

/// Compiles every RHS expression in `rhs` against the free-variable
/// namespace `vars` (the other direction's LHS names), in order.
pub fn compile_direction(rhs: &[String], vars: &[String]) -> Result<CompiledDirection, CompileError> {
    let mut programs = Vec::with_capacity(rhs.len());
    let mut stacksize = 1;
    for expr in rhs {
        let tokens = tokenize(expr, vars)?;
        let program = schedule(&tokens);
        stacksize = stacksize.max(program.stacksize());
        programs.push(program);
    }
    Ok(CompiledDirection { programs, stacksize })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cleaning_strips_embedded_whitespace_and_lowercases() {
        let cleaned = clean_functions(&["  Y = X + 1 "]);
        assert_eq!(cleaned, vec!["y=x+1".to_string()]);
    }

    #[test]
    fn cleaning_is_idempotent() {
        let once = clean_functions(&["Y = X + 1"]);
        let twice = clean_functions(&[once[0].as_str()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn lhs_extraction_rejects_blank_name() {
        let cleaned = vec!["=x".to_string()];
        let err = extract_lhs_names(&cleaned).unwrap_err();
        assert_eq!(err.code(), "MISVN");
    }

    #[test]
    fn lhs_extraction_rejects_non_identifier_prefix() {
        let cleaned = vec!["1y=x".to_string()];
        let err = extract_lhs_names(&cleaned).unwrap_err();
        assert_eq!(err.code(), "VARIN");
    }

    #[test]
    fn lhs_extraction_rejects_duplicates() {
        let cleaned = vec!["y=a".to_string(), "y=b".to_string()];
        let err = extract_lhs_names(&cleaned).unwrap_err();
        assert_eq!(err.code(), "DUVAR");
    }

    #[test]
    fn lhs_extraction_without_equals_uses_whole_string() {
        let cleaned = vec!["y".to_string(), "x".to_string()];
        let names = extract_lhs_names(&cleaned).unwrap();
        assert_eq!(names, vec!["y".to_string(), "x".to_string()]);
    }

    #[test]
    fn rhs_extraction_is_none_when_direction_undefined() {
        let cleaned = vec!["y".to_string(), "x".to_string()];
        assert_eq!(extract_rhs(&cleaned).unwrap(), None);
    }

    #[test]
    fn rhs_extraction_rejects_mixed_population() {
        let cleaned = vec!["y=x".to_string(), "z".to_string()];
        let err = extract_rhs(&cleaned).unwrap_err();
        assert_eq!(err.code(), "NORHS");
    }

    #[test]
    fn rhs_extraction_rejects_empty_rhs() {
        let cleaned = vec!["y=".to_string()];
        let err = extract_rhs(&cleaned).unwrap_err();
        assert_eq!(err.code(), "NORHS");
    }

    #[test]
    fn compile_direction_tracks_the_high_water_mark_across_functions() {
        let rhs = vec!["a+b".to_string(), "max(a,b,c)".to_string()];
        let vars = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let compiled = compile_direction(&rhs, &vars).unwrap();
        assert_eq!(compiled.programs.len(), 2);
        assert_eq!(compiled.stacksize, 3);
    }
}
