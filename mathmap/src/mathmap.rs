//! The top-level bidirectional coordinate transformation, tying the
//! front-end glue, the compiler, and the VM together. Per §3, §4.7, §6.

use crate::compiler::{clean_functions, compile_direction, extract_lhs_names, extract_rhs, CompiledDirection};
use crate::error::{Error, Result};
use crate::vm;

/// A tri-state simplification hint, mirroring the upstream
/// `GetSimpFI`/`SetSimpFI`/`ClearSimpFI`/`TestSimpFI` quartet (and its
/// `*IF` counterpart) without implementing the merge logic those
/// functions were meant to feed — that remains an upstream TODO, and
/// this crate only stores and round-trips the hint.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SimplificationHint {
    Unset,
    False,
    True,
}

impl Default for SimplificationHint {
    fn default() -> Self {
        SimplificationHint::Unset
    }
}

/// A compiled, bidirectional coordinate transformation.
///
/// Construct with [`MathMap::new`] from raw `variable = expression`
/// function text; evaluate with [`MathMap::transform`].
pub struct MathMap {
    nin: usize,
    nout: usize,
    invert: bool,
    fwd_source: Vec<String>,
    inv_source: Vec<String>,
    fwd: Option<CompiledDirection>,
    inv: Option<CompiledDirection>,
    simp_fi: SimplificationHint,
    simp_if: SimplificationHint,
}

impl MathMap {
    /// Cleans, extracts, and compiles both directions.
    ///
    /// `invert` is the caller's intrinsic invert flag (owned by the
    /// parent Mapping abstraction, out of scope here); it is recorded
    /// verbatim and consulted only by [`MathMap::transform`].
    /// `options` recognises `simpfi=0|1` and `simpif=0|1`; unrecognised
    /// keys are ignored.
    pub fn new(
        nin: usize,
        nout: usize,
        fwd: &[&str],
        inv: &[&str],
        invert: bool,
        options: &[&str],
    ) -> Result<MathMap> {
        debug_assert_eq!(fwd.len(), nout);
        debug_assert_eq!(inv.len(), nin);

        let fwd_clean = clean_functions(fwd);
        let inv_clean = clean_functions(inv);

        let inv_names = extract_lhs_names(&inv_clean)?;
        let fwd_names = extract_lhs_names(&fwd_clean)?;

        let fwd_compiled = match extract_rhs(&fwd_clean)? {
            Some(rhs) => Some(compile_direction(&rhs, &inv_names)?),
            None => None,
        };
        let inv_compiled = match extract_rhs(&inv_clean)? {
            Some(rhs) => Some(compile_direction(&rhs, &fwd_names)?),
            None => None,
        };

        let (simp_fi, simp_if) = parse_options(options);

        Ok(MathMap {
            nin,
            nout,
            invert,
            fwd_source: fwd_clean,
            inv_source: inv_clean,
            fwd: fwd_compiled,
            inv: inv_compiled,
            simp_fi,
            simp_if,
        })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.nout
    }

    /// Whether the forward direction (output coordinates as functions of
    /// input coordinates) has a compiled program.
    pub fn forward_defined(&self) -> bool {
        self.fwd.is_some()
    }

    /// Whether the inverse direction has a compiled program.
    pub fn inverse_defined(&self) -> bool {
        self.inv.is_some()
    }

    pub fn simp_fi(&self) -> SimplificationHint {
        self.simp_fi
    }

    pub fn simp_if(&self) -> SimplificationHint {
        self.simp_if
    }

    pub fn set_simp_fi(&mut self, hint: SimplificationHint) {
        self.simp_fi = hint;
    }

    pub fn set_simp_if(&mut self, hint: SimplificationHint) {
        self.simp_if = hint;
    }

    pub fn clear_simp_fi(&mut self) {
        self.simp_fi = SimplificationHint::Unset;
    }

    pub fn clear_simp_if(&mut self) {
        self.simp_if = SimplificationHint::Unset;
    }

    /// Evaluates this map against `npoint` points.
    ///
    /// `forward_flag` is XORed with the intrinsic invert flag recorded
    /// at construction to choose the actual direction executed. `inputs`
    /// must hold one slice per input coordinate of the chosen direction
    /// (the inverse side's declared variables when running forward, and
    /// vice versa); `outputs` must hold one mutable slice per output
    /// coordinate, each of length `npoint`.
    pub fn transform(
        &self,
        inputs: &[&[f64]],
        npoint: usize,
        forward_flag: bool,
        outputs: &mut [&mut [f64]],
    ) -> Result<()> {
        let run_forward = self.invert ^ forward_flag;
        let compiled = if run_forward { self.fwd.as_ref() } else { self.inv.as_ref() };
        let compiled = compiled.ok_or(Error::DirectionUndefined)?;

        for (program, output) in compiled.programs.iter().zip(outputs.iter_mut()) {
            vm::execute(program, inputs, npoint, output)?;
        }
        Ok(())
    }

    /// Serialises this map to the `F<k>`/`I<k>`/`SimpFI`/`SimpIF` textual
    /// record form. The channel the records are written to is the
    /// caller's concern; this only produces the lines.
    pub fn to_records(&self) -> Vec<String> {
        let mut records = Vec::with_capacity(self.fwd_source.len() + self.inv_source.len() + 2);
        for (k, f) in self.fwd_source.iter().enumerate() {
            records.push(format!("F{}={}", k + 1, f));
        }
        for (k, f) in self.inv_source.iter().enumerate() {
            records.push(format!("I{}={}", k + 1, f));
        }
        match self.simp_fi {
            SimplificationHint::Unset => {}
            SimplificationHint::False => records.push("SimpFI=0".to_string()),
            SimplificationHint::True => records.push("SimpFI=1".to_string()),
        }
        match self.simp_if {
            SimplificationHint::Unset => {}
            SimplificationHint::False => records.push("SimpIF=0".to_string()),
            SimplificationHint::True => records.push("SimpIF=1".to_string()),
        }
        records
    }

    /// Reconstructs a `MathMap` from records produced by
    /// [`MathMap::to_records`], recompiling both directions from the
    /// stored source text. `nin`/`nout`/`invert` come from the parent
    /// Mapping's own dimensionality and inverted flag, as at construction.
    pub fn from_records(records: &[&str], nin: usize, nout: usize, invert: bool) -> Result<MathMap> {
        let mut fwd: Vec<Option<String>> = vec![None; nout];
        let mut inv: Vec<Option<String>> = vec![None; nin];
        let mut simp_fi = SimplificationHint::Unset;
        let mut simp_if = SimplificationHint::Unset;

        for line in records {
            if let Some(rest) = line.strip_prefix('F') {
                if let Some((index, value)) = split_indexed_record(rest) {
                    if index >= 1 && index <= nout {
                        fwd[index - 1] = Some(value.to_string());
                    }
                }
            } else if let Some(rest) = line.strip_prefix('I') {
                if let Some((index, value)) = split_indexed_record(rest) {
                    if index >= 1 && index <= nin {
                        inv[index - 1] = Some(value.to_string());
                    }
                }
            } else if let Some(value) = line.strip_prefix("SimpFI=") {
                simp_fi = parse_bool_hint(value);
            } else if let Some(value) = line.strip_prefix("SimpIF=") {
                simp_if = parse_bool_hint(value);
            }
        }

        let fwd: Vec<String> = fwd.into_iter().map(|f| f.unwrap_or_default()).collect();
        let inv: Vec<String> = inv.into_iter().map(|f| f.unwrap_or_default()).collect();

        let fwd_refs: Vec<&str> = fwd.iter().map(String::as_str).collect();
        let inv_refs: Vec<&str> = inv.iter().map(String::as_str).collect();

        let mut map = MathMap::new(nin, nout, &fwd_refs, &inv_refs, invert, &[])?;
        map.simp_fi = simp_fi;
        map.simp_if = simp_if;
        Ok(map)
    }
}

fn split_indexed_record(rest: &str) -> Option<(usize, &str)> {
    let eq = rest.find('=')?;
    let index: usize = rest[..eq].parse().ok()?;
    Some((index, &rest[eq + 1..]))
}

fn parse_bool_hint(value: &str) -> SimplificationHint {
    match value {
        "1" => SimplificationHint::True,
        "0" => SimplificationHint::False,
        _ => SimplificationHint::Unset,
    }
}

fn parse_options(options: &[&str]) -> (SimplificationHint, SimplificationHint) {
    let mut simp_fi = SimplificationHint::Unset;
    let mut simp_if = SimplificationHint::Unset;
    for option in options {
        if let Some(eq) = option.find('=') {
            let (key, value) = (&option[..eq], &option[eq + 1..]);
            match key {
                "simpfi" => simp_fi = parse_bool_hint(value),
                "simpif" => simp_if = parse_bool_hint(value),
                _ => {}
            }
        }
    }
    (simp_fi, simp_if)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::BAD;

    fn run_forward(map: &MathMap, inputs: &[&[f64]], npoint: usize, nout: usize) -> Vec<Vec<f64>> {
        let mut outputs: Vec<Vec<f64>> = (0..nout).map(|_| vec![0.0; npoint]).collect();
        {
            let mut refs: Vec<&mut [f64]> = outputs.iter_mut().map(|v| v.as_mut_slice()).collect();
            map.transform(inputs, npoint, true, &mut refs).unwrap();
        }
        outputs
    }

    #[test]
    fn identity_map_round_trips() {
        let map = MathMap::new(1, 1, &["y = x"], &["x = y"], false, &[]).unwrap();
        let x = [1.0, 2.0, BAD, 4.0];
        let out = run_forward(&map, &[&x], 4, 1);
        assert_eq!(out[0], vec![1.0, 2.0, BAD, 4.0]);
    }

    #[test]
    fn variadic_max_transform() {
        let map = MathMap::new(
            3,
            1,
            &["z = max(a, b, c)"],
            &["a=z", "b=z", "c=z"],
            false,
            &[],
        )
        .unwrap();
        let a = [1.0, 9.0, 3.0];
        let b = [2.0, 2.0, 2.0];
        let c = [3.0, 5.0, 7.0];
        let out = run_forward(&map, &[&a, &b, &c], 3, 1);
        assert_eq!(out[0], vec![3.0, 9.0, 7.0]);
    }

    #[test]
    fn trailing_operator_is_a_compile_error() {
        let err = MathMap::new(1, 1, &["y = 1 +"], &["x = y"], false, &[]).unwrap_err();
        match err {
            Error::Compile(ce) => assert_eq!(ce.code(), "MIOPA"),
            _ => panic!("expected a compile error"),
        }
    }

    #[test]
    fn duplicate_lhs_is_a_compile_error() {
        let err = MathMap::new(2, 1, &["y = a", "y = b"], &["a=y", "b=y"], false, &[]).unwrap_err();
        match err {
            Error::Compile(ce) => assert_eq!(ce.code(), "DUVAR"),
            _ => panic!("expected a compile error"),
        }
    }

    #[test]
    fn undefined_direction_fails_transform_cleanly() {
        let map = MathMap::new(1, 1, &["y"], &["x"], false, &[]).unwrap();
        assert!(!map.forward_defined());
        assert!(!map.inverse_defined());
        let x = [1.0];
        let mut out = vec![0.0; 1];
        let mut refs: Vec<&mut [f64]> = vec![out.as_mut_slice()];
        let err = map.transform(&[&x], 1, true, &mut refs).unwrap_err();
        assert_eq!(err, Error::DirectionUndefined);
        let _ = &mut out;
    }

    #[test]
    fn invert_flag_flips_direction() {
        let map = MathMap::new(1, 1, &["y = x*2"], &["x = y"], true, &[]).unwrap();
        // invert == true, forward_flag == true -> XOR selects the inverse
        // program ("x = y"), which is an identity on the supplied input.
        let y = [4.0];
        let out = run_forward(&map, &[&y], 1, 1);
        assert_eq!(out[0], vec![4.0]);
    }

    #[test]
    fn records_round_trip() {
        let map = MathMap::new(1, 1, &["y=x"], &["x=y"], false, &["simpfi=1"]).unwrap();
        let records = map.to_records();
        let refs: Vec<&str> = records.iter().map(String::as_str).collect();
        let reloaded = MathMap::from_records(&refs, 1, 1, false).unwrap();
        assert_eq!(reloaded.simp_fi(), SimplificationHint::True);
        let x = [5.0];
        let out = run_forward(&reloaded, &[&x], 1, 1);
        assert_eq!(out[0], vec![5.0]);
    }
}
