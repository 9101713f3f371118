use super::*;

/// Builds a [`MathMap`] and asserts it compiled; panics with the error
/// otherwise, so a failing scenario test points straight at the
/// offending line instead of an opaque `unwrap`.
fn compile(nin: usize, nout: usize, fwd: &[&str], inv: &[&str]) -> MathMap {
    MathMap::new(nin, nout, fwd, inv, false, &[]).expect("expected this map to compile")
}

fn forward(map: &MathMap, inputs: &[&[f64]], npoint: usize, nout: usize) -> Vec<Vec<f64>> {
    let mut outputs: Vec<Vec<f64>> = (0..nout).map(|_| vec![0.0; npoint]).collect();
    let mut refs: Vec<&mut [f64]> = outputs.iter_mut().map(Vec::as_mut_slice).collect();
    map.transform(inputs, npoint, true, &mut refs).expect("expected transform to succeed");
    drop(refs);
    outputs
}

mod scenarios;
mod invariants;
