use super::*;

#[test]
fn balanced_nested_parentheses_compile() {
    let map = compile(1, 1, &["y = sqrt(abs((x+1)*(x-1)))"], &["x = y"]);
    assert!(map.forward_defined());
}

#[test]
fn transform_preserves_point_count() {
    let map = compile(1, 1, &["y = x + 1"], &["x = y - 1"]);
    for npoint in [0usize, 1, 5, 37] {
        let x = vec![2.0; npoint];
        let out = forward(&map, &[&x], npoint, 1);
        assert_eq!(out[0].len(), npoint);
    }
}

#[test]
fn bad_input_propagates_through_every_operator_kind() {
    let map = compile(1, 1, &["y = sqrt(abs(x) + 1)"], &["x = y"]);
    let x = [BAD];
    let out = forward(&map, &[&x], 1, 1);
    assert_eq!(out[0], vec![BAD]);
}

#[test]
fn determinism_same_source_same_inputs_same_outputs() {
    let map = compile(1, 1, &["y = sin(x) * 2"], &["x = y"]);
    let x = [0.3, 1.1, 2.9];
    let first = forward(&map, &[&x], 3, 1);
    let second = forward(&map, &[&x], 3, 1);
    assert_eq!(first, second);
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    let err = MathMap::new(1, 1, &["y = (x+1"], &["x = y"], false, &[]).unwrap_err();
    match err {
        Error::Compile(ce) => assert_eq!(ce.code(), "MRPAR"),
        _ => panic!("expected a compile error"),
    }
}

#[test]
fn cleaning_is_idempotent_end_to_end() {
    let map_a = compile(1, 1, &["  Y = X + 1 "], &["X = Y - 1"]);
    let map_b = compile(1, 1, &["y=x+1"], &["x=y-1"]);
    let x = [10.0];
    assert_eq!(forward(&map_a, &[&x], 1, 1), forward(&map_b, &[&x], 1, 1));
}
