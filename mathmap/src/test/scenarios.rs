use super::*;

#[test]
fn identity_1d() {
    let map = compile(1, 1, &["y = x"], &["x = y"]);
    let x = [1.0, 2.0, BAD, 4.0];
    let out = forward(&map, &[&x], 4, 1);
    assert_eq!(out[0], vec![1.0, 2.0, BAD, 4.0]);
}

#[test]
fn variadic_and_safety() {
    let map = compile(3, 1, &["z = max(a, b, c)"], &["a=z", "b=z", "c=z"]);
    let a = [1.0, 9.0, 3.0];
    let b = [2.0, 2.0, 2.0];
    let c = [3.0, 5.0, 7.0];
    let out = forward(&map, &[&a, &b, &c], 3, 1);
    assert_eq!(out[0], vec![3.0, 9.0, 7.0]);
}

#[test]
fn overflow_to_bad() {
    let map = compile(1, 1, &["y = x*x"], &["x=y"]);
    let x = [1e200];
    let out = forward(&map, &[&x], 1, 1);
    assert_eq!(out[0], vec![BAD]);
}

#[test]
fn domain_to_bad() {
    let map = compile(1, 1, &["y = sqrt(x)"], &["x = y*y"]);
    let x = [4.0, -1.0, 0.0];
    let out = forward(&map, &[&x], 3, 1);
    assert_eq!(out[0], vec![2.0, BAD, 0.0]);
}

#[test]
fn degrees_and_radians() {
    let map = compile(1, 1, &["y = sind(x)"], &["x = asind(y)"]);
    let x = [0.0, 30.0, 90.0];
    let out = forward(&map, &[&x], 3, 1);
    assert!((out[0][0] - 0.0).abs() < 1e-9);
    assert!((out[0][1] - 0.5).abs() < 1e-9);
    assert!((out[0][2] - 1.0).abs() < 1e-9);
}

#[test]
fn trailing_operator_reports_miopa() {
    let err = MathMap::new(1, 1, &["y = 1 +"], &["x = y"], false, &[]).unwrap_err();
    match err {
        Error::Compile(ce) => {
            assert_eq!(ce.code(), "MIOPA");
            assert!(format!("{}", ce).contains('+'));
        }
        _ => panic!("expected a compile error"),
    }
}

#[test]
fn duplicate_lhs_reports_duvar() {
    let err = MathMap::new(2, 1, &["y = a", "y = b"], &["a=y", "b=y"], false, &[]).unwrap_err();
    match err {
        Error::Compile(ce) => assert_eq!(ce.code(), "DUVAR"),
        _ => panic!("expected a compile error"),
    }
}

#[test]
fn both_directions_undefined_when_no_function_has_an_rhs() {
    let map = compile(1, 1, &["y"], &["x"]);
    assert!(!map.forward_defined());
    assert!(!map.inverse_defined());

    let x = [1.0];
    let mut y = [0.0];
    let mut refs: Vec<&mut [f64]> = vec![&mut y];
    let err = map.transform(&[&x], 1, true, &mut refs).unwrap_err();
    assert_eq!(err, Error::DirectionUndefined);
}
