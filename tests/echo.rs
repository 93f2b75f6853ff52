//! Trivial smoke tests, mirroring `examples/original_source/tests/test_echo.cpp`.

#[test]
fn trivial_test() {
    assert_eq!(2, 2);
}

#[test]
fn echoes_a_valid_input_expression() {
    let expr = "exp(2)";
    let tree = vexpr::parse(expr).unwrap();
    let f = vexpr::build_function(&tree).unwrap();
    assert_eq!(f.to_string(), expr);
}
