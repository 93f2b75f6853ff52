//! Differentiation scenarios, mirroring `examples/original_source/tests/test_diff.cpp`'s
//! `(expression, expected_diff_string, expected_diff_value)` table.

const X: [f64; 3] = [1.0, 2.0, 3.0];
const DIFF_INDEX: usize = 0;

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn build(expr: &str) -> vexpr::ScalarExpr {
    let tree = vexpr::parse(expr).unwrap_or_else(|e| panic!("{expr} should parse: {e}"));
    vexpr::build_function(&tree).unwrap_or_else(|e| panic!("{expr} should build: {e}"))
}

#[test]
fn differentiates_and_prints_and_evaluates() {
    let cases: &[(&str, &str, f64)] = &[
        ("2", "0", 0.0),
        ("pi", "0", 0.0),
        ("x_1", "0", 0.0),
        ("x_0", "1", 1.0),
        ("2*x_0", "2*1+0*x_0", 2.0),
        ("x_0*x_1", "x_0*0+1*x_1", X[1]),
        (
            "x_0*x_0+x_1*x_1",
            "x_0*1+1*x_0+x_1*0+0*x_1",
            2.0 * X[DIFF_INDEX],
        ),
        (
            "dot(x,x)",
            "dot(<x_0=1>,x)+dot(x,<x_0=1>)",
            2.0 * X[DIFF_INDEX],
        ),
        ("exp(x_0)", "exp(x_0)*1", X[DIFF_INDEX].exp()),
        (
            "exp(-0.5 * dot(x,x))",
            "exp(-0.5*dot(x,x))*(-(0.5*(dot(<x_0=1>,x)+dot(x,<x_0=1>))+0*dot(x,x)))",
            (-0.5 * dot(X, X)).exp() * -X[DIFF_INDEX],
        ),
        ("0", "0", 0.0),
    ];

    for (expr, expected_diff, expected_value) in cases {
        let f = build(expr);
        let df = f.diff(DIFF_INDEX);
        assert_eq!(
            df.to_string(),
            *expected_diff,
            "diff_0 of {expr} should print as {expected_diff}"
        );
        assert_eq!(
            df.apply(&X).unwrap(),
            *expected_value,
            "eval of diff_0 of {expr} should be {expected_value}"
        );
    }
}
