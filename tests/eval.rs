//! Evaluation scenarios, mirroring `examples/original_source/tests/test_eval.cpp`'s
//! `GENERATE_COPY(table<...>)` of `(expression, expected_value)` pairs.

const X: [f64; 3] = [1.0, 2.0, 3.0];

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm2(a: [f64; 3]) -> f64 {
    dot(a, a)
}

fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn prod(a: f64, b: [f64; 3]) -> [f64; 3] {
    [a * b[0], a * b[1], a * b[2]]
}

fn eval(expr: &str) -> f64 {
    let tree = vexpr::parse(expr).unwrap_or_else(|e| panic!("{expr} should parse: {e}"));
    let f = vexpr::build_function(&tree).unwrap_or_else(|e| panic!("{expr} should build: {e}"));
    f.apply(&X).unwrap_or_else(|e| panic!("{expr} should evaluate: {e}"))
}

#[test]
fn evaluates_expressions() {
    let e = 1.0f64.exp();

    let cases: &[(&str, f64)] = &[
        ("2", 2.0),
        ("2+2", 4.0),
        ("2-2*2", 2.0 - 2.0 * 2.0),
        ("2-(2./6+2)*4", 2.0 - (2.0 / 6.0 + 2.0) * 4.0),
        ("-(+2)", -2.0),
        ("exp(2)", 2.0f64.exp()),
        ("dot(x,x)", dot(X, X)),
        ("norm2(x)", norm2(X)),
        ("dot(x-x,x+x*2)", 0.0),
        (
            "exp(-dot(x-2*x,-x)/x_2/e)",
            (-dot(add(X, prod(-2.0, X)), prod(-1.0, X)) / X[2] / e).exp(),
        ),
    ];

    for (expr, expected) in cases {
        assert_eq!(eval(expr), *expected, "evaluation of {expr} should be {expected}");
    }
}
