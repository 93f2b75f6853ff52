//! Parse-and-print round trips, mirroring `examples/original_source/tests/test_parse.cpp`.

fn without_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn echoes_valid_input_expressions() {
    let cases = [
        "exp(2)",
        "exp(-pi*a-e*norm2(x)+dot(x-y,x)*x_2)",
        "exp ( -pi * a - e * norm2 ( x ) + dot ( x - y , x ) * x_2 ) ",
    ];
    for expr in cases {
        let tree = vexpr::parse(expr).unwrap_or_else(|e| panic!("{expr} should parse: {e}"));
        let printed = tree_to_string(&tree);
        assert_eq!(printed, without_whitespace(expr));
    }
}

#[test]
fn rejects_invalid_input_expressions() {
    // invalid double prefix-minus
    assert!(vexpr::parse("exp(--2)").is_err());
}

#[test]
fn vector_expression_parses_but_is_not_a_scalar_expression() {
    // "x" parses fine as a bare vector factor; it only fails once build_function demands
    // a scalar root (see tests/eval.rs / tests/diff.rs equivalents in lib.rs unit tests).
    let tree = vexpr::parse("x").unwrap();
    assert!(vexpr::build_function(&tree).is_err());
}

#[test]
fn scalar_function_rejects_a_vector_argument() {
    let tree = vexpr::parse("exp(x)").unwrap();
    assert!(vexpr::build_function(&tree).is_err());
}

/// Re-print a raw, untyped parse tree without going through the typed builder, so parse-only
/// expressions (containing names the builder doesn't implement, like `a`) can still be checked.
fn tree_to_string(tree: &vexpr::ASTNode<vexpr::Symbol>) -> String {
    use vexpr::Symbol;

    fn go(node: &vexpr::ASTNode<Symbol>, out: &mut String) {
        match node.node {
            Symbol::Number
            | Symbol::ScalarVariable
            | Symbol::ScalarConstant
            | Symbol::VectorVariable => {
                out.push_str(node.content.as_deref().unwrap());
            }
            Symbol::IndexedVectorVariable => {
                go(&node.children[0], out);
                out.push('_');
                go(&node.children[1], out);
            }
            Symbol::Index => out.push_str(node.content.as_deref().unwrap()),
            Symbol::PrefixPlus => {
                out.push('+');
                go(&node.children[0], out);
            }
            Symbol::PrefixMinus => {
                out.push('-');
                go(&node.children[0], out);
            }
            Symbol::Plus | Symbol::Minus | Symbol::Multiply | Symbol::Divide => {
                let op = match node.node {
                    Symbol::Plus => '+',
                    Symbol::Minus => '-',
                    Symbol::Multiply => '*',
                    Symbol::Divide => '/',
                    _ => unreachable!(),
                };
                go(&node.children[0], out);
                out.push(op);
                go(&node.children[1], out);
            }
            Symbol::NullaryA2SFunctionName
            | Symbol::UnaryS2SFunctionName
            | Symbol::UnaryV2SFunctionName
            | Symbol::UnaryV2VFunctionName
            | Symbol::BinaryV2SFunctionName
            | Symbol::AmbiguousAbsFunctionName => {
                out.push_str(node.content.as_deref().unwrap());
                out.push('(');
                for (i, child) in node.children.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    go(child, out);
                }
                out.push(')');
            }
            Symbol::Term | Symbol::Expression => {
                unreachable!("wrapper symbols never survive rearrange")
            }
        }
    }

    let mut out = String::new();
    go(tree, &mut out);
    out
}
