//! Typed builder: turns a rearranged, kind-checked parse tree into a `ScalarExpr` (spec §4.6).
//!
//! Dispatch mirrors `ASTNode.cpp`'s `make_scalar_function`/`make_vector_function` pair: one
//! function per typed family, each matching on the node's grammar symbol and, for the
//! kind-ambiguous operators (`*`, `/`), on its children's inferred kinds.

use crate::error::BuildError;
use crate::kind::{self, Kind};
use crate::scalar_expr::ScalarExpr;
use crate::symbol::Symbol;
use crate::vector_expr::VectorExpr;
use crate::ASTNode;

type Node = ASTNode<Symbol>;

/// Build the typed expression tree for `tree`, which must be the root of a parsed-and-rearranged
/// expression. Runs kind inference first (§4.5) and propagates any [`crate::error::KindError`]
/// as a [`BuildError::Kind`].
pub fn build_function(tree: &ASTNode<Symbol>) -> Result<ScalarExpr, BuildError> {
    kind::infer_root(tree)?;
    build_scalar(tree)
}

fn content(node: &Node) -> &str {
    node.content
        .as_deref()
        .expect("leaf-bearing symbol must carry captured text")
}

fn parse_index(node: &Node) -> usize {
    content(node)
        .parse()
        .expect("grammar only emits decimal digits for an index")
}

fn build_scalar(node: &Node) -> Result<ScalarExpr, BuildError> {
    match node.node {
        Symbol::Number => {
            let lexeme = content(node).to_string();
            let value: f64 = lexeme
                .parse()
                .expect("grammar only emits well-formed numeric lexemes");
            Ok(ScalarExpr::ScalarNumber(lexeme, value))
        }
        Symbol::ScalarVariable | Symbol::ScalarConstant => {
            Ok(ScalarExpr::ScalarConstant(content(node).to_string()))
        }
        Symbol::IndexedVectorVariable => {
            let vector = build_vector(node.child(0))?;
            let index = parse_index(node.child(1));
            Ok(ScalarExpr::IndexedVectorComponent(Box::new(vector), index))
        }
        Symbol::PrefixPlus => Ok(ScalarExpr::ScalarPrefixPlus(Box::new(build_scalar(
            node.child(0),
        )?))),
        Symbol::PrefixMinus => Ok(ScalarExpr::ScalarPrefixMinus(Box::new(build_scalar(
            node.child(0),
        )?))),
        Symbol::Plus => Ok(ScalarExpr::ScalarAdd(
            Box::new(build_scalar(node.child(0))?),
            Box::new(build_scalar(node.child(1))?),
        )),
        Symbol::Minus => Ok(ScalarExpr::ScalarSub(
            Box::new(build_scalar(node.child(0))?),
            Box::new(build_scalar(node.child(1))?),
        )),
        Symbol::Multiply => Ok(ScalarExpr::ScalarMul(
            Box::new(build_scalar(node.child(0))?),
            Box::new(build_scalar(node.child(1))?),
        )),
        Symbol::Divide => Ok(ScalarExpr::ScalarDiv(
            Box::new(build_scalar(node.child(0))?),
            Box::new(build_scalar(node.child(1))?),
        )),
        Symbol::UnaryS2SFunctionName => match content(node) {
            "exp" => Ok(ScalarExpr::Exp(Box::new(build_scalar(node.child(0))?))),
            other => Err(BuildError::NotImplemented(other.to_string())),
        },
        Symbol::UnaryV2SFunctionName => match content(node) {
            "norm2" => Ok(ScalarExpr::Norm2(Box::new(build_vector(node.child(0))?))),
            other => Err(BuildError::NotImplemented(other.to_string())),
        },
        Symbol::BinaryV2SFunctionName => match content(node) {
            "dot" => Ok(ScalarExpr::Dot(
                Box::new(build_vector(node.child(0))?),
                Box::new(build_vector(node.child(1))?),
            )),
            other => Err(BuildError::NotImplemented(other.to_string())),
        },
        Symbol::NullaryA2SFunctionName => Err(BuildError::NotImplemented(content(node).to_string())),
        // Declared in two function classes; not implemented in either (§9.3).
        Symbol::AmbiguousAbsFunctionName => Err(BuildError::NotImplemented("abs".to_string())),

        Symbol::VectorVariable
        | Symbol::UnaryV2VFunctionName
        | Symbol::Index
        | Symbol::Term
        | Symbol::Expression => {
            unreachable!("{:?} can never be kind-inferred as Scalar here", node.node)
        }
    }
}

fn build_vector(node: &Node) -> Result<VectorExpr, BuildError> {
    match node.node {
        Symbol::VectorVariable => match content(node) {
            "x" => Ok(VectorExpr::VectorIdentity),
            other => Err(BuildError::NotImplemented(other.to_string())),
        },
        Symbol::PrefixPlus => Ok(VectorExpr::VectorPrefixPlus(Box::new(build_vector(
            node.child(0),
        )?))),
        Symbol::PrefixMinus => Ok(VectorExpr::VectorPrefixMinus(Box::new(build_vector(
            node.child(0),
        )?))),
        Symbol::Plus => Ok(VectorExpr::VectorAdd(
            Box::new(build_vector(node.child(0))?),
            Box::new(build_vector(node.child(1))?),
        )),
        Symbol::Minus => Ok(VectorExpr::VectorSub(
            Box::new(build_vector(node.child(0))?),
            Box::new(build_vector(node.child(1))?),
        )),
        Symbol::Multiply => {
            let a_kind = kind::infer(node.child(0)).map_err(BuildError::from)?;
            let b_kind = kind::infer(node.child(1)).map_err(BuildError::from)?;
            match (a_kind, b_kind) {
                (Kind::Scalar, Kind::Vectorial) => Ok(VectorExpr::ScalarVectorProduct(
                    Box::new(build_scalar(node.child(0))?),
                    Box::new(build_vector(node.child(1))?),
                )),
                (Kind::Vectorial, Kind::Scalar) => Ok(VectorExpr::ScalarVectorProduct(
                    Box::new(build_scalar(node.child(1))?),
                    Box::new(build_vector(node.child(0))?),
                )),
                (a, b) => unreachable!(
                    "kind inference already rejects '*' combinations other than Scalar/Vectorial, got {:?}/{:?}",
                    a, b
                ),
            }
        }
        Symbol::Divide => Ok(VectorExpr::VectorScalarDivide(
            Box::new(build_vector(node.child(0))?),
            Box::new(build_scalar(node.child(1))?),
        )),
        Symbol::UnaryV2VFunctionName => Err(BuildError::NotImplemented(content(node).to_string())),
        Symbol::AmbiguousAbsFunctionName => Err(BuildError::NotImplemented("abs".to_string())),

        Symbol::Number
        | Symbol::ScalarVariable
        | Symbol::ScalarConstant
        | Symbol::IndexedVectorVariable
        | Symbol::UnaryS2SFunctionName
        | Symbol::UnaryV2SFunctionName
        | Symbol::BinaryV2SFunctionName
        | Symbol::NullaryA2SFunctionName
        | Symbol::Index
        | Symbol::Term
        | Symbol::Expression => {
            unreachable!("{:?} can never be kind-inferred as Vectorial here", node.node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse;

    fn build(text: &str) -> Result<ScalarExpr, BuildError> {
        let tree = parse(text).expect("parse should succeed");
        build_function(&tree)
    }

    #[test]
    fn builds_and_prints_back_a_plain_number() {
        assert_eq!(build("2").unwrap().to_string(), "2");
    }

    #[test]
    fn sqrt_is_not_implemented() {
        assert!(matches!(build("sqrt(2)"), Err(BuildError::NotImplemented(_))));
    }

    #[test]
    fn abs_is_not_implemented() {
        assert!(matches!(build("abs(2)"), Err(BuildError::NotImplemented(_))));
    }

    #[test]
    fn y_vector_variable_is_not_implemented() {
        assert!(matches!(build("dot(y,y)"), Err(BuildError::NotImplemented(_))));
    }
}
