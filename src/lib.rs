//! A small algebraic expression engine.
//!
//! Parses a mathematical expression mixing scalar and vector quantities, builds a
//! strongly-typed expression tree, and exposes evaluation, symbolic differentiation, and
//! precedence-aware pretty printing on that tree.
//!
//! # Pipeline
//!
//! ```text
//! parse(text)        -> ASTNode<Symbol>      (grammar + rearrange + collapse)
//! build_function(..) -> ScalarExpr           (kind inference + typed builder)
//! ScalarExpr::apply/diff/to_string
//! ```
//!
//! # Example
//!
//! ```
//! let tree = vexpr::parse("2*x_0").unwrap();
//! let f = vexpr::build_function(&tree).unwrap();
//! assert_eq!(f.to_string(), "2*x_0");
//! assert_eq!(f.apply(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
//! assert_eq!(f.diff(0).to_string(), "2*1+0*x_0");
//! ```
mod ast_node;
mod builder;
mod collapse;
mod error;
mod grammar;
mod kind;
mod priority;
mod rearrange;
mod scalar_expr;
mod symbol;
pub mod util;
mod vector_expr;

pub use builder::build_function;
pub use error::{BuildError, EvalError, KindError, ParseError};
pub use grammar::parse;
pub use kind::Kind;
pub use priority::PriorityLevel;
pub use scalar_expr::ScalarExpr;
pub use symbol::Symbol;
pub use vector_expr::VectorExpr;

/// Abstract syntax tree produced by [`parse`], generic over the symbol tag it carries. The
/// only instantiation used outside tests is `ASTNode<Symbol>`.
#[derive(Clone)]
pub struct ASTNode<TNode> {
    pub node: TNode,
    pub start: usize,
    pub end: usize,
    pub content: Option<String>,
    pub children: Vec<ASTNode<TNode>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_round_trip_and_evaluation() {
        let tree = parse("2*x_0").unwrap();
        let f = build_function(&tree).unwrap();
        assert_eq!(f.to_string(), "2*x_0");
        assert_eq!(f.apply(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
        assert_eq!(f.diff(0).to_string(), "2*1+0*x_0");
    }

    #[test]
    fn bare_vector_at_top_level_is_a_build_error() {
        let tree = parse("x").unwrap();
        assert!(build_function(&tree).is_err());
    }

    #[test]
    fn double_prefix_minus_does_not_parse() {
        assert!(parse("exp(--2)").is_err());
    }
}
