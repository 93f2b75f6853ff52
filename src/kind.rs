//! Kind inference: a single recursive pass over the rearranged parse tree that tags every node
//! `Scalar` or `Vectorial` and rejects incompatible operand combinations (spec §4.5).
//!
//! The original grammar writes the inferred kind onto a mutable field of the parse node itself
//! (`node.m_kind`). This crate's [`ASTNode`] is shared with the untyped parser and keeping it
//! kind-agnostic keeps that boundary clean, so here kind inference is a pure recursive function
//! instead: it is re-derived for a node's children whenever the typed builder (§4.6) needs to
//! know what it's dispatching on. Trees in this grammar are small, so recomputation costs
//! nothing that matters.

use crate::error::KindError;
use crate::symbol::Symbol;
use crate::ASTNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar,
    Vectorial,
}

/// Infer `node`'s kind, recursively validating every operator and function-call node beneath
/// it. Does not enforce the root-must-be-Scalar constraint; use [`infer_root`] at the top level.
pub fn infer(node: &ASTNode<Symbol>) -> Result<Kind, KindError> {
    match node.node {
        Symbol::ScalarVariable
        | Symbol::ScalarConstant
        | Symbol::Number
        | Symbol::Index
        | Symbol::IndexedVectorVariable => Ok(Kind::Scalar),
        Symbol::VectorVariable => Ok(Kind::Vectorial),

        Symbol::UnaryS2SFunctionName => {
            expect(infer(node.child(0))?, Kind::Scalar, "unary scalar function argument")?;
            Ok(Kind::Scalar)
        }
        Symbol::UnaryV2SFunctionName => {
            expect(
                infer(node.child(0))?,
                Kind::Vectorial,
                "unary vector->scalar function argument",
            )?;
            Ok(Kind::Scalar)
        }
        Symbol::UnaryV2VFunctionName => {
            expect(
                infer(node.child(0))?,
                Kind::Vectorial,
                "unary vector->vector function argument",
            )?;
            Ok(Kind::Vectorial)
        }
        Symbol::BinaryV2SFunctionName => {
            expect(
                infer(node.child(0))?,
                Kind::Vectorial,
                "binary vector function first argument",
            )?;
            expect(
                infer(node.child(1))?,
                Kind::Vectorial,
                "binary vector function second argument",
            )?;
            Ok(Kind::Scalar)
        }
        Symbol::NullaryA2SFunctionName => Ok(Kind::Scalar),
        // Pass-through: `abs`'s result kind mirrors its argument's, whichever that turns out to
        // be; the typed builder rejects it afterwards regardless (§4.6, §9.3).
        Symbol::AmbiguousAbsFunctionName => infer(node.child(0)),

        Symbol::PrefixPlus | Symbol::PrefixMinus => infer(node.child(0)),

        Symbol::Plus | Symbol::Minus => {
            let a = infer(node.child(0))?;
            let b = infer(node.child(1))?;
            if a != b {
                return Err(KindError::new(format!(
                    "{:?} requires both operands to have the same kind, found {:?} and {:?}",
                    node.node, a, b
                )));
            }
            Ok(a)
        }
        Symbol::Multiply => {
            let a = infer(node.child(0))?;
            let b = infer(node.child(1))?;
            match (a, b) {
                (Kind::Scalar, Kind::Scalar) => Ok(Kind::Scalar),
                (Kind::Scalar, Kind::Vectorial) | (Kind::Vectorial, Kind::Scalar) => {
                    Ok(Kind::Vectorial)
                }
                (Kind::Vectorial, Kind::Vectorial) => {
                    Err(KindError::new("'*' cannot combine two Vectorial operands"))
                }
            }
        }
        Symbol::Divide => {
            let a = infer(node.child(0))?;
            let b = infer(node.child(1))?;
            match (a, b) {
                (Kind::Scalar, Kind::Scalar) => Ok(Kind::Scalar),
                (Kind::Vectorial, Kind::Scalar) => Ok(Kind::Vectorial),
                (_, Kind::Vectorial) => {
                    Err(KindError::new("'/' cannot divide by a Vectorial operand"))
                }
            }
        }

        Symbol::Term | Symbol::Expression => {
            unreachable!("wrapper symbols do not survive rearrange")
        }
    }
}

/// Infer the kind of the whole tree, additionally enforcing that the root is Scalar (§4.5,
/// §6's "a bare `vector_expression` at the top level is a parse error" — surfaced here, after
/// parsing, as a `KindError`).
pub fn infer_root(node: &ASTNode<Symbol>) -> Result<Kind, KindError> {
    let kind = infer(node)?;
    if kind != Kind::Scalar {
        return Err(KindError::new(
            "top-level expression must be Scalar, found a bare vector expression",
        ));
    }
    Ok(kind)
}

fn expect(observed: Kind, required: Kind, what: &str) -> Result<(), KindError> {
    if observed == required {
        Ok(())
    } else {
        Err(KindError::new(format!(
            "{} must be {:?}, found {:?}",
            what, required, observed
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse;

    fn infer_text(text: &str) -> Result<Kind, KindError> {
        let tree = parse(text).expect("parse should succeed");
        infer_root(&tree)
    }

    #[test]
    fn number_is_scalar() {
        assert_eq!(infer_text("2").unwrap(), Kind::Scalar);
    }

    #[test]
    fn bare_vector_at_top_level_is_a_kind_error() {
        assert!(infer_text("x").is_err());
    }

    #[test]
    fn exp_of_vector_is_a_kind_error() {
        assert!(infer_text("exp(x)").is_err());
    }

    #[test]
    fn mixed_multiply_is_vectorial_but_root_must_still_be_scalar() {
        assert_eq!(infer_text("2*x_0").unwrap(), Kind::Scalar);
    }
}
