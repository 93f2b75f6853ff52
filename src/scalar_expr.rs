//! The scalar half of the typed expression tree, and the family that every entry point
//! ultimately returns (spec §3, §4.6-§4.9). A tree rooted in `ScalarExpr` is the only shape
//! `build_function` can hand back, since the grammar requires a top-level scalar expression.

use std::fmt::{self, Display, Formatter};

use crate::error::EvalError;
use crate::priority::PriorityLevel;
use crate::vector_expr::VectorExpr;

#[derive(Debug, Clone)]
pub enum ScalarExpr {
    /// Keeps the originally-captured lexeme alongside the parsed value so printing round-trips
    /// (`"0.5"` stays `"0.5"`, not `"0.5000000"` or similar).
    ScalarNumber(String, f64),
    /// `"pi"` or `"e"`; any other name is a construction-time impossibility (the grammar never
    /// tags an unrecognized identifier as `scalar_constant`) but is still a possible `apply`-time
    /// NotImplemented per §4.7 if this type is ever constructed by a future caller.
    ScalarConstant(String),
    IndexedVectorComponent(Box<VectorExpr>, usize),
    ScalarPrefixPlus(Box<ScalarExpr>),
    ScalarPrefixMinus(Box<ScalarExpr>),
    ScalarAdd(Box<ScalarExpr>, Box<ScalarExpr>),
    ScalarSub(Box<ScalarExpr>, Box<ScalarExpr>),
    ScalarMul(Box<ScalarExpr>, Box<ScalarExpr>),
    ScalarDiv(Box<ScalarExpr>, Box<ScalarExpr>),
    Exp(Box<ScalarExpr>),
    Norm2(Box<VectorExpr>),
    Dot(Box<VectorExpr>, Box<VectorExpr>),
}

impl ScalarExpr {
    pub fn level(&self) -> PriorityLevel {
        match self {
            ScalarExpr::ScalarNumber(..)
            | ScalarExpr::ScalarConstant(_)
            | ScalarExpr::IndexedVectorComponent(..)
            | ScalarExpr::Exp(_)
            | ScalarExpr::Norm2(_)
            | ScalarExpr::Dot(..) => PriorityLevel::Value,
            ScalarExpr::ScalarDiv(..) => PriorityLevel::Quotient,
            ScalarExpr::ScalarMul(..) => PriorityLevel::Factor,
            ScalarExpr::ScalarPrefixPlus(_) | ScalarExpr::ScalarPrefixMinus(_) => {
                PriorityLevel::Prefixed
            }
            ScalarExpr::ScalarAdd(..) | ScalarExpr::ScalarSub(..) => PriorityLevel::Term,
        }
    }

    /// Evaluate against `x`, the dense vector of values bound to the vector variable (§4.7).
    pub fn apply(&self, x: &[f64]) -> Result<f64, EvalError> {
        match self {
            ScalarExpr::ScalarNumber(_, value) => Ok(*value),
            ScalarExpr::ScalarConstant(name) => match name.as_str() {
                "pi" => Ok(4.0 * f64::atan(1.0)),
                "e" => Ok(1.0f64.exp()),
                other => Err(EvalError::NotImplemented(other.to_string())),
            },
            ScalarExpr::IndexedVectorComponent(v, index) => {
                let values = v.apply(x)?;
                values.get(*index).copied().ok_or_else(|| {
                    EvalError::Bounds(format!(
                        "index {} out of range for length {}",
                        index,
                        values.len()
                    ))
                })
            }
            ScalarExpr::ScalarPrefixPlus(s) => s.apply(x),
            ScalarExpr::ScalarPrefixMinus(s) => Ok(-s.apply(x)?),
            ScalarExpr::ScalarAdd(a, b) => Ok(a.apply(x)? + b.apply(x)?),
            ScalarExpr::ScalarSub(a, b) => Ok(a.apply(x)? - b.apply(x)?),
            ScalarExpr::ScalarMul(a, b) => Ok(a.apply(x)? * b.apply(x)?),
            ScalarExpr::ScalarDiv(a, b) => Ok(a.apply(x)? / b.apply(x)?),
            ScalarExpr::Exp(s) => Ok(s.apply(x)?.exp()),
            ScalarExpr::Dot(u, v) => dot(u.apply(x)?, v.apply(x)?),
            // Known quirk (§4.7, §9.1): evaluates Dot(x, x) against the evaluation argument
            // itself, not Dot(v, v) against this node's own vector operand.
            ScalarExpr::Norm2(_) => dot(x.to_vec(), x.to_vec()),
        }
    }

    /// Symbolic derivative with respect to component `i` (spec §4.8). Never mutates `self`;
    /// retained operands are `clone()`d into the result.
    pub fn diff(&self, i: usize) -> ScalarExpr {
        match self {
            ScalarExpr::ScalarNumber(..) | ScalarExpr::ScalarConstant(_) => {
                ScalarExpr::ScalarNumber("0".to_string(), 0.0)
            }
            ScalarExpr::IndexedVectorComponent(v, k) => match v.as_ref() {
                // Only specialized when the vector operand is literally the identity `x`
                // (§9.2); the builder never constructs this variant over anything else.
                VectorExpr::VectorIdentity => {
                    if *k == i {
                        ScalarExpr::ScalarNumber("1".to_string(), 1.0)
                    } else {
                        ScalarExpr::ScalarNumber("0".to_string(), 0.0)
                    }
                }
                _ => ScalarExpr::ScalarNumber("0".to_string(), 0.0),
            },
            ScalarExpr::ScalarPrefixPlus(s) => s.diff(i),
            ScalarExpr::ScalarPrefixMinus(s) => {
                ScalarExpr::ScalarPrefixMinus(Box::new(s.diff(i)))
            }
            ScalarExpr::ScalarAdd(a, b) => {
                ScalarExpr::ScalarAdd(Box::new(a.diff(i)), Box::new(b.diff(i)))
            }
            ScalarExpr::ScalarSub(a, b) => {
                ScalarExpr::ScalarSub(Box::new(a.diff(i)), Box::new(b.diff(i)))
            }
            ScalarExpr::ScalarMul(a, b) => ScalarExpr::ScalarAdd(
                Box::new(ScalarExpr::ScalarMul(a.clone(), Box::new(b.diff(i)))),
                Box::new(ScalarExpr::ScalarMul(Box::new(a.diff(i)), b.clone())),
            ),
            ScalarExpr::ScalarDiv(a, b) => ScalarExpr::ScalarDiv(
                Box::new(ScalarExpr::ScalarSub(
                    Box::new(ScalarExpr::ScalarMul(b.clone(), Box::new(a.diff(i)))),
                    Box::new(ScalarExpr::ScalarMul(Box::new(b.diff(i)), a.clone())),
                )),
                Box::new(ScalarExpr::ScalarMul(b.clone(), b.clone())),
            ),
            ScalarExpr::Exp(s) => ScalarExpr::ScalarMul(
                Box::new(ScalarExpr::Exp(s.clone())),
                Box::new(s.diff(i)),
            ),
            ScalarExpr::Dot(u, v) => ScalarExpr::ScalarAdd(
                Box::new(ScalarExpr::Dot(Box::new(u.diff(i)), v.clone())),
                Box::new(ScalarExpr::Dot(u.clone(), Box::new(v.diff(i)))),
            ),
            ScalarExpr::Norm2(v) => ScalarExpr::ScalarMul(
                Box::new(ScalarExpr::ScalarNumber("2".to_string(), 2.0)),
                Box::new(ScalarExpr::Dot(Box::new(v.diff(i)), v.clone())),
            ),
        }
    }
}

fn dot(u: Vec<f64>, v: Vec<f64>) -> Result<f64, EvalError> {
    if u.len() != v.len() {
        return Err(EvalError::Bounds(format!(
            "vector length mismatch: {} vs {}",
            u.len(),
            v.len()
        )));
    }
    Ok(u.into_iter().zip(v).map(|(a, b)| a * b).sum())
}

impl Display for ScalarExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fn child(f: &mut Formatter<'_>, parent: PriorityLevel, c: &ScalarExpr) -> fmt::Result {
            if c.level() > parent {
                write!(f, "({})", c)
            } else {
                write!(f, "{}", c)
            }
        }

        match self {
            ScalarExpr::ScalarNumber(lexeme, _) => write!(f, "{}", lexeme),
            ScalarExpr::ScalarConstant(name) => write!(f, "{}", name),
            ScalarExpr::IndexedVectorComponent(v, index) => write!(f, "{}_{}", v, index),
            ScalarExpr::ScalarPrefixPlus(s) => {
                write!(f, "+")?;
                child(f, self.level(), s)
            }
            ScalarExpr::ScalarPrefixMinus(s) => {
                write!(f, "-")?;
                child(f, self.level(), s)
            }
            ScalarExpr::ScalarAdd(a, b) => {
                child(f, self.level(), a)?;
                write!(f, "+")?;
                child(f, self.level(), b)
            }
            ScalarExpr::ScalarSub(a, b) => {
                child(f, self.level(), a)?;
                write!(f, "-")?;
                child(f, self.level(), b)
            }
            ScalarExpr::ScalarMul(a, b) => {
                child(f, self.level(), a)?;
                write!(f, "*")?;
                child(f, self.level(), b)
            }
            ScalarExpr::ScalarDiv(a, b) => {
                child(f, self.level(), a)?;
                write!(f, "/")?;
                child(f, self.level(), b)
            }
            ScalarExpr::Exp(s) => write!(f, "exp({})", s),
            ScalarExpr::Norm2(v) => write!(f, "norm2({})", v),
            ScalarExpr::Dot(u, v) => write!(f, "dot({},{})", u, v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_prints_original_lexeme() {
        let n = ScalarExpr::ScalarNumber("0.50".to_string(), 0.5);
        assert_eq!(n.to_string(), "0.50");
    }

    #[test]
    fn diff_of_constant_is_zero() {
        let n = ScalarExpr::ScalarNumber("2".to_string(), 2.0);
        assert_eq!(n.diff(0).to_string(), "0");
    }

    #[test]
    fn indexed_component_of_identity_diffs_to_one_at_matching_index() {
        let ivc = ScalarExpr::IndexedVectorComponent(Box::new(VectorExpr::VectorIdentity), 0);
        assert_eq!(ivc.diff(0).to_string(), "1");
        assert_eq!(ivc.diff(1).to_string(), "0");
    }

    #[test]
    fn norm2_apply_uses_the_evaluation_argument_not_its_operand() {
        let unrelated = Box::new(VectorExpr::VectorZero);
        let norm2 = ScalarExpr::Norm2(unrelated);
        assert_eq!(norm2.apply(&[1.0, 2.0, 3.0]).unwrap(), 14.0);
    }
}
