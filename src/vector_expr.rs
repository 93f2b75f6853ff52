//! The vectorial half of the typed expression tree (spec §3, §4.6-§4.9).

use std::fmt::{self, Display, Formatter};

use crate::error::EvalError;
use crate::priority::PriorityLevel;
use crate::scalar_expr::ScalarExpr;

#[derive(Debug, Clone)]
pub enum VectorExpr {
    /// The evaluation argument itself (§4.7). The grammar admits `y` as a vector variable too,
    /// but the builder has no identity for it, so this variant is only ever built for `x`.
    VectorIdentity,
    VectorPrefixPlus(Box<VectorExpr>),
    VectorPrefixMinus(Box<VectorExpr>),
    VectorAdd(Box<VectorExpr>, Box<VectorExpr>),
    VectorSub(Box<VectorExpr>, Box<VectorExpr>),
    /// Scalar operand first regardless of source order (§4.6).
    ScalarVectorProduct(Box<ScalarExpr>, Box<VectorExpr>),
    VectorScalarDivide(Box<VectorExpr>, Box<ScalarExpr>),
    /// Differentiation-only leaf: the zero vector of the evaluation length.
    VectorZero,
    /// Differentiation-only leaf: the unit vector with a 1 in position `i`.
    VectorPartialOne(usize),
}

impl VectorExpr {
    pub fn level(&self) -> PriorityLevel {
        match self {
            VectorExpr::VectorIdentity | VectorExpr::VectorZero | VectorExpr::VectorPartialOne(_) => {
                PriorityLevel::Value
            }
            VectorExpr::VectorScalarDivide(..) => PriorityLevel::Quotient,
            VectorExpr::ScalarVectorProduct(..) => PriorityLevel::Factor,
            VectorExpr::VectorPrefixPlus(_) | VectorExpr::VectorPrefixMinus(_) => {
                PriorityLevel::Prefixed
            }
            VectorExpr::VectorAdd(..) | VectorExpr::VectorSub(..) => PriorityLevel::Term,
        }
    }

    /// Evaluate against `x`, the dense vector of values bound to the vector variable (§4.7).
    pub fn apply(&self, x: &[f64]) -> Result<Vec<f64>, EvalError> {
        match self {
            VectorExpr::VectorIdentity => Ok(x.to_vec()),
            VectorExpr::VectorPrefixPlus(v) => v.apply(x),
            VectorExpr::VectorPrefixMinus(v) => {
                Ok(v.apply(x)?.into_iter().map(|e| -e).collect())
            }
            VectorExpr::VectorAdd(a, b) => elementwise(a.apply(x)?, b.apply(x)?, |l, r| l + r),
            VectorExpr::VectorSub(a, b) => elementwise(a.apply(x)?, b.apply(x)?, |l, r| l - r),
            VectorExpr::ScalarVectorProduct(a, b) => {
                let scalar = a.apply(x)?;
                Ok(b.apply(x)?.into_iter().map(|e| scalar * e).collect())
            }
            VectorExpr::VectorScalarDivide(a, b) => {
                let scalar = b.apply(x)?;
                Ok(a.apply(x)?.into_iter().map(|e| e / scalar).collect())
            }
            VectorExpr::VectorZero => Ok(vec![0.0; x.len()]),
            VectorExpr::VectorPartialOne(i) => {
                if *i >= x.len() {
                    return Err(EvalError::Bounds(format!(
                        "index {} out of range for length {}",
                        i,
                        x.len()
                    )));
                }
                let mut v = vec![0.0; x.len()];
                v[*i] = 1.0;
                Ok(v)
            }
        }
    }

    /// Symbolic derivative with respect to component `i` (spec §4.8).
    pub fn diff(&self, i: usize) -> VectorExpr {
        match self {
            VectorExpr::VectorIdentity => VectorExpr::VectorPartialOne(i),
            VectorExpr::VectorZero | VectorExpr::VectorPartialOne(_) => VectorExpr::VectorZero,
            VectorExpr::VectorPrefixPlus(v) => v.diff(i),
            VectorExpr::VectorPrefixMinus(v) => {
                VectorExpr::VectorPrefixMinus(Box::new(v.diff(i)))
            }
            VectorExpr::VectorAdd(a, b) => {
                VectorExpr::VectorAdd(Box::new(a.diff(i)), Box::new(b.diff(i)))
            }
            VectorExpr::VectorSub(a, b) => {
                VectorExpr::VectorSub(Box::new(a.diff(i)), Box::new(b.diff(i)))
            }
            VectorExpr::ScalarVectorProduct(a, b) => VectorExpr::VectorAdd(
                Box::new(VectorExpr::ScalarVectorProduct(
                    a.clone(),
                    Box::new(b.diff(i)),
                )),
                Box::new(VectorExpr::ScalarVectorProduct(
                    Box::new(a.diff(i)),
                    b.clone(),
                )),
            ),
            VectorExpr::VectorScalarDivide(a, b) => VectorExpr::VectorScalarDivide(
                Box::new(VectorExpr::VectorSub(
                    Box::new(VectorExpr::ScalarVectorProduct(
                        b.clone(),
                        Box::new(a.diff(i)),
                    )),
                    Box::new(VectorExpr::ScalarVectorProduct(
                        Box::new(b.diff(i)),
                        a.clone(),
                    )),
                )),
                Box::new(ScalarExpr::ScalarMul(b.clone(), b.clone())),
            ),
        }
    }
}

fn elementwise(
    a: Vec<f64>,
    b: Vec<f64>,
    op: impl Fn(f64, f64) -> f64,
) -> Result<Vec<f64>, EvalError> {
    if a.len() != b.len() {
        return Err(EvalError::Bounds(format!(
            "vector length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.into_iter().zip(b).map(|(l, r)| op(l, r)).collect())
}

impl Display for VectorExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fn child(f: &mut Formatter<'_>, parent: PriorityLevel, c: &VectorExpr) -> fmt::Result {
            if c.level() > parent {
                write!(f, "({})", c)
            } else {
                write!(f, "{}", c)
            }
        }
        fn scalar_child(f: &mut Formatter<'_>, parent: PriorityLevel, c: &ScalarExpr) -> fmt::Result {
            if c.level() > parent {
                write!(f, "({})", c)
            } else {
                write!(f, "{}", c)
            }
        }

        match self {
            VectorExpr::VectorIdentity => write!(f, "x"),
            VectorExpr::VectorZero => write!(f, "<x_i=0>"),
            VectorExpr::VectorPartialOne(i) => write!(f, "<x_{}=1>", i),
            VectorExpr::VectorPrefixPlus(v) => {
                write!(f, "+")?;
                child(f, self.level(), v)
            }
            VectorExpr::VectorPrefixMinus(v) => {
                write!(f, "-")?;
                child(f, self.level(), v)
            }
            VectorExpr::VectorAdd(a, b) => {
                child(f, self.level(), a)?;
                write!(f, "+")?;
                child(f, self.level(), b)
            }
            VectorExpr::VectorSub(a, b) => {
                child(f, self.level(), a)?;
                write!(f, "-")?;
                child(f, self.level(), b)
            }
            VectorExpr::ScalarVectorProduct(a, b) => {
                scalar_child(f, self.level(), a)?;
                write!(f, "*")?;
                child(f, self.level(), b)
            }
            VectorExpr::VectorScalarDivide(a, b) => {
                child(f, self.level(), a)?;
                write!(f, "/")?;
                scalar_child(f, self.level(), b)
            }
        }
    }
}
