use crate::util::{Code, Position};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
/// An error returned when the parser failed to parse the input because of a language syntax
/// error. Carries the failing byte offset; use [`ParseError::position`] against the original
/// source text to render a line/column for diagnostics.
pub struct ParseError {
    pub byte_offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(byte_offset: usize, message: String) -> Self {
        Self {
            byte_offset,
            message,
        }
    }

    /// Resolve the failing byte offset into a 1-based line/column against `source`.
    pub fn position(&self, source: &str) -> Position {
        Code::from(source).obtain_position(self.byte_offset)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SyntaxError: {} (at byte {})", self.message, self.byte_offset)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq)]
/// An error raised by kind inference when operand kinds are incompatible, or when the root
/// expression does not come out Scalar.
pub struct KindError {
    pub message: String,
}

impl KindError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for KindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "KindError: {}", self.message)
    }
}

impl std::error::Error for KindError {}

#[derive(Debug, Clone, PartialEq)]
/// An error raised by the typed builder.
pub enum BuildError {
    /// Propagated straight out of kind inference.
    Kind(KindError),
    /// A grammatically valid but unimplemented function name or variable (`sqrt`, `abs`, `sum`,
    /// `rand`, or a vector variable other than `x`).
    NotImplemented(String),
}

impl From<KindError> for BuildError {
    fn from(err: KindError) -> Self {
        BuildError::Kind(err)
    }
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Kind(err) => write!(f, "{}", err),
            BuildError::NotImplemented(what) => write!(f, "NotImplemented: {}", what),
        }
    }
}

impl std::error::Error for BuildError {}

#[derive(Debug, Clone, PartialEq)]
/// An error raised while evaluating a typed expression against a vector argument.
pub enum EvalError {
    /// An unresolved scalar-constant name.
    NotImplemented(String),
    /// An out-of-range indexed component, or a length mismatch between vector operands.
    Bounds(String),
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::NotImplemented(what) => write!(f, "NotImplemented: {}", what),
            EvalError::Bounds(what) => write!(f, "Bounds: {}", what),
        }
    }
}

impl std::error::Error for EvalError {}
