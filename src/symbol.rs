use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Grammar-symbol tag carried by every untyped parse-tree node.
///
/// `Term` and `Expression` are parser-internal wrapper tags: they hold the flat
/// operand/operator list a `list`/`list_must` PEG production would produce, and never survive
/// past [`crate::rearrange::rearrange`].
pub enum Symbol {
    Index,
    Number,
    ScalarVariable,
    ScalarConstant,
    VectorVariable,
    IndexedVectorVariable,
    Plus,
    Minus,
    Multiply,
    Divide,
    PrefixPlus,
    PrefixMinus,
    NullaryA2SFunctionName,
    UnaryS2SFunctionName,
    UnaryV2SFunctionName,
    UnaryV2VFunctionName,
    BinaryV2SFunctionName,
    /// `abs`, recognized by the grammar as either unary scalar->scalar or unary
    /// vector->vector depending on its argument's inferred kind (spec §4.1, §4.5).
    AmbiguousAbsFunctionName,
    Term,
    Expression,
}

impl Symbol {
    /// Number of argument children a function-name symbol takes once collapsed (§4.4).
    pub fn function_arity(self) -> Option<usize> {
        match self {
            Symbol::NullaryA2SFunctionName => Some(0),
            Symbol::UnaryS2SFunctionName
            | Symbol::UnaryV2SFunctionName
            | Symbol::UnaryV2VFunctionName
            | Symbol::AmbiguousAbsFunctionName => Some(1),
            Symbol::BinaryV2SFunctionName => Some(2),
            _ => None,
        }
    }

    pub fn is_function_name(self) -> bool {
        self.function_arity().is_some()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}
