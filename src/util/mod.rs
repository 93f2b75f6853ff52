mod code;
mod position;

use once_cell::unsync::OnceCell;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
/// The line and column information at a byte offset in some source text.
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A wrapper around the source text being parsed, lazily indexing line breaks so that
/// byte offsets can be turned into `Position`s on demand (only parse errors need it).
pub struct Code<'c> {
    pub value: &'c [u8],
    line_breaks: OnceCell<Vec<usize>>,
}
