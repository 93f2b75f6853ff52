//! Printer-only precedence metadata (spec §3, §4.6, §4.9).
//!
//! `PriorityLevel` has nothing to do with how the grammar parses operators — that precedence is
//! baked into the `factor`/`term`/`expression` production ladder in [`crate::grammar`]. This is
//! an independent ranking consulted only by [`Display`](std::fmt::Display) impls to decide
//! whether a child needs parentheses.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityLevel {
    Value,
    Quotient,
    Factor,
    Prefixed,
    Term,
}
