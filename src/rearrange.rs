//! Flat list-of-operands-and-operators to left-leaning binary tree (spec §4.3).
//!
//! Ported from the original grammar's `rearrange::transform` (`grammar.cpp`), which rewrites a
//! PEGTL `list`/`list_must` production's flat child list in place with `std::unique_ptr` moves.
//! Rust's ownership rules make the in-place rewrite awkward, so this version consumes the wrapper
//! node and rebuilds it bottom-up with `Vec::pop`, but the shape of the recursion — peel the last
//! operator/operand pair off the back, make it the new root, recurse into what's left — is
//! unchanged.

use crate::symbol::Symbol;
use crate::ASTNode;

type Node = ASTNode<Symbol>;

/// Rearrange a flat `Term`/`Expression` wrapper node into a left-leaning binary tree.
///
/// `node`'s children are, in order: an optional leading prefix-sign node, then one operand,
/// then any number of `(operator, operand)` pairs. The result is either the single operand
/// itself (no operators at all) or a tree whose root is the *last* operator parsed, each
/// operator's left child holding everything that came before it.
pub fn rearrange(mut node: Node) -> Node {
    match node.children.len() {
        0 => node,
        1 => node.children.pop().expect("checked len == 1"),
        _ => {
            let r = node.children.pop().expect("checked len >= 2");
            let mut o = node.children.pop().expect("checked len >= 2");

            if matches!(o.node, Symbol::PrefixPlus | Symbol::PrefixMinus) {
                debug_assert!(node.children.is_empty());
                o.children.push(r);
                o
            } else {
                debug_assert!(matches!(
                    o.node,
                    Symbol::Plus | Symbol::Minus | Symbol::Multiply | Symbol::Divide
                ));
                let start = node.start;
                let lhs = rearrange(node);
                let end = r.end;
                o.children.push(lhs);
                o.children.push(r);
                o.start = start;
                o.end = end;
                o
            }
        }
    }
}
