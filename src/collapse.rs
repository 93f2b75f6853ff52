//! Function-call collapsing (spec §4.4).
//!
//! Ported from the original grammar's `collapse_function_name::transform`, which rewrites
//!
//! ```text
//! FUNCTION                 FUNCTION_NAME
//!   |-- FUNCTION_NAME  ->     |-- ARGS...
//!   `-- ARGS...
//! ```
//!
//! so the function's node *is* its name, with the parsed arguments as direct children. This
//! crate's grammar never builds the outer `FUNCTION` node at all (see [`crate::grammar`]'s
//! `function_call`), so there is nothing to unwrap — this module only has to attach `args` onto
//! `name_node` and extend its span to cover the closing paren.

use crate::symbol::Symbol;
use crate::ASTNode;

type Node = ASTNode<Symbol>;

/// Attach a parsed function call's arguments onto its name node, extending `name_node`'s span
/// to `end` (the position just past the closing `)`).
pub fn collapse(mut name_node: Node, args: Vec<Node>, end: usize) -> Node {
    debug_assert_eq!(name_node.children.len(), 0);
    debug_assert_eq!(
        Some(args.len()),
        name_node.node.function_arity(),
        "{:?} called with {} args, expected {:?}",
        name_node.node,
        args.len(),
        name_node.node.function_arity(),
    );
    name_node.children = args;
    name_node.end = end;
    name_node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaches_args_and_extends_span() {
        let name = Node::leaf(Symbol::UnaryS2SFunctionName, 0, 3, "exp".to_string());
        let arg = Node::leaf(Symbol::Number, 4, 5, "2".to_string());
        let collapsed = collapse(name, vec![arg], 6);
        assert_eq!(collapsed.node, Symbol::UnaryS2SFunctionName);
        assert_eq!(collapsed.start, 0);
        assert_eq!(collapsed.end, 6);
        assert_eq!(collapsed.children.len(), 1);
    }
}
