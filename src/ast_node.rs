use crate::ASTNode;
use ptree::TreeItem;
use std::fmt::{Debug, Display, Formatter};

impl<TNode: Debug> Display for ASTNode<TNode> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let children_string = self.children.iter().map(|c| format!("{}", c));
        f.debug_struct("")
            .field("value", &(&self.node, &self.start, &self.end, &self.content))
            .field("children", &children_string)
            .finish()
    }
}
impl<TNode: Debug> Debug for ASTNode<TNode> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ASTNode");
        debug_struct
            .field("node", &self.node)
            .field("start", &self.start)
            .field("end", &self.end);
        if let Some(content) = &self.content {
            debug_struct.field("content", content);
        }
        if !self.children.is_empty() {
            debug_struct.field("children", &self.children);
        }
        debug_struct.finish()
    }
}

impl<TNode> ASTNode<TNode> {
    /// Create a new AST node with children.
    pub fn new(node: TNode, start: usize, end: usize, children: Vec<ASTNode<TNode>>) -> Self {
        Self {
            node,
            start,
            end,
            content: None,
            children,
        }
    }

    /// Create an AST leaf node that captured a source slice.
    pub fn leaf(node: TNode, start: usize, end: usize, content: String) -> Self {
        Self {
            node,
            start,
            end,
            content: Some(content),
            children: Vec::with_capacity(0),
        }
    }

    /// Get the single child at `index`, panicking if absent — used once the tree rearranger
    /// has established the fixed arity for the node's symbol.
    pub fn child(&self, index: usize) -> &ASTNode<TNode> {
        &self.children[index]
    }
}

impl<TNode: Debug + Clone> TreeItem for ASTNode<TNode> {
    type Child = Self;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _: &ptree::Style) -> std::io::Result<()> {
        match &self.content {
            Some(content) => write!(f, "{:?}({:?}) # {}-{}", self.node, content, self.start, self.end),
            None => write!(f, "{:?} # {}-{}", self.node, self.start, self.end),
        }
    }

    fn children(&self) -> std::borrow::Cow<[Self::Child]> {
        std::borrow::Cow::from(&self.children)
    }
}

impl<TNode: Debug + Clone> ASTNode<TNode> {
    /// Dump the tree as an indented, human-readable listing — the in-crate substitute for the
    /// out-of-scope CLI's graphviz dump.
    pub fn print(&self) -> Result<(), std::io::Error> {
        ptree::print_tree(self)
    }
}
