//! Ranges over sibling nodes
//!
//! A [`Range`] names a contiguous run of siblings by the ids of its first and
//! last node. It does not borrow or own the tree: it is resolved against a tree
//! whenever it is used, and resolves to `None` once an endpoint has been
//! removed or the endpoints stopped being ordered siblings.

use super::node::{Node, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: NodeId,
    end: NodeId,
}

impl Range {
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self { start, end }
    }

    /// A range covering a single node
    pub fn single(id: NodeId) -> Self {
        Self::new(id, id)
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    /// Resolve the range to the sibling slice it covers inside `tree`
    pub fn resolve<'a>(&self, tree: &'a Node) -> Option<&'a [Node]> {
        let parent = tree.parent_of(self.start)?;
        let start = parent.position(self.start)?;
        let end = parent.position(self.end)?;
        if end < start {
            return None;
        }
        Some(&parent.children()[start..=end])
    }

    /// The text covered by the range
    pub fn text(&self, tree: &Node) -> Option<String> {
        self.resolve(tree)
            .map(|nodes| nodes.iter().map(Node::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textom::ast::NodeKind;

    fn sentence() -> Node {
        Node::with_children(
            NodeKind::Sentence,
            vec![
                Node::word("one"),
                Node::white_space(" "),
                Node::word("two"),
                Node::punctuation("."),
            ],
        )
    }

    #[test]
    fn test_resolve_sibling_span() {
        let tree = sentence();
        let ids: Vec<NodeId> = tree.children().iter().map(Node::id).collect();

        let range = Range::new(ids[0], ids[2]);
        assert_eq!(range.resolve(&tree).map(<[Node]>::len), Some(3));
        assert_eq!(range.text(&tree).as_deref(), Some("one two"));

        let single = Range::single(ids[3]);
        assert_eq!(single.text(&tree).as_deref(), Some("."));
    }

    #[test]
    fn test_reversed_range_does_not_resolve() {
        let tree = sentence();
        let ids: Vec<NodeId> = tree.children().iter().map(Node::id).collect();
        assert!(Range::new(ids[2], ids[0]).resolve(&tree).is_none());
    }

    #[test]
    fn test_range_goes_stale_after_removal() {
        let mut tree = sentence();
        let ids: Vec<NodeId> = tree.children().iter().map(Node::id).collect();
        let range = Range::new(ids[0], ids[3]);

        tree.remove_child(ids[3]);
        assert!(range.resolve(&tree).is_none());
    }
}
