//! Fluent assertion API for tree nodes

use crate::textom::ast::{Node, NodeKind};

/// Create an assertion builder for a node
pub fn assert_tree(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: node.kind().name().to_string(),
    }
}

pub struct NodeAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.node.kind()
        );
        self
    }

    pub fn is_root(self) -> Self {
        self.kind(NodeKind::Root)
    }

    pub fn is_paragraph(self) -> Self {
        self.kind(NodeKind::Paragraph)
    }

    pub fn is_sentence(self) -> Self {
        self.kind(NodeKind::Sentence)
    }

    pub fn is_white_space(self) -> Self {
        self.kind(NodeKind::WhiteSpace)
    }

    /// Assert the full text below this node
    pub fn text(self, expected: &str) -> Self {
        let actual = self.node.to_string();
        assert_eq!(
            actual, expected,
            "{}: Expected text to be '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    /// Assert this is a leaf with the given value
    pub fn value(self, expected: &str) -> Self {
        assert_eq!(
            self.node.value(),
            Some(expected),
            "{}: Expected leaf value '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.node)
        );
        self
    }

    /// Assert the kinds of the direct children, in order
    pub fn child_kinds(self, expected: &[NodeKind]) -> Self {
        let actual: Vec<NodeKind> = self.node.children().iter().map(Node::kind).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected children: [{}]",
            self.context,
            summarize(self.node)
        );
        self
    }

    /// Assert the direct children are leaves with these kinds and values
    pub fn leaves(self, expected: &[(NodeKind, &str)]) -> Self {
        let actual: Vec<(NodeKind, Option<&str>)> = self
            .node
            .children()
            .iter()
            .map(|child| (child.kind(), child.value()))
            .collect();
        let expected: Vec<(NodeKind, Option<&str>)> = expected
            .iter()
            .map(|(kind, value)| (*kind, Some(*value)))
            .collect();
        assert_eq!(actual, expected, "{}: Unexpected leaves", self.context);
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.node.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            self.node.len()
        );
        let child = &self.node.children()[index];
        assertion(NodeAssertion {
            node: child,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}

fn summarize(node: &Node) -> String {
    node.children()
        .iter()
        .map(|child| child.kind().name())
        .collect::<Vec<_>>()
        .join(", ")
}
