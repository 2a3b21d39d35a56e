//! Owned nodes and their structural primitives
//!
//! A [`Node`] is either a leaf holding a string value or a parent owning an
//! ordered `Vec` of children. The primitives here (`append`, `prepend`,
//! `insert_after`, `remove_child`, `detach`) enforce the containment rules of
//! [`NodeKind::accepts`]; the tokenizer builds trees that satisfy them by
//! construction and goes through [`Node::with_children`] instead.

use super::error::EditError;
use super::kind::NodeKind;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity of a node.
///
/// Ids are unique for the lifetime of the process. They are never reused, so an
/// id of a removed node just stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        NodeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Content {
    Value(String),
    Children(Vec<Node>),
}

/// A node of the text object model
///
/// Equality is structural: two nodes are equal when their kinds, values and
/// children match, whatever their ids. Cloning deep-copies the subtree and
/// gives every copied node a fresh id.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    content: Content,
}

impl Node {
    /// Create an empty node of the given kind (no children, or an empty value)
    pub fn new(kind: NodeKind) -> Self {
        let content = if kind.is_parent() {
            Content::Children(Vec::new())
        } else {
            Content::Value(String::new())
        };
        Self {
            id: NodeId::next(),
            kind,
            content,
        }
    }

    pub fn root() -> Self {
        Self::new(NodeKind::Root)
    }

    pub fn paragraph() -> Self {
        Self::new(NodeKind::Paragraph)
    }

    pub fn sentence() -> Self {
        Self::new(NodeKind::Sentence)
    }

    pub fn word(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Word, value)
    }

    pub fn punctuation(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Punctuation, value)
    }

    pub fn white_space(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::WhiteSpace, value)
    }

    pub(crate) fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        debug_assert!(!kind.is_parent(), "{} is not a leaf kind", kind);
        Self {
            id: NodeId::next(),
            kind,
            content: Content::Value(value.into()),
        }
    }

    /// Build a parent from children that are known to satisfy the containment rules
    pub(crate) fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        debug_assert!(kind.is_parent(), "{} is not a parent kind", kind);
        debug_assert!(children.iter().all(|child| kind.accepts(child.kind)));
        Self {
            id: NodeId::next(),
            kind,
            content: Content::Children(children),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Nesting depth of this node's kind, `None` for white space
    pub fn hierarchy(&self) -> Option<usize> {
        self.kind.hierarchy()
    }

    pub fn is_parent(&self) -> bool {
        matches!(self.content, Content::Children(_))
    }

    /// The value of a leaf, `None` for parents
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::Value(value) => Some(value),
            Content::Children(_) => None,
        }
    }

    /// Replace the value of a leaf.
    ///
    /// Inverse of `to_string()` on leaves.
    pub fn from_string(&mut self, value: impl Into<String>) -> Result<(), EditError> {
        match &mut self.content {
            Content::Value(current) => {
                *current = value.into();
                Ok(())
            }
            Content::Children(_) => Err(EditError::NotALeaf { kind: self.kind }),
        }
    }

    /// Children in order; empty for leaves
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children,
            Content::Value(_) => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    /// First child
    pub fn head(&self) -> Option<&Node> {
        self.children().first()
    }

    /// Last child
    pub fn tail(&self) -> Option<&Node> {
        self.children().last()
    }

    /// Index of the direct child with the given id
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.children().iter().position(|child| child.id == id)
    }

    /// Find this node or a descendant by id
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        match &mut self.content {
            Content::Children(children) => children.iter_mut().find_map(|child| child.find_mut(id)),
            Content::Value(_) => None,
        }
    }

    /// Whether this node or one of its descendants has the given id
    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// The parent of the node with the given id, searching this subtree
    pub fn parent_of(&self, id: NodeId) -> Option<&Node> {
        if self.position(id).is_some() {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.parent_of(id))
    }

    /// Pre-order walk over this node and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Append a child at the end
    pub fn append(&mut self, child: Node) -> Result<NodeId, EditError> {
        let id = child.id;
        self.checked_children(&child)?.push(child);
        Ok(id)
    }

    /// Insert a child as the first child
    pub fn prepend(&mut self, child: Node) -> Result<NodeId, EditError> {
        let id = child.id;
        self.checked_children(&child)?.insert(0, child);
        Ok(id)
    }

    /// Insert a child immediately after the direct child `anchor`
    pub fn insert_after(&mut self, anchor: NodeId, child: Node) -> Result<NodeId, EditError> {
        let index = self
            .position(anchor)
            .ok_or(EditError::UnknownNode { id: anchor })?;
        let id = child.id;
        self.checked_children(&child)?.insert(index + 1, child);
        Ok(id)
    }

    /// Unlink a direct child and hand it back
    pub fn remove_child(&mut self, id: NodeId) -> Option<Node> {
        let index = self.position(id)?;
        match &mut self.content {
            Content::Children(children) => Some(children.remove(index)),
            Content::Value(_) => None,
        }
    }

    /// Unlink the node with the given id from wherever it sits below this node
    pub fn detach(&mut self, id: NodeId) -> Option<Node> {
        if let Some(removed) = self.remove_child(id) {
            return Some(removed);
        }
        match &mut self.content {
            Content::Children(children) => children.iter_mut().find_map(|child| child.detach(id)),
            Content::Value(_) => None,
        }
    }

    /// Take the children out of a parent, dropping the parent itself
    pub fn into_children(self) -> Vec<Node> {
        match self.content {
            Content::Children(children) => children,
            Content::Value(_) => Vec::new(),
        }
    }

    fn checked_children(&mut self, child: &Node) -> Result<&mut Vec<Node>, EditError> {
        let parent = self.kind;
        match &mut self.content {
            Content::Children(children) if parent.accepts(child.kind) => Ok(children),
            Content::Children(_) => Err(EditError::InvalidChild {
                parent,
                child: child.kind,
            }),
            Content::Value(_) => Err(EditError::NotAParent { kind: parent }),
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self {
            id: NodeId::next(),
            kind: self.kind,
            content: self.content.clone(),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.content == other.content
    }
}

/// The text of the node: a leaf's value, or the concatenated text of all leaves below a parent
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Content::Value(value) => f.write_str(value),
            Content::Children(children) => {
                for child in children {
                    fmt::Display::fmt(child, f)?;
                }
                Ok(())
            }
        }
    }
}

/// Pre-order iterator returned by [`Node::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello_sentence() -> Node {
        Node::with_children(
            NodeKind::Sentence,
            vec![
                Node::word("Hello"),
                Node::white_space(" "),
                Node::word("world"),
                Node::punctuation("."),
            ],
        )
    }

    #[test]
    fn test_new_nodes_are_empty() {
        let root = Node::root();
        assert!(root.is_parent());
        assert!(root.is_empty());
        assert_eq!(root.value(), None);

        let word = Node::new(NodeKind::Word);
        assert!(!word.is_parent());
        assert_eq!(word.value(), Some(""));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Node::word("a");
        let b = Node::word("a");
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_are_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..100).map(|_| Node::sentence().id()).collect::<Vec<_>>()))
            .collect();
        let mut ids: Vec<NodeId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 400);
    }

    #[test]
    fn test_leaf_from_string() {
        let mut word = Node::word("cat");
        word.from_string("dog").unwrap();
        assert_eq!(word.to_string(), "dog");

        let mut sentence = Node::sentence();
        assert_eq!(
            sentence.from_string("nope"),
            Err(EditError::NotALeaf {
                kind: NodeKind::Sentence
            })
        );
    }

    #[test]
    fn test_parent_display_concatenates_leaves() {
        let sentence = hello_sentence();
        assert_eq!(sentence.to_string(), "Hello world.");
        assert_eq!(sentence.head().and_then(Node::value), Some("Hello"));
        assert_eq!(sentence.tail().and_then(Node::value), Some("."));
    }

    #[test]
    fn test_append_prepend_and_insert_after() {
        let mut sentence = Node::sentence();
        let world = sentence.append(Node::word("world")).unwrap();
        sentence.prepend(Node::word("Hello")).unwrap();
        let space = sentence
            .insert_after(sentence.children()[0].id(), Node::white_space(" "))
            .unwrap();
        sentence.append(Node::punctuation("!")).unwrap();

        assert_eq!(sentence.to_string(), "Hello world!");
        assert_eq!(sentence.position(space), Some(1));
        assert_eq!(sentence.position(world), Some(2));
    }

    #[test]
    fn test_containment_is_enforced() {
        let mut paragraph = Node::paragraph();
        assert_eq!(
            paragraph.append(Node::word("loose")),
            Err(EditError::InvalidChild {
                parent: NodeKind::Paragraph,
                child: NodeKind::Word
            })
        );

        let mut word = Node::word("leaf");
        assert_eq!(
            word.append(Node::white_space(" ")),
            Err(EditError::NotAParent {
                kind: NodeKind::Word
            })
        );
        assert!(paragraph.is_empty());
    }

    #[test]
    fn test_insert_after_unknown_anchor() {
        let mut sentence = hello_sentence();
        let stranger = Node::word("x").id();
        assert_eq!(
            sentence.insert_after(stranger, Node::word("y")),
            Err(EditError::UnknownNode { id: stranger })
        );
        assert_eq!(sentence.len(), 4);
    }

    #[test]
    fn test_detach_from_deep_inside() {
        let sentence = hello_sentence();
        let world = sentence.children()[2].id();
        let paragraph = Node::with_children(NodeKind::Paragraph, vec![sentence]);
        let mut root = Node::with_children(NodeKind::Root, vec![paragraph]);

        assert!(root.contains(world));
        assert_eq!(root.parent_of(world).map(Node::kind), Some(NodeKind::Sentence));

        let removed = root.detach(world).unwrap();
        assert_eq!(removed.value(), Some("world"));
        assert!(!root.contains(world));
        assert!(root.detach(world).is_none());
        assert_eq!(root.to_string(), "Hello .");
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let paragraph = Node::with_children(NodeKind::Paragraph, vec![hello_sentence()]);
        let kinds: Vec<NodeKind> = paragraph.descendants().map(Node::kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Paragraph,
                NodeKind::Sentence,
                NodeKind::Word,
                NodeKind::WhiteSpace,
                NodeKind::Word,
                NodeKind::Punctuation,
            ]
        );
    }

    #[test]
    fn test_clone_gets_fresh_ids() {
        let sentence = hello_sentence();
        let copy = sentence.clone();
        assert_eq!(copy, sentence);
        assert_ne!(copy.id(), sentence.id());
        for (a, b) in copy.children().iter().zip(sentence.children()) {
            assert_ne!(a.id(), b.id());
        }
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut sentence = hello_sentence();
        let hello = sentence.children()[0].id();
        sentence
            .find_mut(hello)
            .unwrap()
            .from_string("Goodbye")
            .unwrap();
        assert_eq!(sentence.to_string(), "Goodbye world.");
    }
}
