//! Node kinds and the type name table
//!
//! The kind of a node decides three things: its human-readable type name (used
//! on the AST wire format), its hierarchy (nesting depth) and which kinds it
//! may hold as children. All three are fixed at compile time.

use super::error::AstError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of node kinds in the text object model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum NodeKind {
    Root,
    Paragraph,
    Sentence,
    Word,
    Punctuation,
    WhiteSpace,
}

/// Type name table, in declaration order.
///
/// This is the one bijection between kinds and names; `name()`, `from_name()`
/// and the serde impls all go through it.
pub static TYPES: [(&str, NodeKind); 6] = [
    ("RootNode", NodeKind::Root),
    ("ParagraphNode", NodeKind::Paragraph),
    ("SentenceNode", NodeKind::Sentence),
    ("WordNode", NodeKind::Word),
    ("PunctuationNode", NodeKind::Punctuation),
    ("WhiteSpaceNode", NodeKind::WhiteSpace),
];

impl NodeKind {
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Root,
        NodeKind::Paragraph,
        NodeKind::Sentence,
        NodeKind::Word,
        NodeKind::Punctuation,
        NodeKind::WhiteSpace,
    ];

    /// The type name used in the AST, e.g. `"WordNode"`
    pub fn name(self) -> &'static str {
        TYPES[self as usize].0
    }

    /// Look a kind up by its type name
    pub fn from_name(name: &str) -> Option<Self> {
        TYPES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
    }

    /// Nesting depth of this kind, `None` for white space.
    ///
    /// White space can be a child of any parent, so it has no depth of its own.
    pub fn hierarchy(self) -> Option<usize> {
        match self {
            NodeKind::Root => Some(0),
            NodeKind::Paragraph => Some(1),
            NodeKind::Sentence => Some(2),
            NodeKind::Word | NodeKind::Punctuation => Some(3),
            NodeKind::WhiteSpace => None,
        }
    }

    /// Whether nodes of this kind own children (as opposed to holding a value)
    pub fn is_parent(self) -> bool {
        matches!(
            self,
            NodeKind::Root | NodeKind::Paragraph | NodeKind::Sentence
        )
    }

    /// Whether a node of this kind may hold a child of kind `child`
    pub fn accepts(self, child: NodeKind) -> bool {
        match self {
            NodeKind::Root => matches!(child, NodeKind::Paragraph | NodeKind::WhiteSpace),
            NodeKind::Paragraph => matches!(child, NodeKind::Sentence | NodeKind::WhiteSpace),
            NodeKind::Sentence => matches!(
                child,
                NodeKind::Word | NodeKind::Punctuation | NodeKind::WhiteSpace
            ),
            NodeKind::Word | NodeKind::Punctuation | NodeKind::WhiteSpace => false,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeKind {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::from_name(s).ok_or_else(|| AstError::UnknownType(s.to_string()))
    }
}

impl TryFrom<String> for NodeKind {
    type Error = AstError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodeKind> for &'static str {
    fn from(kind: NodeKind) -> Self {
        kind.name()
    }
}
