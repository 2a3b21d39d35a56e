//! Error types for tree edits and AST import

use super::kind::NodeKind;
use super::node::NodeId;
use thiserror::Error;

/// Errors raised by the structural primitives and the edit engine
///
/// Both invalid invocations (wrong node, wrong argument) and ambiguous edits
/// land here. None of them are transient: the tree is left untouched and the
/// caller is expected to report, not retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The operation needs a parent but got a leaf
    #[error("illegal invocation: {kind} is not a parent node")]
    NotAParent { kind: NodeKind },

    /// The operation needs a leaf but got a parent
    #[error("illegal invocation: {kind} does not hold a value")]
    NotALeaf { kind: NodeKind },

    /// Containment rule violation, e.g. a word directly under a paragraph
    #[error("illegal invocation: {parent} cannot contain {child}")]
    InvalidChild { parent: NodeKind, child: NodeKind },

    /// The node id does not name a node inside the operated-on tree
    #[error("illegal invocation: node {id} is not part of this tree")]
    UnknownNode { id: NodeId },

    /// The source text tokenizes to nothing that could be inserted
    #[error("illegal invocation: {text:?} is not a valid argument for insert")]
    EmptyContent { text: String },

    /// The tokenized source spans several parents above the insertion depth
    #[error("illegal invocation: can't insert from multiple parents")]
    MultipleParents,
}

/// Errors raised while turning an AST back into a tree
#[derive(Debug, Error)]
pub enum AstError {
    /// The object has no `type` attribute
    #[error("malformed AST: missing the `type` attribute")]
    MissingType,

    /// The object has neither `value` nor `children`
    #[error("malformed AST: {kind} is missing both `value` and `children`")]
    MissingContent { kind: NodeKind },

    /// The object has both `value` and `children`
    #[error("malformed AST: {kind} has both `value` and `children`")]
    AmbiguousContent { kind: NodeKind },

    /// The `type` attribute names no known node kind
    #[error("malformed AST: unknown node type `{0}`")]
    UnknownType(String),

    /// The text is not JSON, or not an object of the expected shape
    #[error("malformed AST: {0}")]
    Json(#[from] serde_json::Error),

    /// The AST is well formed but describes an impossible tree
    #[error(transparent)]
    Structure(#[from] EditError),
}
