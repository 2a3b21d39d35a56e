//! AST definitions for the text object model
//!
//!     This module provides the tree the tokenizer produces and the edit engine
//!     mutates: a closed set of node kinds, owned nodes, stable node ids and
//!     ranges over sibling spans.
//!
//! Shape of a Tree
//!
//!     A tree always starts at a root. The root holds paragraphs, paragraphs hold
//!     sentences, and sentences hold the leaves (words and punctuation). White
//!     space is the odd one out: it has no fixed depth and may sit under any
//!     parent, between paragraphs, before a sentence or between words.
//!
//!     ```text
//!     RootNode                       hierarchy 0
//!     ├─ ParagraphNode               hierarchy 1
//!     │  └─ SentenceNode             hierarchy 2
//!     │     ├─ WordNode "Hello"      hierarchy 3
//!     │     ├─ WhiteSpaceNode " "    (none)
//!     │     ├─ WordNode "world"      hierarchy 3
//!     │     └─ PunctuationNode "."   hierarchy 3
//!     ├─ WhiteSpaceNode "\n\n"       (none)
//!     └─ ParagraphNode ...
//!     ```
//!
//! Ownership
//!
//!     A parent owns its children in a plain `Vec`. There are no parent or
//!     sibling pointers; iteration is derived from the vector. Removing a node
//!     hands it back to the caller by value, so a removed node can never be
//!     reached through the tree again.
//!
//!     Everything that needs to point *into* a tree across edits uses a
//!     [`NodeId`] (or a [`Range`] made of two of them) and resolves it against
//!     the tree when needed. A stale id simply fails to resolve.
//!
//! ## Modules
//!
//! - `kind` - The node kind enumeration and the static type name table
//! - `node` - Owned nodes, ids and the structural primitives
//! - `range` - Non-owning sibling ranges
//! - `error` - Error types for tree edits and AST import

pub mod error;
pub mod kind;
pub mod node;
pub mod range;

pub use error::{AstError, EditError};
pub use kind::{NodeKind, TYPES};
pub use node::{Descendants, Node, NodeId};
pub use range::Range;
