//! # reparser
//!
//! Tokenize natural-language text into a text object model, edit that model
//! structurally, and move it in and out of a JSON AST.
//!
//! File Layout
//!
//! src/textom
//!   ├── ast          Node kinds, nodes, ranges and errors (the tree model)
//!   ├── tokenizing   Paragraph, sentence and token segmentation
//!   ├── editing      Insert / remove / replace on parent nodes
//!   ├── formats      JSON AST codec and the treeviz debug view
//!   ├── config       Layered TOML configuration
//!   └── reparser     The facade tying the pieces together
//!
//! The tree is plain owned data: a parent owns a `Vec` of children, and the
//! only handles that outlive an edit are [`NodeId`](textom::ast::NodeId)s and
//! [`Range`](textom::ast::Range)s, which are resolved against a tree on demand.
//!
//! For test helpers and fluent tree assertions, see the [testing module](textom::testing).

pub mod textom;

pub use textom::ast::{AstError, EditError, Node, NodeId, NodeKind, Range};
pub use textom::reparser::Reparser;
pub use textom::tokenizing::Tokenizer;
