//! Testing utilities for text object model trees
//!
//! Tests should assert on tree *shape*, not on debug dumps: node ids are unique
//! per process, so `{:?}` output differs from run to run. The fluent API in
//! [`tree_assertions`] walks a tree and reports the path to the failing node:
//!
//! ```rust,ignore
//! use reparser::textom::testing::assert_tree;
//!
//! let root = Tokenizer::new().tokenize("Hello world.");
//! assert_tree(&root)
//!     .is_root()
//!     .child_count(1)
//!     .child(0, |paragraph| {
//!         paragraph.is_paragraph().child(0, |sentence| {
//!             sentence.is_sentence().leaves(&[
//!                 (NodeKind::Word, "Hello"),
//!                 (NodeKind::WhiteSpace, " "),
//!                 (NodeKind::Word, "world"),
//!                 (NodeKind::Punctuation, "."),
//!             ]);
//!         });
//!     });
//! ```
//!
//! [`leaf_text`] and [`leaves`] flatten a tree for lossless-ness checks.

pub mod tree_assertions;

pub use tree_assertions::{assert_tree, NodeAssertion};

use crate::textom::ast::{Node, NodeKind};

/// Concatenate every leaf value in document order
pub fn leaf_text(node: &Node) -> String {
    node.descendants().filter_map(Node::value).collect()
}

/// Every leaf in document order, as kind and value
pub fn leaves(node: &Node) -> Vec<(NodeKind, String)> {
    node.descendants()
        .filter_map(|leaf| leaf.value().map(|value| (leaf.kind(), value.to_string())))
        .collect()
}

/// Check the structural invariants of a tree: containment rules and depth
pub fn assert_well_formed(node: &Node) {
    for parent in node.descendants().filter(|candidate| candidate.is_parent()) {
        for child in parent.children() {
            assert!(
                parent.kind().accepts(child.kind()),
                "{} {} holds a {}",
                parent.kind(),
                parent.id(),
                child.kind()
            );
            if let (Some(outer), Some(inner)) = (parent.hierarchy(), child.hierarchy()) {
                assert_eq!(inner, outer + 1, "{} under {}", child.kind(), parent.kind());
            }
        }
    }
}
