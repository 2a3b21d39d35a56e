//! Edit engine: structural insert, remove and replace
//!
//!     Every edit that adds content takes *text*, not nodes. The text is run
//!     through the tokenizer, and the engine picks the part of the fresh tree
//!     that belongs directly under the target:
//!
//!     ```text
//!     insert into a Sentence (wants hierarchy 3):
//!
//!     RootNode            0 < 3, one child      -> descend
//!     └─ ParagraphNode    1 < 3, one child      -> descend
//!        └─ SentenceNode  2 < 3, many children,
//!                         head is at 3          -> take all children
//!     ```
//!
//!     A node with several children whose head does not sit at the wanted
//!     depth means the text spans several parents (two sentences inserted into
//!     a sentence, say). There is no sensible splice point for that, so the
//!     edit fails with [`EditError::MultipleParents`].
//!
//!     Nodes are validated before the target is touched: a failing edit leaves
//!     the target as it was.
//!
//! Ranges
//!
//!     Inserts return a [`Range`] over the inserted siblings. It holds node ids
//!     only and goes stale as soon as one of its endpoints is removed.

use crate::textom::ast::{EditError, Node, NodeId, Range};
use crate::textom::tokenizing::Tokenizer;
use std::collections::HashSet;

/// Tokenize `source` and insert it after `after`, or as the first children of
/// `target` when `after` is `None`.
pub fn insert(
    tokenizer: &Tokenizer,
    target: &mut Node,
    after: Option<NodeId>,
    source: &str,
) -> Result<Range, EditError> {
    ensure_parent(target)?;
    if let Some(anchor) = after {
        if target.position(anchor).is_none() {
            return Err(EditError::UnknownNode { id: anchor });
        }
    }

    let fresh = tokenizer.tokenize(source);
    if fresh.is_empty() {
        return Err(empty_content(source));
    }

    splice(target, after, fresh, source)
}

/// Remove the given nodes from anywhere below `target`, last one first.
///
/// Accepts a single id or any collection of ids. All ids are checked up front,
/// so either every node is removed or none is. The removed nodes are returned
/// in the order they were given.
pub fn remove(
    target: &mut Node,
    ids: impl IntoIterator<Item = NodeId>,
) -> Result<Vec<Node>, EditError> {
    let ids: Vec<NodeId> = ids.into_iter().collect();

    let mut seen = HashSet::with_capacity(ids.len());
    for &id in &ids {
        if id == target.id() || !target.contains(id) || !seen.insert(id) {
            return Err(EditError::UnknownNode { id });
        }
    }

    let mut removed: Vec<Node> = Vec::with_capacity(ids.len());
    for &id in ids.iter().rev() {
        // An earlier removal may have taken this node along with its ancestor.
        let node = match target.detach(id) {
            Some(node) => node,
            None => removed
                .iter_mut()
                .find_map(|ancestor| ancestor.detach(id))
                .ok_or(EditError::UnknownNode { id })?,
        };
        removed.push(node);
    }
    removed.reverse();

    tracing::debug!(
        parent = %target.kind(),
        removed = removed.len(),
        "removed nodes"
    );
    Ok(removed)
}

/// Insert `source` as the first children of `target`
pub fn prepend_content(
    tokenizer: &Tokenizer,
    target: &mut Node,
    source: &str,
) -> Result<Range, EditError> {
    insert(tokenizer, target, None, source)
}

/// Insert `source` after the last child of `target`
pub fn append_content(
    tokenizer: &Tokenizer,
    target: &mut Node,
    source: &str,
) -> Result<Range, EditError> {
    let after = target.tail().map(Node::id);
    insert(tokenizer, target, after, source)
}

/// Remove every child of `target`
pub fn remove_content(target: &mut Node) -> Result<Vec<Node>, EditError> {
    ensure_parent(target)?;
    let children: Vec<NodeId> = target.children().iter().map(Node::id).collect();
    remove(target, children)
}

/// Swap the children of `target` for the tokenized `source`.
///
/// The new content goes in before the old content comes out, so the target
/// never sits empty in between. Returns `None` when `source` tokenizes to
/// nothing; the old children are removed all the same.
pub fn replace_content(
    tokenizer: &Tokenizer,
    target: &mut Node,
    source: &str,
) -> Result<Option<Range>, EditError> {
    ensure_parent(target)?;
    let previous: Vec<NodeId> = target.children().iter().map(Node::id).collect();

    let fresh = tokenizer.tokenize(source);
    let range = if fresh.is_empty() {
        None
    } else {
        Some(splice(target, None, fresh, source)?)
    };

    remove(target, previous)?;
    Ok(range)
}

fn splice(
    target: &mut Node,
    after: Option<NodeId>,
    fresh: Node,
    source: &str,
) -> Result<Range, EditError> {
    let Some(level) = target.hierarchy() else {
        return Err(EditError::NotAParent {
            kind: target.kind(),
        });
    };

    let nodes = select_insertable(fresh, level + 1, source)?;
    if let Some(node) = nodes.iter().find(|node| !target.kind().accepts(node.kind())) {
        return Err(EditError::InvalidChild {
            parent: target.kind(),
            child: node.kind(),
        });
    }

    let (Some(first), Some(last)) = (nodes.first(), nodes.last()) else {
        return Err(empty_content(source));
    };
    let range = Range::new(first.id(), last.id());
    let count = nodes.len();

    // Back to front, so every node lands right after the anchor (or at the
    // front) and the original order comes out intact.
    for node in nodes.into_iter().rev() {
        match after {
            Some(anchor) => target.insert_after(anchor, node)?,
            None => target.prepend(node)?,
        };
    }

    tracing::debug!(parent = %target.kind(), inserted = count, "inserted content");
    Ok(range)
}

/// Walk down the fresh tree to the nodes that sit at `depth`
fn select_insertable(mut node: Node, depth: usize, source: &str) -> Result<Vec<Node>, EditError> {
    while node.hierarchy().is_some_and(|level| level < depth) {
        let mut children = node.into_children();

        if children.len() > 1 {
            let head_fits = children[0]
                .hierarchy()
                .map_or(true, |level| level == depth);
            return if head_fits {
                Ok(children)
            } else {
                Err(EditError::MultipleParents)
            };
        }

        node = match children.pop() {
            Some(only) => only,
            None => return Err(empty_content(source)),
        };
    }

    Ok(vec![node])
}

fn ensure_parent(target: &Node) -> Result<(), EditError> {
    if target.is_parent() {
        Ok(())
    } else {
        Err(EditError::NotAParent {
            kind: target.kind(),
        })
    }
}

fn empty_content(source: &str) -> EditError {
    EditError::EmptyContent {
        text: source.to_string(),
    }
}
