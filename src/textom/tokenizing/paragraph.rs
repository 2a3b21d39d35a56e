//! Paragraph pass: paragraph text to sentences
//!
//! Every sentence terminal ends a candidate fragment; an ellipsis is not a
//! terminal. Fragments without a single word character (stray terminals,
//! trailing white space) are glued onto the fragment before them. The first
//! fragment has nothing before it, so it always stands as a sentence of its own.

use super::patterns::{is_ellipsis, SENTENCE_END};
use super::sentence::tokenize_sentence;
use super::WordCharacters;
use crate::textom::ast::{Node, NodeKind};
use std::iter;
use std::ops::Range;

pub(super) fn tokenize_paragraph(text: &str, words: WordCharacters) -> Node {
    let mut children = Vec::new();

    for fragment in sentence_fragments(text, words) {
        let (leading, rest) = split_leading_white_space(&text[fragment]);
        if let Some(white_space) = leading {
            children.push(Node::white_space(white_space));
        }
        children.push(tokenize_sentence(rest, words));
    }

    tracing::trace!(bytes = text.len(), children = children.len(), "tokenized paragraph");
    Node::with_children(NodeKind::Paragraph, children)
}

/// Byte ranges of the sentences in `text`, after merging
fn sentence_fragments(text: &str, words: WordCharacters) -> Vec<Range<usize>> {
    let ends = SENTENCE_END
        .find_iter(text)
        .filter(|terminal| !is_ellipsis(terminal.as_str()))
        .map(|terminal| terminal.end())
        .chain(iter::once(text.len()));

    let mut fragments: Vec<Range<usize>> = Vec::new();
    let mut start = 0;

    for end in ends {
        if end <= start {
            continue;
        }

        let has_word = text[start..end].chars().any(|c| words.is_word(c));
        match fragments.last_mut() {
            Some(previous) if !has_word => previous.end = end,
            _ => fragments.push(start..end),
        }

        start = end;
    }

    fragments
}

/// Split off leading white space, leaving at least one character behind
fn split_leading_white_space(fragment: &str) -> (Option<&str>, &str) {
    let mut split = fragment.len() - fragment.trim_start().len();
    if split == fragment.len() {
        split = fragment.char_indices().last().map_or(0, |(index, _)| index);
    }

    if split == 0 {
        (None, fragment)
    } else {
        (Some(&fragment[..split]), &fragment[split..])
    }
}
