//! Root pass: text to paragraphs
//!
//! A run of line breaks is a paragraph boundary when it opens the text, closes
//! the text, or holds at least two breaks. A lone break inside a paragraph
//! stays part of that paragraph (it ends up as white space inside a sentence).

use super::paragraph::tokenize_paragraph;
use super::patterns::{count_line_breaks, LINE_BREAK_RUN};
use super::WordCharacters;
use crate::textom::ast::{Node, NodeKind};
use std::iter;

pub(super) fn tokenize_root(text: &str, words: WordCharacters) -> Node {
    let boundaries = LINE_BREAK_RUN
        .find_iter(text)
        .filter(|run| run.start() == 0 || run.end() == text.len() || count_line_breaks(run.as_str()) >= 2)
        .map(|run| (run.start(), run.end()))
        .chain(iter::once((text.len(), text.len())));

    let mut children = Vec::new();
    let mut start = 0;

    for (from, to) in boundaries {
        let paragraph = &text[start..from];
        if !paragraph.is_empty() {
            children.push(tokenize_paragraph(paragraph, words));
        }

        let white_space = &text[from..to];
        if !white_space.is_empty() {
            children.push(Node::white_space(white_space));
        }

        start = to;
    }

    Node::with_children(NodeKind::Root, children)
}
