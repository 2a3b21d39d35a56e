//! Sentence pass: sentence text to words, punctuation and white space
//!
//! A run of one repeated non-alphanumeric character (`...`, `--`, three spaces)
//! is always a token of its own. Whatever sits between two such runs is a word.
//! Mixed runs split: `?!` is two tokens, `" \t"` is two white space tokens.

use super::WordCharacters;
use crate::textom::ast::{Node, NodeKind};

pub(super) fn tokenize_sentence(text: &str, words: WordCharacters) -> Node {
    let children: Vec<Node> = split_tokens(text, words)
        .into_iter()
        .map(|token| classify(token, words))
        .collect();
    tracing::trace!(tokens = children.len(), "tokenized sentence");
    Node::with_children(NodeKind::Sentence, children)
}

fn split_tokens(text: &str, words: WordCharacters) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if words.is_alphanumeric(c) {
            continue;
        }

        let mut end = index + c.len_utf8();
        while let Some(&(next_index, next)) = chars.peek() {
            if next != c {
                break;
            }
            end = next_index + next.len_utf8();
            chars.next();
        }

        if start < index {
            tokens.push(&text[start..index]);
        }
        tokens.push(&text[index..end]);
        start = end;
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}

fn classify(token: &str, words: WordCharacters) -> Node {
    if token.chars().all(char::is_whitespace) {
        Node::white_space(token)
    } else if token.chars().next().is_some_and(|c| !words.is_alphanumeric(c)) {
        Node::punctuation(token)
    } else {
        Node::word(token)
    }
}
