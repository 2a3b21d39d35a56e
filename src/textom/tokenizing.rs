//! Tokenizer: text in, tree out
//!
//!     Tokenizing runs three nested segmentation passes. Each pass has the same
//!     shape: find breakpoints, slice the text into alternating segments, then
//!     classify each segment or hand it to the next pass down.
//!
//!     1. root      - line break runs split the text into paragraphs
//!     2. paragraph - sentence terminals split a paragraph into sentences
//!     3. sentence  - runs of one repeated symbol split a sentence into words,
//!                    punctuation and white space
//!
//!     Every character of the input ends up in exactly one leaf, so the text of
//!     the resulting root is always the input. There is no failure mode: text
//!     that looks like nothing in particular still becomes some mix of
//!     punctuation and white space.
//!
//! Word Characters
//!
//!     Which characters count as letters and digits is configurable through
//!     [`WordCharacters`]. The default, `Ascii`, restricts both the sentence
//!     merge rule and the token split to `[0-9A-Za-z]`, so accented letters are
//!     treated as symbols. `Unicode` counts letters and digits of any script.

mod paragraph;
mod patterns;
mod root;
mod sentence;

use crate::textom::ast::Node;
use serde::{Deserialize, Serialize};

/// Character class used to tell words from symbols
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCharacters {
    /// `[0-9A-Za-z]` only
    #[default]
    Ascii,
    /// Unicode letters and digits
    Unicode,
}

impl WordCharacters {
    /// Letters and digits
    pub fn is_alphanumeric(self, c: char) -> bool {
        match self {
            WordCharacters::Unicode => c.is_alphanumeric(),
            WordCharacters::Ascii => c.is_ascii_alphanumeric(),
        }
    }

    /// Letters, digits and the underscore
    pub fn is_word(self, c: char) -> bool {
        c == '_' || self.is_alphanumeric(c)
    }
}

/// Turns text into a root node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    words: WordCharacters,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_word_characters(words: WordCharacters) -> Self {
        Self { words }
    }

    pub fn word_characters(&self) -> WordCharacters {
        self.words
    }

    /// Tokenize `text` into a fresh root. Empty text gives an empty root.
    pub fn tokenize(&self, text: &str) -> Node {
        let root = root::tokenize_root(text, self.words);
        tracing::trace!(
            bytes = text.len(),
            children = root.len(),
            "tokenized text into root"
        );
        root
    }
}
