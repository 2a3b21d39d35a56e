//! Property-based tests for the tokenizer and the AST codec

use proptest::prelude::*;
use reparser::textom::formats::{deserialize, deserialize_str, serialize, stringify, Indent};
use reparser::textom::testing::{assert_well_formed, leaf_text};
use reparser::textom::tokenizing::{Tokenizer, WordCharacters};
use reparser::NodeKind;

/// Short prose made of the characters the tokenizer cares about
fn prose_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z0-9]{1,8}",
            3 => Just(" ".to_string()),
            2 => prop_oneof![Just(".".to_string()), Just("?".to_string()), Just("!".to_string())],
            1 => prop_oneof![Just("\n".to_string()), Just("\r\n".to_string()), Just("\n\n".to_string())],
            1 => prop_oneof![Just(",".to_string()), Just("\"".to_string()), Just("--".to_string()), Just("‽".to_string())],
            1 => Just("\t".to_string()),
            1 => "[àéïøß]{1,3}",
        ],
        0..40,
    )
    .prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn test_tokenize_is_lossless(text in prose_strategy()) {
        let root = Tokenizer::new().tokenize(&text);
        prop_assert_eq!(leaf_text(&root), text.clone());
        prop_assert_eq!(root.to_string(), text);
    }

    #[test]
    fn test_tokenize_arbitrary_text_is_lossless(text in any::<String>()) {
        let root = Tokenizer::new().tokenize(&text);
        prop_assert_eq!(root.to_string(), text);
    }

    #[test]
    fn test_unicode_mode_is_lossless(text in prose_strategy()) {
        let root = Tokenizer::with_word_characters(WordCharacters::Unicode).tokenize(&text);
        prop_assert_eq!(root.to_string(), text);
    }

    #[test]
    fn test_tokenize_is_well_formed(text in prose_strategy()) {
        let root = Tokenizer::new().tokenize(&text);
        prop_assert_eq!(root.kind(), NodeKind::Root);
        assert_well_formed(&root);
    }

    #[test]
    fn test_no_empty_parents_or_leaves(text in prose_strategy()) {
        let root = Tokenizer::new().tokenize(&text);
        for node in root.descendants().skip(1) {
            match node.value() {
                Some(value) => prop_assert!(!value.is_empty(), "empty {}", node.kind()),
                None => prop_assert!(!node.is_empty(), "childless {}", node.kind()),
            }
        }
    }

    #[test]
    fn test_white_space_leaves_hold_only_white_space(text in prose_strategy()) {
        let root = Tokenizer::new().tokenize(&text);
        for node in root.descendants().filter(|node| node.kind() == NodeKind::WhiteSpace) {
            let value = node.value().unwrap_or_default();
            prop_assert!(value.chars().all(char::is_whitespace), "{:?}", value);
        }
    }

    #[test]
    fn test_ast_round_trip(text in prose_strategy()) {
        let root = Tokenizer::new().tokenize(&text);
        let rebuilt = deserialize(&serialize(&root)).unwrap();
        prop_assert_eq!(&rebuilt, &root);
        prop_assert_eq!(rebuilt.to_string(), text);
    }

    #[test]
    fn test_ast_text_round_trip(text in prose_strategy(), spaces in 0usize..12) {
        let root = Tokenizer::new().tokenize(&text);
        let json = stringify(&root, Indent::Spaces(spaces)).unwrap();
        let rebuilt = deserialize_str(&json).unwrap();
        prop_assert_eq!(rebuilt, root);
    }
}
