//! JSON AST codec
//!
//! The AST of a node is an object with a `type` (the name from the type table)
//! and exactly one of
//!
//! - `value`: the string value of a leaf
//! - `children`: the ASTs of a parent's children, in order
//!
//! ```text
//! {"type":"SentenceNode","children":[
//!   {"type":"WordNode","value":"Hi"},
//!   {"type":"PunctuationNode","value":"."}
//! ]}
//! ```
//!
//! Trees hold no back references, so there is nothing cyclic to break on the
//! way out. On the way in, every child is attached through [`Node::append`],
//! so an AST that describes an impossible tree (a word directly under a root,
//! say) is rejected just like the equivalent edit would be.

use crate::textom::ast::{AstError, EditError, Node, NodeKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The serialized form of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAst")]
pub struct Ast {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(flatten)]
    pub content: AstContent,
}

/// A leaf value or a list of child ASTs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AstContent {
    Value(String),
    Children(Vec<Ast>),
}

/// The AST as it comes off the wire, before shape checks
#[derive(Debug, Deserialize)]
struct RawAst {
    #[serde(rename = "type")]
    kind: Option<String>,
    value: Option<String>,
    children: Option<Vec<RawAst>>,
}

impl TryFrom<RawAst> for Ast {
    type Error = AstError;

    fn try_from(raw: RawAst) -> Result<Self, Self::Error> {
        let kind: NodeKind = raw.kind.ok_or(AstError::MissingType)?.parse()?;
        let content = match (raw.value, raw.children) {
            (Some(value), None) => AstContent::Value(value),
            (None, Some(children)) => AstContent::Children(
                children
                    .into_iter()
                    .map(Ast::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            (Some(_), Some(_)) => return Err(AstError::AmbiguousContent { kind }),
            (None, None) => return Err(AstError::MissingContent { kind }),
        };
        Ok(Self { kind, content })
    }
}

impl FromStr for Ast {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawAst = serde_json::from_str(s)?;
        Ast::try_from(raw)
    }
}

/// Indentation for [`stringify`], following `JSON.stringify` conventions
///
/// A space count is capped at 10 and a literal string is cut to 10 characters.
/// Zero spaces or an empty string mean compact output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Compact,
    Spaces(usize),
    Text(String),
}

impl Indent {
    const MAX: usize = 10;

    /// The string repeated once per nesting level, `None` for compact output
    fn unit(&self) -> Option<String> {
        let unit = match self {
            Indent::Compact => return None,
            Indent::Spaces(count) => " ".repeat((*count).min(Self::MAX)),
            Indent::Text(text) => text.chars().take(Self::MAX).collect(),
        };
        (!unit.is_empty()).then_some(unit)
    }
}

impl From<usize> for Indent {
    fn from(count: usize) -> Self {
        Indent::Spaces(count)
    }
}

impl From<&str> for Indent {
    fn from(text: &str) -> Self {
        Indent::Text(text.to_string())
    }
}

impl From<String> for Indent {
    fn from(text: String) -> Self {
        Indent::Text(text)
    }
}

/// Convert a node and its subtree into an AST
pub fn serialize(node: &Node) -> Ast {
    let content = match node.value() {
        Some(value) => AstContent::Value(value.to_string()),
        None => AstContent::Children(node.children().iter().map(serialize).collect()),
    };
    Ast {
        kind: node.kind(),
        content,
    }
}

/// Serialize a node and render it as JSON text
pub fn stringify(node: &Node, indent: impl Into<Indent>) -> Result<String, AstError> {
    let ast = serialize(node);
    let text = match indent.into().unit() {
        None => serde_json::to_string(&ast)?,
        Some(unit) => {
            let mut buffer = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(unit.as_bytes());
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            ast.serialize(&mut serializer)?;
            String::from_utf8_lossy(&buffer).into_owned()
        }
    };
    Ok(text)
}

/// Build a fresh tree from an AST
pub fn deserialize(ast: &Ast) -> Result<Node, AstError> {
    let node = build(ast)?;
    tracing::debug!(kind = %node.kind(), "deserialized AST");
    Ok(node)
}

/// Parse JSON text and build a fresh tree from it
pub fn deserialize_str(text: &str) -> Result<Node, AstError> {
    let ast: Ast = text.parse()?;
    deserialize(&ast)
}

fn build(ast: &Ast) -> Result<Node, AstError> {
    let mut node = Node::new(ast.kind);
    match &ast.content {
        AstContent::Value(value) => node.from_string(value.as_str())?,
        AstContent::Children(children) => {
            if !node.is_parent() {
                return Err(EditError::NotAParent { kind: ast.kind }.into());
            }
            for child in children {
                node.append(build(child)?)?;
            }
        }
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textom::tokenizing::Tokenizer;

    #[test]
    fn test_serialize_leaf() {
        let ast = serialize(&Node::word("cat"));
        assert_eq!(ast.kind, NodeKind::Word);
        assert_eq!(ast.content, AstContent::Value("cat".to_string()));
    }

    #[test]
    fn test_compact_json_shape() {
        let sentence = Tokenizer::new().tokenize("Hi.");
        let json = stringify(&sentence, Indent::Compact).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"type":"RootNode","children":[{"type":"ParagraphNode","children":["#,
                r#"{"type":"SentenceNode","children":[{"type":"WordNode","value":"Hi"},"#,
                r#"{"type":"PunctuationNode","value":"."}]}]}]}"#
            )
        );
    }

    #[test]
    fn test_pretty_json_with_spaces_and_text() {
        let word = Node::word("cat");
        assert_eq!(
            stringify(&word, Indent::Spaces(2)).unwrap(),
            "{\n  \"type\": \"WordNode\",\n  \"value\": \"cat\"\n}"
        );
        assert_eq!(
            stringify(&word, "\t").unwrap(),
            "{\n\t\"type\": \"WordNode\",\n\t\"value\": \"cat\"\n}"
        );
    }

    #[test]
    fn test_indent_limits() {
        assert_eq!(Indent::Spaces(0).unit(), None);
        assert_eq!(Indent::Text(String::new()).unit(), None);
        assert_eq!(Indent::Spaces(40).unit().map(|unit| unit.len()), Some(10));
        assert_eq!(
            Indent::from("abcdefghijklmno").unit().as_deref(),
            Some("abcdefghij")
        );
    }

    #[test]
    fn test_empty_parent_serializes_children() {
        let json = stringify(&Node::paragraph(), Indent::Compact).unwrap();
        assert_eq!(json, r#"{"type":"ParagraphNode","children":[]}"#);
        assert_eq!(deserialize_str(&json).unwrap(), Node::paragraph());
    }

    #[test]
    fn test_deserialize_word() {
        let node = deserialize_str(r#"{"type":"WordNode","value":"cat"}"#).unwrap();
        assert_eq!(node.kind(), NodeKind::Word);
        assert_eq!(node.to_string(), "cat");
    }

    #[test]
    fn test_round_trip_preserves_tree() {
        let root = Tokenizer::new().tokenize("One, two.\n\nThree?! Four...");
        let rebuilt = deserialize(&serialize(&root)).unwrap();
        assert_eq!(rebuilt, root);
        assert_eq!(rebuilt.to_string(), root.to_string());
    }

    #[test]
    fn test_missing_type() {
        let err = deserialize_str(r#"{"value":"cat"}"#).unwrap_err();
        assert!(matches!(err, AstError::MissingType));
    }

    #[test]
    fn test_missing_and_ambiguous_content() {
        let err = deserialize_str(r#"{"type":"WordNode"}"#).unwrap_err();
        assert!(matches!(
            err,
            AstError::MissingContent {
                kind: NodeKind::Word
            }
        ));

        let err = deserialize_str(r#"{"type":"WordNode","value":"a","children":[]}"#).unwrap_err();
        assert!(matches!(err, AstError::AmbiguousContent { .. }));
    }

    #[test]
    fn test_unknown_type() {
        let err = deserialize_str(r#"{"type":"TextNode","value":"a"}"#).unwrap_err();
        assert!(matches!(err, AstError::UnknownType(name) if name == "TextNode"));
    }

    #[test]
    fn test_invalid_json() {
        let err = deserialize_str("{not json").unwrap_err();
        assert!(matches!(err, AstError::Json(_)));
    }

    #[test]
    fn test_impossible_trees_are_rejected() {
        let err = deserialize_str(r#"{"type":"RootNode","children":[{"type":"WordNode","value":"a"}]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            AstError::Structure(EditError::InvalidChild {
                parent: NodeKind::Root,
                child: NodeKind::Word
            })
        ));

        let err = deserialize_str(r#"{"type":"WordNode","children":[]}"#).unwrap_err();
        assert!(matches!(err, AstError::Structure(EditError::NotAParent { .. })));

        let err = deserialize_str(r#"{"type":"SentenceNode","value":"a"}"#).unwrap_err();
        assert!(matches!(err, AstError::Structure(EditError::NotALeaf { .. })));
    }

    #[test]
    fn test_ast_deserializes_through_serde() {
        let ast: Ast = serde_json::from_str(r#"{"type":"WhiteSpaceNode","value":" "}"#).unwrap();
        assert_eq!(ast.kind, NodeKind::WhiteSpace);
        assert!(serde_json::from_str::<Ast>(r#"{"type":"WhiteSpaceNode"}"#).is_err());
    }
}
