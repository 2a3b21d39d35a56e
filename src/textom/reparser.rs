//! The reparser facade
//!
//! [`Reparser`] bundles a configured tokenizer with the edit engine and the AST
//! codec, so callers hold one value instead of threading a tokenizer through
//! every edit. Edits re-tokenize their source text with this reparser's own
//! tokenizer, which keeps inserted content consistent with the rest of a tree
//! parsed by the same reparser.
//!
//! ```rust,ignore
//! use reparser::Reparser;
//!
//! let reparser = Reparser::new();
//! let mut root = reparser.parse("Hello world.");
//! reparser.append_content(&mut root, "\n\nSecond paragraph.")?;
//! let json = reparser.to_ast(&root)?;
//! let copy = reparser.from_ast(&json)?;
//! assert_eq!(copy, root);
//! ```

use crate::textom::ast::{AstError, EditError, Node, NodeId, Range};
use crate::textom::config::{load_defaults, ReparserConfig};
use crate::textom::editing;
use crate::textom::formats::json::{self, Ast, Indent};
use crate::textom::tokenizing::Tokenizer;
use config::ConfigError;

#[derive(Debug, Clone, Default)]
pub struct Reparser {
    tokenizer: Tokenizer,
    indent: Indent,
}

impl Reparser {
    /// A reparser with the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ReparserConfig) -> Self {
        Self {
            tokenizer: Tokenizer::with_word_characters(config.tokenizer.word_characters),
            indent: Indent::from(&config.ast.indent),
        }
    }

    /// A reparser configured from the embedded default configuration file
    pub fn from_default_config() -> Result<Self, ConfigError> {
        Ok(Self::from_config(&load_defaults()?))
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize `text` into a fresh root
    pub fn parse(&self, text: &str) -> Node {
        self.tokenizer.tokenize(text)
    }

    // ------------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------------

    pub fn insert(
        &self,
        target: &mut Node,
        after: Option<NodeId>,
        source: &str,
    ) -> Result<Range, EditError> {
        editing::insert(&self.tokenizer, target, after, source)
    }

    pub fn remove(
        &self,
        target: &mut Node,
        ids: impl IntoIterator<Item = NodeId>,
    ) -> Result<Vec<Node>, EditError> {
        editing::remove(target, ids)
    }

    pub fn prepend_content(&self, target: &mut Node, source: &str) -> Result<Range, EditError> {
        editing::prepend_content(&self.tokenizer, target, source)
    }

    pub fn append_content(&self, target: &mut Node, source: &str) -> Result<Range, EditError> {
        editing::append_content(&self.tokenizer, target, source)
    }

    pub fn remove_content(&self, target: &mut Node) -> Result<Vec<Node>, EditError> {
        editing::remove_content(target)
    }

    pub fn replace_content(
        &self,
        target: &mut Node,
        source: &str,
    ) -> Result<Option<Range>, EditError> {
        editing::replace_content(&self.tokenizer, target, source)
    }

    // ------------------------------------------------------------------------
    // AST
    // ------------------------------------------------------------------------

    pub fn serialize(&self, node: &Node) -> Ast {
        json::serialize(node)
    }

    pub fn stringify(&self, node: &Node, indent: impl Into<Indent>) -> Result<String, AstError> {
        json::stringify(node, indent)
    }

    /// JSON text of `node`, indented as configured
    pub fn to_ast(&self, node: &Node) -> Result<String, AstError> {
        json::stringify(node, self.indent.clone())
    }

    pub fn deserialize(&self, ast: &Ast) -> Result<Node, AstError> {
        json::deserialize(ast)
    }

    /// Build a tree from JSON text
    pub fn from_ast(&self, text: &str) -> Result<Node, AstError> {
        json::deserialize_str(text)
    }
}
