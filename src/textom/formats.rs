//! Output formats for text object model trees
//!
//! - `json` - The lossless AST: serialize, stringify and deserialize
//! - `treeviz` - A one-line-per-node view for eyeballing trees while debugging

pub mod json;
pub mod treeviz;

pub use json::{deserialize, deserialize_str, serialize, stringify, Ast, AstContent, Indent};
pub use treeviz::to_treeviz;
