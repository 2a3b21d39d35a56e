//! Treeviz formatter for text object model trees
//!
//! Treeviz is a one line per node view of a tree, meant for quick scanning in
//! test failures and debug output. Nesting is drawn with box connectors and
//! every line carries an icon for the node kind plus a label (the node text,
//! with line breaks escaped, truncated to 30 characters).
//!
//! Example:
//!
//! ```text
//! ⧉ Hello world.
//! └─ ¶ Hello world.
//!   └─ ≡ Hello world.
//!     ├─ ◦ Hello
//!     ├─ ␣ " "
//!     ├─ ◦ world
//!     └─ ⁘ .
//! ```
//!
//! Icons
//!     Root: ⧉
//!     Paragraph: ¶
//!     Sentence: ≡
//!     Word: ◦
//!     Punctuation: ⁘
//!     WhiteSpace: ␣ (label is quoted so blanks stay visible)

use crate::textom::ast::{Node, NodeKind};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node kind
fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Root => "⧉",
        NodeKind::Paragraph => "¶",
        NodeKind::Sentence => "≡",
        NodeKind::Word => "◦",
        NodeKind::Punctuation => "⁘",
        NodeKind::WhiteSpace => "␣",
    }
}

fn label(node: &Node) -> String {
    let text = node.to_string();
    match node.kind() {
        NodeKind::WhiteSpace => format!("{:?}", truncate(&text, LABEL_WIDTH)),
        _ => truncate(&text, LABEL_WIDTH).escape_debug().to_string(),
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.kind()),
        label(node)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(node, &child_prefix, output);
}

fn format_children(node: &Node, prefix: &str, output: &mut String) {
    let child_count = node.len();
    for (i, child) in node.children().iter().enumerate() {
        format_node(child, prefix, i == child_count - 1, output);
    }
}

/// Render `node` and its subtree as treeviz text
pub fn to_treeviz(node: &Node) -> String {
    let mut output = format!("{} {}\n", get_icon(node.kind()), label(node));
    format_children(node, "", &mut output);
    output
}
