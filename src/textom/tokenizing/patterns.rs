//! Patterns shared by the tokenizer passes

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of line break characters (`\r`, `\n`, in any mix).
///
/// Whether a run is a paragraph boundary depends on where it sits and how many
/// breaks it holds; see [`count_line_breaks`].
pub(super) static LINE_BREAK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").unwrap());

/// A candidate sentence terminal: a run of full stops, or a run of `?`, `!`
/// and `‽`.
///
/// Only a lone full stop ends a sentence. A longer run is an ellipsis and is
/// skipped, see [`is_ellipsis`].
pub(super) static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.+|[?!‽]+").unwrap());

/// A run of two or more full stops
pub(super) fn is_ellipsis(terminal: &str) -> bool {
    terminal.len() > 1 && terminal.starts_with('.')
}

/// Number of line breaks in a run, counting `\r\n` as one
pub(super) fn count_line_breaks(run: &str) -> usize {
    run.len() - run.matches("\r\n").count()
}
