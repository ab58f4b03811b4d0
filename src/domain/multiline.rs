// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multiline list splitting.
//!
//! Sequence-typed fields arrive as one raw string; this module turns it into
//! an ordered list of trimmed, non-empty items. Besides real newlines, the
//! literal two-character sequence `\` `n` is honoured as a separator, because
//! some environments transmit newlines as backslash-escaped text. Pipe
//! separation is opt-in and enabled by the binder for sequence fields only.

/// Splits a raw multiline value into trimmed, non-empty items.
///
/// The whole input is trimmed first; an input that is empty (or whitespace
/// only) yields an empty vector, never `[""]`. Separators are applied
/// cumulatively in a fixed order (newline, then the literal `\n` escape,
/// then `|` when `allow_vertical_bar` is set), each pass re-splitting every
/// fragment from the previous one. Surviving fragments keep their original
/// left-to-right order.
///
/// # Examples
///
/// ```
/// use envbind::domain::multiline::parse_multiline_input;
///
/// assert_eq!(
///     parse_multiline_input("a\nb\n\nc", false),
///     vec!["a", "b", "c"]
/// );
/// assert_eq!(parse_multiline_input("a|b", false), vec!["a|b"]);
/// assert_eq!(parse_multiline_input("a|b", true), vec!["a", "b"]);
/// assert!(parse_multiline_input("   ", true).is_empty());
/// ```
pub fn parse_multiline_input(input: &str, allow_vertical_bar: bool) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut separators = vec!["\n", "\\n"];
    if allow_vertical_bar {
        separators.push("|");
    }

    let mut fragments = vec![trimmed];
    for separator in separators {
        fragments = split_elements(fragments, separator);
    }

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits every element of `list` on `separator`, flattening the result.
fn split_elements<'a>(list: Vec<&'a str>, separator: &str) -> Vec<&'a str> {
    list.into_iter()
        .flat_map(|element| element.split(separator))
        .collect()
}
