//! Inline emphasis (`**bold**`, `*italic*`) on top of escaped text.

use crate::escape::{EscapeMode, escape_with};

/// Escape `text`, then convert emphasis spans to `\textbf{}` / `\textit{}`.
///
/// Escaping runs first so the braces inserted for emphasis are never escaped.
/// Bold is matched before italic so `**x**` is not read as two italic spans.
/// Spans are matched non-greedily, left to right.
pub fn apply_formatting(text: &str, mode: EscapeMode) -> String {
    let escaped = escape_with(text, mode);
    if !escaped.contains('*') {
        return escaped;
    }
    let bold = replace_spans(&escaped, "**", r"\textbf");
    replace_spans(&bold, "*", r"\textit")
}

/// Returns true when a formatted line still carries an unpaired `*`.
pub fn has_unpaired_emphasis(formatted: &str) -> bool {
    formatted.contains('*')
}

fn replace_spans(text: &str, delimiter: &str, command: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while let Some(start) = rest.find(delimiter) {
        let after_open = &rest[start + delimiter.len()..];
        let Some(end) = after_open.find(delimiter) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(command);
        out.push('{');
        out.push_str(&after_open[..end]);
        out.push('}');
        rest = &after_open[end + delimiter.len()..];
    }

    out.push_str(rest);
    out
}
