//! Escaping of reserved LaTeX characters.

use serde::{Deserialize, Serialize};

/// Reserved characters and their replacements, in reference table order.
const REPLACEMENTS: [(char, &str); 10] = [
    ('&', r"\&"),
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
    ('\\', r"\textbackslash{}"),
];

/// How reserved characters are escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// Single pass; every reserved character is replaced exactly once.
    #[default]
    Strict,
    /// Sequential substitutions in table order. Backslashes introduced by
    /// earlier substitutions are re-escaped by the final backslash rule.
    Legacy,
}

fn replacement(c: char) -> Option<&'static str> {
    REPLACEMENTS
        .iter()
        .find_map(|(key, value)| (*key == c).then_some(*value))
}

fn is_reserved(c: char) -> bool {
    replacement(c).is_some()
}

/// Escape `text` with the default [`EscapeMode::Strict`] rules.
pub fn escape_latex(text: &str) -> String {
    escape_with(text, EscapeMode::Strict)
}

/// Escape `text` using the given mode.
pub fn escape_with(text: &str, mode: EscapeMode) -> String {
    if !text.contains(is_reserved) {
        return text.to_string();
    }

    match mode {
        EscapeMode::Strict => {
            let mut out = String::with_capacity(text.len() + 8);
            for c in text.chars() {
                match replacement(c) {
                    Some(value) => out.push_str(value),
                    None => out.push(c),
                }
            }
            out
        }
        EscapeMode::Legacy => REPLACEMENTS
            .iter()
            .fold(text.to_string(), |acc, (key, value)| {
                acc.replace(*key, value)
            }),
    }
}
