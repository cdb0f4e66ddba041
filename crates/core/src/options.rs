//! Deck options: document template fields and escaping mode.

use serde::{Deserialize, Serialize};

use crate::error::MdBeamerError;
use crate::escape::EscapeMode;

/// Title used when none is given and none can be derived from the source.
pub const DEFAULT_TITLE: &str = "Presentation";
/// Default `\author{}` value.
pub const DEFAULT_AUTHOR: &str = "Report Generator AI";
/// Default `\date{}` value, inserted without escaping.
pub const DEFAULT_DATE: &str = r"\today";
/// Default beamer theme.
pub const DEFAULT_THEME: &str = "Madrid";

/// Options for assembling a slide deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckOptions {
    /// Document title; derived from the first source line when absent.
    pub title: Option<String>,
    /// Author shown on the title page (escaped).
    pub author: String,
    /// Date shown on the title page (raw markup).
    pub date: String,
    /// Beamer theme name.
    pub theme: String,
    /// Escaping rules for all inserted text.
    #[serde(alias = "escapeMode")]
    pub escape_mode: EscapeMode,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: DEFAULT_AUTHOR.to_string(),
            date: DEFAULT_DATE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            escape_mode: EscapeMode::Strict,
        }
    }
}

impl DeckOptions {
    /// Parse options from a JSON object. Missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self, MdBeamerError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Set an explicit document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Resolve the unescaped document title for `source`.
    pub fn resolve_title(&self, source: &str) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => derive_title(source),
        }
    }
}

/// Derive a title from the first line of `source` with every `#` removed.
pub fn derive_title(source: &str) -> String {
    let first = source.split('\n').next().unwrap_or_default();
    let title = first.replace('#', "");
    let title = title.trim();
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}
