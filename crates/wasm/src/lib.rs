use mdbeamer_core::{DeckOptions, EscapeMode, SlideRecord};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Config
// ============================================================================

fn parse_config(config: JsValue) -> Result<DeckOptions, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(DeckOptions::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

// ============================================================================
// Transpile API Types
// ============================================================================

/// One slide as seen from JavaScript.
#[derive(Debug, Clone, Serialize)]
pub struct SlideEntry {
    /// Escaped slide title, `null` for leading untitled content.
    pub title: Option<String>,
    /// Markup fragments in input order.
    pub content: Vec<String>,
}

impl From<SlideRecord> for SlideEntry {
    fn from(slide: SlideRecord) -> Self {
        Self {
            title: slide.title,
            content: slide.content,
        }
    }
}

/// Result of transpiling Markdown into a beamer document.
#[derive(Debug, Clone, Serialize)]
pub struct TranspileResult {
    /// Unescaped document title.
    pub title: String,
    /// Complete beamer document.
    pub document: String,
    /// Slides in input order.
    pub slides: Vec<SlideEntry>,
    /// Human-readable non-fatal warnings.
    pub warnings: Vec<String>,
}

// ============================================================================
// Transpile API
// ============================================================================

/// Transpiles Markdown into a beamer slide deck.
///
/// # Arguments
///
/// * `source` - The Markdown source
/// * `config` - Optional deck options (JsValue): `title`, `author`, `date`,
///   `theme`, `escapeMode` (`"strict"` or `"legacy"`)
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { transpile } from './mdbeamer_wasm';
///
/// const result = transpile("# Intro\n- **one**", { author: "Ops" });
/// // result.slides = [{ title: "Intro", content: ["\\begin{itemize}", ...] }]
/// ```
#[wasm_bindgen]
pub fn transpile(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = parse_config(config)?;

    let deck = mdbeamer_core::transpile(source, &options)
        .map_err(|e| JsError::new(&format!("Transpile error: {}", e)))?;

    let result = TranspileResult {
        title: deck.title,
        document: deck.document,
        slides: deck.slides.into_iter().map(SlideEntry::from).collect(),
        warnings: deck
            .diagnostics
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Escapes reserved LaTeX characters in `text`.
///
/// `legacy` selects the sequential substitution order that re-escapes
/// inserted backslashes.
#[wasm_bindgen(js_name = escape_latex)]
pub fn escape_latex(text: &str, legacy: bool) -> String {
    let mode = if legacy {
        EscapeMode::Legacy
    } else {
        EscapeMode::Strict
    };
    mdbeamer_core::escape_with(text, mode)
}
