//! Frame rendering and beamer document assembly.

use std::fmt::Write as _;

use crate::block::BlockParser;
use crate::error::{MdBeamerError, ParseDiagnostics};
use crate::escape::{EscapeMode, escape_with};
use crate::options::DeckOptions;
use crate::slide::SlideRecord;

/// A transpiled deck.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Unescaped document title.
    pub title: String,
    /// Slides in input order.
    pub slides: Vec<SlideRecord>,
    /// Complete beamer document.
    pub document: String,
    /// Non-fatal warnings gathered while parsing.
    pub diagnostics: ParseDiagnostics,
}

/// Header fields substituted into the document template.
#[derive(Debug)]
struct TemplateFields<'a> {
    title: String,
    author: String,
    date: &'a str,
    theme: &'a str,
}

/// Parse `source` into slide records without assembling a document.
pub fn to_slides(
    source: &str,
    mode: EscapeMode,
) -> Result<(Vec<SlideRecord>, ParseDiagnostics), MdBeamerError> {
    BlockParser::new(source, mode).parse()
}

/// Transpile `source` into a complete beamer document.
pub fn transpile(source: &str, options: &DeckOptions) -> Result<Deck, MdBeamerError> {
    let (slides, diagnostics) = to_slides(source, options.escape_mode)?;
    let title = options.resolve_title(source);
    let document = render_document(&title, &slides, options);

    if diagnostics.has_warnings() {
        log::debug!(
            "transpiled {} slides with {} warnings",
            slides.len(),
            diagnostics.count()
        );
    }

    Ok(Deck {
        title,
        slides,
        document,
        diagnostics,
    })
}

/// Wrap one slide in a `frame` environment. Untitled slides get `{}`.
pub fn render_frame(slide: &SlideRecord) -> String {
    format!(
        "\\begin{{frame}}{{{}}}\n{}\n\\end{{frame}}",
        slide.title.as_deref().unwrap_or_default(),
        slide.content.join("\n")
    )
}

/// Assemble the full document around the rendered frames. `title` is escaped
/// here; slide content is expected to be escaped already.
pub fn render_document(title: &str, slides: &[SlideRecord], options: &DeckOptions) -> String {
    let fields = TemplateFields {
        title: escape_with(title, options.escape_mode),
        author: escape_with(&options.author, options.escape_mode),
        date: &options.date,
        theme: &options.theme,
    };
    let body = slides
        .iter()
        .map(render_frame)
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::with_capacity(body.len() + 512);
    out.push_str("\\documentclass{beamer}\n");
    writeln!(out, "\\usetheme{{{}}}", fields.theme).ok();
    out.push_str("\\usepackage[utf8]{inputenc}\n");
    out.push_str("\\usepackage{graphicx}\n");
    out.push_str("\\usepackage{booktabs}\n");
    out.push_str("\\usepackage{hyperref}\n");
    writeln!(out, "\\title{{{}}}", fields.title).ok();
    writeln!(out, "\\author{{{}}}", fields.author).ok();
    writeln!(out, "\\date{{{}}}", fields.date).ok();
    out.push_str("\n\\begin{document}\n\n");
    out.push_str("\\frame{\\titlepage}\n\n");
    out.push_str(&body);
    out.push_str("\n\n\\end{document}\n");
    out
}
