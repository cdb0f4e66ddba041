//! Line classification and the per-block handlers that build slides.

use crate::cursor::{Line, LineCursor};
use crate::error::{MdBeamerError, ParseDiagnostics, ParseWarning, SourceLocation};
use crate::escape::{EscapeMode, escape_with};
use crate::inline::{apply_formatting, has_unpaired_emphasis};
use crate::slide::{SlideAccumulator, SlideRecord};
use crate::table::{is_separator_row, is_table_row, render_table};

/// Kind of block a trimmed, non-blank line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `# ` heading; starts a new slide.
    Title,
    /// `## ` heading.
    Subtitle,
    /// `### ` heading.
    SubSubtitle,
    /// `- ` bullet item.
    ListItem,
    /// Pipe-delimited table row.
    TableRow,
    /// Anything else.
    Paragraph,
}

impl BlockKind {
    /// Classify a trimmed line. Rules are tried in fixed priority order and
    /// the first match wins.
    pub fn classify(line: &str) -> Self {
        if line.starts_with("# ") {
            BlockKind::Title
        } else if line.starts_with("## ") {
            BlockKind::Subtitle
        } else if line.starts_with("### ") {
            BlockKind::SubSubtitle
        } else if line.starts_with("- ") {
            BlockKind::ListItem
        } else if is_table_row(line) {
            BlockKind::TableRow
        } else {
            BlockKind::Paragraph
        }
    }
}

/// Single-pass parser that dispatches each line to its block handler.
pub struct BlockParser<'a> {
    cursor: LineCursor<'a>,
    slides: SlideAccumulator,
    diagnostics: ParseDiagnostics,
    mode: EscapeMode,
}

impl<'a> BlockParser<'a> {
    /// Create a parser over `source`.
    pub fn new(source: &'a str, mode: EscapeMode) -> Self {
        Self {
            cursor: LineCursor::new(source),
            slides: SlideAccumulator::new(),
            diagnostics: ParseDiagnostics::new(),
            mode,
        }
    }

    /// Consume the whole source and return the slides in input order.
    pub fn parse(mut self) -> Result<(Vec<SlideRecord>, ParseDiagnostics), MdBeamerError> {
        while let Some(line) = self.cursor.consume() {
            let text = line.text.trim();
            if text.is_empty() {
                continue;
            }
            let line = Line {
                number: line.number,
                text,
            };

            let kind = BlockKind::classify(text);
            log::trace!("line {}: {:?}", line.number, kind);

            match kind {
                BlockKind::Title => self.handle_title(line),
                BlockKind::Subtitle => self.handle_subtitle(line),
                BlockKind::SubSubtitle => self.handle_subsubtitle(line),
                BlockKind::ListItem => self.handle_list(line),
                BlockKind::TableRow => self.handle_table(line)?,
                BlockKind::Paragraph => self.handle_paragraph(line),
            }
        }

        Ok((self.slides.finish(), self.diagnostics))
    }

    fn handle_title(&mut self, line: Line<'a>) {
        let title = escape_with(heading_text(line.text, 2), self.mode);
        self.slides.start_slide(title);
    }

    fn handle_subtitle(&mut self, line: Line<'a>) {
        let text = escape_with(heading_text(line.text, 3), self.mode);
        self.slides.push(format!(r"\textbf{{{}}}\\[1ex]", text));
    }

    fn handle_subsubtitle(&mut self, line: Line<'a>) {
        let text = escape_with(heading_text(line.text, 4), self.mode);
        self.slides
            .push(format!(r"\textbf{{\small {}}}\\[0.5ex]", text));
    }

    fn handle_list(&mut self, line: Line<'a>) {
        self.slides.push(r"\begin{itemize}".to_string());
        self.push_item(line);

        while let Some(next) = self.cursor.peek_next() {
            let text = next.text.trim();
            if !text.starts_with("- ") {
                break;
            }
            self.cursor.consume();
            self.push_item(Line {
                number: next.number,
                text,
            });
        }

        self.slides.push(r"\end{itemize}".to_string());
    }

    fn push_item(&mut self, line: Line<'a>) {
        let item = self.format_line(line, line.text[2..].trim());
        self.slides.push(format!(r"\item {}", item));
    }

    fn handle_table(&mut self, line: Line<'a>) -> Result<(), MdBeamerError> {
        let mut rows = vec![line];

        while let Some(next) = self.cursor.consume() {
            if is_table_row(next.text) {
                rows.push(Line {
                    number: next.number,
                    text: next.text.trim(),
                });
            } else if !is_separator_row(next.text) {
                self.cursor.push_back(next);
                break;
            }
        }

        let table = render_table(&rows, self.mode, &mut self.diagnostics)?;
        self.slides.push(table);
        Ok(())
    }

    fn handle_paragraph(&mut self, line: Line<'a>) {
        let text = self.format_line(line, line.text);
        self.slides.push(format!(r"{}\\", text));
    }

    fn format_line(&mut self, line: Line<'a>, text: &str) -> String {
        let formatted = apply_formatting(text, self.mode);
        if has_unpaired_emphasis(&formatted) {
            self.diagnostics.add_warning(ParseWarning::UnclosedEmphasis {
                location: SourceLocation::line_start(line.number),
            });
        }
        formatted
    }
}

/// Text after a heading marker of `prefix_len` bytes, trimmed.
fn heading_text(line: &str, prefix_len: usize) -> &str {
    line[prefix_len..].trim()
}
