#![deny(missing_docs)]
//! mdbeamer core: transpiles a small Markdown dialect into beamer slides.

/// Parallel transpilation of independent sources.
pub mod batch;
/// Line classification and block handlers.
pub mod block;
/// Line cursor with pushback.
pub mod cursor;
/// Frame rendering and document assembly.
pub mod document;
/// Core error and diagnostic types.
pub mod error;
/// Reserved-character escaping.
pub mod escape;
/// Inline emphasis formatting.
pub mod inline;
/// Deck options.
pub mod options;
/// Slide records and accumulation.
pub mod slide;
/// Pipe table rendering.
pub mod table;

pub use batch::{
    BatchInput, BatchOptions, BatchProcessingResult, BatchResult, BatchStats, transpile_batch,
};
pub use block::{BlockKind, BlockParser};
pub use cursor::{Line, LineCursor};
pub use document::{Deck, render_document, render_frame, to_slides, transpile};
pub use error::{MdBeamerError, ParseDiagnostics, ParseWarning, SourceLocation};
pub use escape::{EscapeMode, escape_latex, escape_with};
pub use inline::apply_formatting;
pub use options::{DeckOptions, derive_title};
pub use slide::{SlideAccumulator, SlideRecord};
pub use table::render_table;
