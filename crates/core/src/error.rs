use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location of the first column of a line
    pub fn line_start(line: usize) -> Self {
        Self::new(line, 1)
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while transpiling Markdown into a slide deck.
#[derive(Debug, Error)]
pub enum MdBeamerError {
    /// The table renderer was handed an empty row buffer.
    #[error("Malformed table block: no header row")]
    MalformedTableBlock,
    /// Options could not be deserialized.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl From<serde_json::Error> for MdBeamerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}

/// Non-fatal warnings that never change the rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// Table data row whose cell count differs from the header
    RaggedTableRow {
        /// Source location of the row
        location: SourceLocation,
        /// Header cell count
        expected: usize,
        /// Cell count found in the row
        found: usize,
    },
    /// A `*` delimiter that could not be paired and was kept literally
    UnclosedEmphasis {
        /// Source location of the line
        location: SourceLocation,
    },
}

impl ParseWarning {
    /// Get the location of this warning
    pub fn location(&self) -> &SourceLocation {
        match self {
            ParseWarning::RaggedTableRow { location, .. } => location,
            ParseWarning::UnclosedEmphasis { location } => location,
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::RaggedTableRow {
                location,
                expected,
                found,
            } => write!(
                f,
                "{}: table row has {} cells, header has {}",
                location, found, expected
            ),
            ParseWarning::UnclosedEmphasis { location } => {
                write!(f, "{}: unclosed emphasis delimiter", location)
            }
        }
    }
}

/// Collection of non-fatal diagnostics gathered during one transpile call
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// List of non-fatal warnings
    pub warnings: Vec<ParseWarning>,
}

impl ParseDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning to the diagnostics collection
    pub fn add_warning(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get total count of all diagnostics
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}
