//! Index-based line cursor with LIFO pushback.

/// One input line with its 1-indexed position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number (1-indexed)
    pub number: usize,
    /// Raw line text, without the trailing `\n`
    pub text: &'a str,
}

/// Single-pass cursor over the lines of a source string.
///
/// Lines pushed back are served before the underlying sequence advances,
/// most recently pushed first.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    pushed_back: Vec<Line<'a>>,
}

impl<'a> LineCursor<'a> {
    /// Split `source` on `\n` and position the cursor before the first line.
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.split('\n').collect(),
            pos: 0,
            pushed_back: Vec::new(),
        }
    }

    /// Consume and return the next line.
    pub fn consume(&mut self) -> Option<Line<'a>> {
        if let Some(line) = self.pushed_back.pop() {
            return Some(line);
        }
        let text = *self.lines.get(self.pos)?;
        self.pos += 1;
        Some(Line {
            number: self.pos,
            text,
        })
    }

    /// Return the line `consume` would yield next, without consuming it.
    pub fn peek_next(&self) -> Option<Line<'a>> {
        if let Some(line) = self.pushed_back.last() {
            return Some(*line);
        }
        self.lines.get(self.pos).copied().map(|text| Line {
            number: self.pos + 1,
            text,
        })
    }

    /// Return a consumed line to the front of the cursor.
    pub fn push_back(&mut self, line: Line<'a>) {
        self.pushed_back.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_lines_in_order_with_numbers() {
        let mut cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.consume(), Some(Line { number: 1, text: "a" }));
        assert_eq!(cursor.consume(), Some(Line { number: 2, text: "b" }));
        assert_eq!(cursor.consume(), None);
        assert_eq!(cursor.peek_next(), None);
    }

    #[test]
    fn pushback_is_served_first() {
        let mut cursor = LineCursor::new("a\nb\nc");
        let a = cursor.consume().unwrap();
        let b = cursor.consume().unwrap();
        cursor.push_back(b);
        assert_eq!(cursor.consume().map(|l| l.text), Some("b"));
        cursor.push_back(a);
        assert_eq!(cursor.peek_next().map(|l| l.number), Some(1));
        assert_eq!(cursor.consume().map(|l| l.text), Some("a"));
        assert_eq!(cursor.consume().map(|l| l.text), Some("c"));
    }

    #[test]
    fn multiple_pushbacks_are_lifo() {
        let mut cursor = LineCursor::new("a\nb\nc");
        let a = cursor.consume().unwrap();
        let b = cursor.consume().unwrap();
        cursor.push_back(b);
        cursor.push_back(a);
        let mut order = Vec::new();
        while let Some(line) = cursor.consume() {
            order.push(line.text);
        }
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = LineCursor::new("only");
        assert_eq!(cursor.peek_next().map(|l| l.text), Some("only"));
        assert_eq!(cursor.consume().map(|l| l.text), Some("only"));
        assert_eq!(cursor.peek_next(), None);
    }

    #[test]
    fn empty_source_has_one_blank_line() {
        let mut cursor = LineCursor::new("");
        assert_eq!(cursor.consume(), Some(Line { number: 1, text: "" }));
        assert_eq!(cursor.consume(), None);
    }
}
