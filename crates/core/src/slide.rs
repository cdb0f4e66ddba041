//! Slide records and the accumulator that produces them.

use serde::Serialize;

/// One finished slide: optional escaped title and its markup fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideRecord {
    /// Escaped slide title, absent for leading untitled content
    pub title: Option<String>,
    /// Markup fragments in input order
    pub content: Vec<String>,
}

/// Holds the in-progress slide and the slides flushed so far.
#[derive(Debug, Default)]
pub struct SlideAccumulator {
    title: Option<String>,
    content: Vec<String>,
    slides: Vec<SlideRecord>,
}

impl SlideAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flush the current slide and open a new one titled `title`.
    pub fn start_slide(&mut self, title: String) {
        self.flush();
        self.title = Some(title);
    }

    /// Append a fragment to the current slide.
    pub fn push(&mut self, fragment: String) {
        self.content.push(fragment);
    }

    /// Emit the current slide if it has a title or any content.
    pub fn flush(&mut self) {
        if self.title.is_none() && self.content.is_empty() {
            return;
        }
        let record = SlideRecord {
            title: self.title.take(),
            content: std::mem::take(&mut self.content),
        };
        log::debug!(
            "flushed slide {} ({} fragments)",
            self.slides.len(),
            record.content.len()
        );
        self.slides.push(record);
    }

    /// Flush any pending slide and return all slides in emission order.
    pub fn finish(mut self) -> Vec<SlideRecord> {
        self.flush();
        self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_emits_nothing() {
        assert!(SlideAccumulator::new().finish().is_empty());
    }

    #[test]
    fn leading_content_becomes_untitled_slide() {
        let mut acc = SlideAccumulator::new();
        acc.push("intro".into());
        acc.start_slide("First".into());
        acc.push("body".into());
        let slides = acc.finish();

        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, None);
        assert_eq!(slides[0].content, vec!["intro"]);
        assert_eq!(slides[1].title.as_deref(), Some("First"));
        assert_eq!(slides[1].content, vec!["body"]);
    }

    #[test]
    fn title_only_slide_is_kept() {
        let mut acc = SlideAccumulator::new();
        acc.start_slide("A".into());
        acc.start_slide("B".into());
        let slides = acc.finish();
        let titles: Vec<_> = slides.iter().map(|s| s.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("A"), Some("B")]);
        assert!(slides.iter().all(|s| s.content.is_empty()));
    }

    #[test]
    fn repeated_flush_is_noop() {
        let mut acc = SlideAccumulator::new();
        acc.push("x".into());
        acc.flush();
        acc.flush();
        assert_eq!(acc.finish().len(), 1);
    }
}
