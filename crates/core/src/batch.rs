//! Parallel transpilation of independent sources.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use crate::document::{Deck, transpile};
use crate::options::DeckOptions;

/// A single source to transpile.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller-chosen identifier (typically a file name).
    pub id: String,
    /// Markdown source.
    pub source: String,
    /// Title override for this input only.
    pub title: Option<String>,
}

/// Result for a single input in a batch.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Identifier matching the input.
    pub id: String,
    /// Transpiled deck (present on success).
    pub deck: Option<Deck>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// Total number of inputs.
    pub total: u32,
    /// Number of successfully transpiled inputs.
    pub succeeded: u32,
    /// Number of failed inputs.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to rayon's global pool.
    pub max_threads: Option<usize>,
    /// Deck options shared by every input.
    pub deck: DeckOptions,
}

/// Results in input order plus statistics.
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results for each input.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}

/// Transpile many sources in parallel. A failed input never stops the batch.
pub fn transpile_batch(inputs: Vec<BatchInput>, options: &BatchOptions) -> BatchProcessingResult {
    let start = Instant::now();

    let pool = options.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads)
            .build()
            .map_err(|err| log::warn!("falling back to global thread pool: {}", err))
            .ok()
    });

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        let deck_options = match input.title {
            Some(title) => options.deck.clone().with_title(title),
            None => options.deck.clone(),
        };
        match transpile(&input.source, &deck_options) {
            Ok(deck) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    deck: Some(deck),
                    error: None,
                }
            }
            // Only a broken table invariant gets here; string input never fails.
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log::warn!("transpile failed for {}: {}", input.id, e);
                BatchResult {
                    id: input.id,
                    deck: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = match pool {
        Some(pool) => pool.install(|| inputs.into_par_iter().map(process_input).collect()),
        None => inputs.into_par_iter().map(process_input).collect(),
    };

    let elapsed = start.elapsed();

    BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: &str, source: &str) -> BatchInput {
        BatchInput {
            id: id.to_string(),
            source: source.to_string(),
            title: None,
        }
    }

    #[test]
    fn results_keep_input_order() {
        let inputs: Vec<BatchInput> = (0..32)
            .map(|i| input(&format!("deck-{i}"), &format!("# Slide {i}\nbody {i}")))
            .collect();
        let out = transpile_batch(inputs, &BatchOptions::default());

        assert_eq!(out.stats.total, 32);
        assert_eq!(out.stats.succeeded, 32);
        assert_eq!(out.stats.failed, 0);
        for (i, result) in out.results.iter().enumerate() {
            assert_eq!(result.id, format!("deck-{i}"));
            let deck = result.deck.as_ref().unwrap();
            assert_eq!(deck.slides[0].title.as_deref(), Some(format!("Slide {i}").as_str()));
        }
    }

    #[test]
    fn per_input_title_override() {
        let mut with_title = input("a", "# Derived");
        with_title.title = Some("Explicit".into());
        let out = transpile_batch(
            vec![with_title, input("b", "# Derived")],
            &BatchOptions {
                max_threads: Some(2),
                ..BatchOptions::default()
            },
        );
        assert_eq!(out.results[0].deck.as_ref().unwrap().title, "Explicit");
        assert_eq!(out.results[1].deck.as_ref().unwrap().title, "Derived");
    }

    #[test]
    fn single_thread_pool_matches_global_pool() {
        let sources = ["# A\n- x", "| h |\n|---|\n| v |", "", "plain"];
        let inputs = || -> Vec<BatchInput> {
            sources
                .iter()
                .enumerate()
                .map(|(i, source)| input(&i.to_string(), source))
                .collect()
        };
        let pooled = transpile_batch(
            inputs(),
            &BatchOptions {
                max_threads: Some(1),
                ..BatchOptions::default()
            },
        );
        let global = transpile_batch(inputs(), &BatchOptions::default());

        assert_eq!(pooled.stats.failed, 0);
        for (a, b) in pooled.results.iter().zip(&global.results) {
            assert_eq!(a.id, b.id);
            assert_eq!(
                a.deck.as_ref().map(|d| &d.document),
                b.deck.as_ref().map(|d| &d.document)
            );
        }
    }
}
