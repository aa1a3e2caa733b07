// file: src/pipeline/progress.rs
// description: progress reporting and statistics for the QA pipeline
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub chunks_total: usize,
    pub chunks_embedded: usize,
    pub chunks_retrieved: usize,
    pub used_fallback_embeddings: bool,
    pub answer_generated: bool,
    pub duration_secs: f64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunks_per_second(&self) -> f64 {
        if self.duration_secs == 0.0 {
            return 0.0;
        }
        self.chunks_embedded as f64 / self.duration_secs
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    embedded: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_chunks: usize, colored: bool) -> Self {
        let bar = ProgressBar::new(total_chunks as u64);
        let template = if colored {
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
        } else {
            "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template(template)
                .expect("valid progress bar template")
                .progress_chars("█▓▒░"),
        );

        Self {
            bar,
            embedded: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn inc_embedded(&self, count: usize) {
        self.embedded.fetch_add(count, Ordering::SeqCst);
        self.bar.inc(count as u64);
    }

    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    pub fn embedded(&self) -> usize {
        self.embedded.load(Ordering::SeqCst)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
