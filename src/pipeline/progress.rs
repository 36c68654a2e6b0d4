// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for batch extraction
// reference: uses indicatif for progress bars and tracks fetch metrics

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionStats {
    pub items_fetched: usize,
    pub items_failed: usize,
    pub fields_extracted: usize,
    pub duration_ms: u64,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.items_fetched + self.items_failed
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.items_fetched as f64 / total as f64) * 100.0
    }

    pub fn items_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.total() as f64 / (self.duration_ms as f64 / 1000.0)
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    items_fetched: Arc<AtomicUsize>,
    items_failed: Arc<AtomicUsize>,
    fields_extracted: Arc<AtomicUsize>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_items: usize) -> Self {
        let bar = ProgressBar::new(total_items as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
        Self::with_bar(bar)
    }

    pub fn hidden(total_items: usize) -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(total_items as u64),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            items_fetched: Arc::new(AtomicUsize::new(0)),
            items_failed: Arc::new(AtomicUsize::new(0)),
            fields_extracted: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_fetched(&self, fields: usize) {
        self.items_fetched.fetch_add(1, Ordering::SeqCst);
        self.fields_extracted.fetch_add(fields, Ordering::SeqCst);
        self.bar.inc(1);
        self.update_message();
    }

    pub fn inc_failed(&self) {
        self.items_failed.fetch_add(1, Ordering::SeqCst);
        self.bar.inc(1);
        self.update_message();
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> ExtractionStats {
        ExtractionStats {
            items_fetched: self.items_fetched.load(Ordering::SeqCst),
            items_failed: self.items_failed.load(Ordering::SeqCst),
            fields_extracted: self.fields_extracted.load(Ordering::SeqCst),
            duration_ms: self.start_time.elapsed().as_millis() as u64,
        }
    }

    fn update_message(&self) {
        let failed = self.items_failed.load(Ordering::SeqCst);
        self.bar.set_message(format!("Failed: {}", failed));
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_stats_calculations() {
        let stats = ExtractionStats {
            items_fetched: 9,
            items_failed: 1,
            fields_extracted: 120,
            duration_ms: 2000,
        };

        assert_eq!(stats.total(), 10);
        assert_eq!(stats.items_per_second(), 5.0);
        assert!((stats.success_rate() - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_extraction_stats_zero_duration() {
        let stats = ExtractionStats::new();
        assert_eq!(stats.items_per_second(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::hidden(3);

        tracker.inc_fetched(12);
        tracker.inc_fetched(8);
        tracker.inc_failed();

        let stats = tracker.get_stats();
        assert_eq!(stats.items_fetched, 2);
        assert_eq!(stats.items_failed, 1);
        assert_eq!(stats.fields_extracted, 20);
    }
}
