// file: src/pipeline/harvester.rs
// description: batch metadata extraction for a selection of items
// reference: bounded, order-preserving fan-out over the item API

use crate::client::DspaceClient;
use crate::config::ExtractionConfig;
use crate::error::{HarvestError, Result};
use crate::extractor::extract_uuid;
use crate::models::{FlatRecord, SearchMode};
use crate::pipeline::progress::{ExtractionStats, ProgressTracker};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

pub const UUID_NOT_FOUND: &str = "No se encontró un UUID válido";

#[derive(Debug, Clone)]
pub struct HarvestOutcome {
    pub records: Vec<FlatRecord>,
    pub stats: ExtractionStats,
}

pub struct Harvester {
    client: DspaceClient,
    parallel_workers: usize,
    show_progress: bool,
}

impl Harvester {
    pub fn new(client: DspaceClient, config: &ExtractionConfig) -> Self {
        Self {
            client,
            parallel_workers: config.parallel_workers.max(1),
            show_progress: config.show_progress,
        }
    }

    pub fn client(&self) -> &DspaceClient {
        &self.client
    }

    /// Fetches every selected item. Entries may be bare UUIDs or URLs
    /// containing one. Records come back in selection order and a failed
    /// item becomes an error record instead of failing the batch.
    pub async fn extract(&self, selection: &[String]) -> Result<HarvestOutcome> {
        if selection.is_empty() {
            return Err(HarvestError::NoSelection);
        }

        let progress = if self.show_progress {
            ProgressTracker::new(selection.len())
        } else {
            ProgressTracker::hidden(selection.len())
        };

        info!(
            "Extracting metadata for {} items with {} concurrent requests",
            selection.len(),
            self.parallel_workers
        );

        let client = &self.client;
        let progress_ref = &progress;

        let records: Vec<FlatRecord> = stream::iter(selection.iter().map(|entry| async move {
            let uuid = match extract_uuid(entry) {
                Ok(uuid) => uuid,
                Err(_) => {
                    warn!("No UUID in selection entry: {}", entry);
                    progress_ref.inc_failed();
                    return FlatRecord::error(entry.trim(), UUID_NOT_FOUND);
                }
            };

            match client.fetch_metadata(&uuid).await {
                Ok(record) => {
                    progress_ref.inc_fetched(record.field_count());
                    record
                }
                Err(e) => {
                    warn!("Failed to extract {}: {}", uuid, e);
                    progress_ref.inc_failed();
                    FlatRecord::error(uuid, e.record_message())
                }
            }
        }))
        .buffered(self.parallel_workers)
        .collect()
        .await;

        let stats = progress.get_stats();
        progress.finish();
        log_final_stats(&stats);

        Ok(HarvestOutcome { records, stats })
    }

    /// Searches and extracts every hit, the "select all" path.
    pub async fn extract_search(&self, query: &str, mode: SearchMode) -> Result<HarvestOutcome> {
        let hits = self.client.search(query, mode).await;
        let selection: Vec<String> = hits.into_iter().map(|hit| hit.uuid).collect();
        self.extract(&selection).await
    }
}

fn log_final_stats(stats: &ExtractionStats) {
    info!(
        "Extraction complete: {} fetched, {} failed, {} fields in {}ms ({:.1}% success, {:.2} items/sec)",
        stats.items_fetched,
        stats.items_failed,
        stats.fields_extracted,
        stats.duration_ms,
        stats.success_rate(),
        stats.items_per_second()
    );
}
