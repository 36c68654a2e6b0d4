// file: src/client/search.rs
// description: paged discovery search returning item summaries
// reference: GET /server/api/discover/search/objects?query=&page=&size=

use crate::client::http::DspaceClient;
use crate::client::types::{SearchEnvelope, SearchObject};
use crate::models::{ItemSummary, SearchMode};
use crate::utils::telemetry::OperationTimer;
use tracing::{debug, info, warn};

/// Why paging stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStop {
    Exhausted,
    MissingEnvelope,
    RequestFailed(String),
}

impl DspaceClient {
    /// Pages through the discovery endpoint until an empty page, a missing
    /// envelope or a failed request. Items gathered before a failure are kept.
    pub async fn search(&self, query: &str, mode: SearchMode) -> Vec<ItemSummary> {
        let (items, stop) = self.search_with_stop(query, mode).await;
        if let PageStop::RequestFailed(reason) = &stop {
            warn!(
                "Search stopped early after {} results: {}",
                items.len(),
                reason
            );
        }
        items
    }

    pub async fn search_with_stop(
        &self,
        query: &str,
        mode: SearchMode,
    ) -> (Vec<ItemSummary>, PageStop) {
        let search_query = mode.build_query(query);
        info!("Searching ({:?}): {}", mode, search_query);
        let timer = OperationTimer::new("discovery search");

        let mut results = Vec::new();
        let mut page = 0usize;

        let stop = loop {
            let objects = match self.fetch_page(&search_query, page).await {
                Ok(Some(objects)) => objects,
                Ok(None) => break PageStop::MissingEnvelope,
                Err(reason) => break PageStop::RequestFailed(reason),
            };

            if objects.is_empty() {
                break PageStop::Exhausted;
            }

            debug!("Page {} returned {} objects", page, objects.len());

            for object in objects {
                let Some(item) = object.into_indexable() else {
                    debug!("Skipping search object without indexableObject");
                    continue;
                };
                let Some(uuid) = item.uuid else {
                    debug!("Skipping indexable object without uuid");
                    continue;
                };
                let api_url = self.item_api_url(&uuid);
                results.push(ItemSummary::new(uuid, item.name, api_url));
            }

            page += 1;
        };

        debug!("Paging stopped after {} pages: {:?}", page, stop);
        timer.finish_with_count(results.len());
        (results, stop)
    }

    async fn fetch_page(
        &self,
        search_query: &str,
        page: usize,
    ) -> Result<Option<Vec<SearchObject>>, String> {
        let response = self
            .http
            .get(self.search_api_url())
            .query(&[
                ("query", search_query.to_string()),
                ("page", page.to_string()),
                ("size", self.page_size.to_string()),
            ])
            .timeout(self.search_timeout)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let response = response.error_for_status().map_err(|e| e.to_string())?;
        let envelope: SearchEnvelope = response.json().await.map_err(|e| e.to_string())?;

        Ok(envelope.into_objects())
    }
}
