// file: src/client/http.rs
// description: DSpace REST client wrapper with per-path timeouts
// reference: https://docs.rs/reqwest

use crate::config::RepositoryConfig;
use crate::error::Result;
use crate::labels::TranslationTable;
use crate::utils::telemetry::HealthCheck;
use crate::utils::validation::Validator;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct DspaceClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
    pub(crate) page_size: usize,
    pub(crate) search_timeout: Duration,
    pub(crate) item_timeout: Duration,
    pub(crate) labels: Arc<TranslationTable>,
}

impl DspaceClient {
    pub fn new(config: &RepositoryConfig, labels: Arc<TranslationTable>) -> Result<Self> {
        Validator::validate_url(&config.base_url)?;
        Validator::validate_page_size(config.page_size)?;

        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = Validator::trim_base_url(&config.base_url);
        info!("Using DSpace repository at {}", base_url);

        Ok(Self {
            http,
            base_url,
            page_size: config.page_size,
            search_timeout: config.search_timeout(),
            item_timeout: config.item_timeout(),
            labels,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn item_api_url(&self, uuid: &str) -> String {
        format!("{}/server/api/core/items/{}", self.base_url, uuid)
    }

    pub fn search_api_url(&self) -> String {
        format!("{}/server/api/discover/search/objects", self.base_url)
    }

    /// Checks that the REST root answers within the search timeout.
    pub async fn verify(&self) -> HealthCheck {
        let url = format!("{}/server/api", self.base_url);
        debug!("Checking {}", url);

        let start = Instant::now();
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.search_timeout)
            .send()
            .await;
        let elapsed = start.elapsed();

        match response {
            Ok(resp) if resp.status().is_success() => HealthCheck::healthy(&url, elapsed),
            Ok(resp) => {
                warn!("{} answered with status {}", url, resp.status());
                HealthCheck::degraded(&url, format!("HTTP status {}", resp.status()), elapsed)
            }
            Err(e) => {
                warn!("{} unreachable: {}", url, e);
                HealthCheck::unhealthy(&url, e.to_string(), elapsed)
            }
        }
    }
}
