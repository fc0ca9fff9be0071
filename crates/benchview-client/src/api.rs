use crate::endpoints::{self, run_detail_path, suite_detail_path};
use crate::source::DetailsSource;
use async_trait::async_trait;
use benchview_core::{ApiConfig, BenchviewError, Result, RunRecord, SuiteDetail};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Native HTTP client for the benchmark API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| BenchviewError::Http(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = endpoints::join(&self.base_url, path);
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BenchviewError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(BenchviewError::Status {
                url,
                status: resp.status().as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| BenchviewError::Http(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            BenchviewError::Decode(format!(
                "{} - Body: {}",
                e,
                body.chars().take(200).collect::<String>()
            ))
        })
    }
}

#[async_trait(?Send)]
impl DetailsSource for ApiClient {
    async fn fetch_run(&self, run_id: u64) -> Result<RunRecord> {
        self.get_json(&run_detail_path(run_id)).await
    }

    async fn fetch_suite(&self, suite_id: u64) -> Result<SuiteDetail> {
        self.get_json(&suite_detail_path(suite_id)).await
    }
}
