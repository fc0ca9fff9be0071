use async_trait::async_trait;
use benchview_client::endpoints::{self, run_detail_path, suite_detail_path};
use benchview_client::DetailsSource;
use benchview_core::{BenchviewError, Result, RunRecord, SuiteDetail};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Browser `fetch` source. An empty base URL requests the page's own origin.
#[derive(Debug, Clone, Default)]
pub struct GlooSource {
    base_url: String,
}

impl GlooSource {
    pub fn same_origin() -> Self {
        Self::default()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = endpoints::join(&self.base_url, path);
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| BenchviewError::Http(e.to_string()))?;

        if !resp.ok() {
            return Err(BenchviewError::Status {
                url,
                status: resp.status(),
            });
        }

        resp.json()
            .await
            .map_err(|e| BenchviewError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl DetailsSource for GlooSource {
    async fn fetch_run(&self, run_id: u64) -> Result<RunRecord> {
        self.get_json(&run_detail_path(run_id)).await
    }

    async fn fetch_suite(&self, suite_id: u64) -> Result<SuiteDetail> {
        self.get_json(&suite_detail_path(suite_id)).await
    }
}
