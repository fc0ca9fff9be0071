use async_trait::async_trait;
use benchview_core::{Result, RunRecord, SuiteDetail};

/// Where run and suite payloads come from.
///
/// Futures are not required to be `Send` so browser fetch implementations fit
/// the same seam as the native HTTP client.
#[async_trait(?Send)]
pub trait DetailsSource {
    async fn fetch_run(&self, run_id: u64) -> Result<RunRecord>;

    async fn fetch_suite(&self, suite_id: u64) -> Result<SuiteDetail>;
}
