pub const RUN_DETAIL_PATH: &str = "/api/benchmark-runs";
pub const SUITE_DETAIL_PATH: &str = "/api/suite-runs";

pub fn run_detail_path(run_id: u64) -> String {
    format!("{}/{}", RUN_DETAIL_PATH, run_id)
}

pub fn suite_detail_path(suite_id: u64) -> String {
    format!("{}/{}", SUITE_DETAIL_PATH, suite_id)
}

/// Join an API base (`http://host:8000`, `http://host/app/`, or empty for
/// same-origin requests) with an absolute path.
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
