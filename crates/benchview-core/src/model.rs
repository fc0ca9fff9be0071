use serde::{Deserialize, Serialize};

// =============================================================================
// Run Records
// =============================================================================

/// A single benchmark run as served by `GET /api/benchmark-runs/{id}`.
///
/// Token, cost and timing fields are required. Score and judge fields are
/// optional and only rendered when present. `run_index` is only set when the
/// record is embedded in a suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub prompt_content: String,
    pub response_text: String,
    #[serde(default)]
    pub judge_reasoning: Option<String>,
    #[serde(default)]
    pub judge_model: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub cost_usd: f64,
    pub run_time_ms: i64,
    pub created_at: String,
    #[serde(default)]
    pub run_index: Option<u32>,
    #[serde(default)]
    pub judge_tokens: Option<i64>,
    #[serde(default)]
    pub judge_cost_usd: Option<f64>,
    #[serde(default)]
    pub judge_time_ms: Option<i64>,
}

impl RunRecord {
    pub fn total_tokens(&self) -> i64 {
        self.input_tokens + self.output_tokens
    }
}

// =============================================================================
// Suites
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteSummary {
    #[serde(default)]
    pub id: Option<u64>,
    pub model_name: String,
    pub prompt_name: String,
    pub status: String,
    pub run_count: u32,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub total_cost_usd: Option<f64>,
}

/// Payload of `GET /api/suite-runs/{id}`. Runs keep the order the API sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteDetail {
    pub suite: SuiteSummary,
    #[serde(default)]
    pub runs: Vec<RunRecord>,
}
