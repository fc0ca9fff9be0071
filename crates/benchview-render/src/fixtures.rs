use benchview_core::{RunRecord, SuiteSummary};

pub fn sample_run() -> RunRecord {
    RunRecord {
        id: Some(42),
        model_name: "gpt-4o-mini".to_string(),
        prompt_content: "What is 17 * 23?".to_string(),
        response_text: "17 * 23 = 391".to_string(),
        judge_reasoning: None,
        judge_model: None,
        score: Some(0.873_456),
        input_tokens: 120,
        output_tokens: 35,
        cost_usd: 0.000_42,
        run_time_ms: 840,
        created_at: "2024-03-05T14:07:09".to_string(),
        run_index: None,
        judge_tokens: None,
        judge_cost_usd: None,
        judge_time_ms: None,
    }
}

pub fn sample_suite() -> SuiteSummary {
    SuiteSummary {
        id: Some(7),
        model_name: "llama3.1:8b".to_string(),
        prompt_name: "reasoning".to_string(),
        status: "completed".to_string(),
        run_count: 2,
        max_score: Some(0.9),
        avg_score: Some(0.5),
        min_score: Some(0.1),
        total_cost_usd: Some(0.012_34),
    }
}
