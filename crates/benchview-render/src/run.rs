//! Detail view for a single benchmark run.

use crate::format;
use crate::html::{escape, metric, pre_panel, when};
use benchview_core::RunRecord;

/// Display-ready values for one run. All formatting happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct RunView {
    pub model_name: String,
    pub prompt_content: String,
    pub response_text: String,
    pub judge_reasoning: Option<String>,
    pub judge_model: Option<String>,
    pub score: String,
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub total_tokens: i64,
    pub cost: String,
    pub runtime: String,
    pub date: String,
    pub judge_tokens: Option<i64>,
    pub judge_cost: Option<String>,
}

impl From<&RunRecord> for RunView {
    fn from(run: &RunRecord) -> Self {
        Self {
            model_name: run.model_name.clone(),
            prompt_content: run.prompt_content.clone(),
            response_text: run.response_text.clone(),
            judge_reasoning: run.judge_reasoning.clone().filter(|s| !s.is_empty()),
            judge_model: run.judge_model.clone().filter(|s| !s.is_empty()),
            score: format::score(run.score),
            input_tokens: run.input_tokens,
            output_tokens: run.output_tokens,
            total_tokens: run.total_tokens(),
            cost: format::usd(run.cost_usd),
            runtime: format::millis(run.run_time_ms),
            date: format::timestamp(&run.created_at),
            judge_tokens: run.judge_tokens,
            judge_cost: run.judge_cost_usd.map(format::usd),
        }
    }
}

/// Render the run detail fragment: model, prompt, response, optional judge
/// output, and a two-column metrics block.
pub fn render_run_details(run: &RunRecord) -> String {
    render_view(&RunView::from(run))
}

fn render_view(view: &RunView) -> String {
    let judge_panel = when(view.judge_reasoning.as_deref(), |reasoning| {
        pre_panel("Judge Output", reasoning, "col-12 mb-3")
    });

    let left = [
        metric("Score", &view.score),
        metric("Input Tokens", &view.input_tokens.to_string()),
        metric("Output Tokens", &view.output_tokens.to_string()),
        metric("Total Tokens", &view.total_tokens.to_string()),
    ]
    .join("\n");

    let right = [
        metric("Cost", &view.cost),
        metric("Runtime", &view.runtime),
        metric("Date", &view.date),
        when(view.judge_model.as_deref(), |m| metric("Judge Model", &escape(m))),
        when(view.judge_tokens, |t| metric("Judge Tokens", &t.to_string())),
        when(view.judge_cost.as_deref(), |c| metric("Judge Cost", c)),
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .collect::<Vec<_>>()
    .join("\n");

    format!(
        r#"<div class="row">
<div class="col-12 mb-3">
    <h6>Model:</h6>
    <p class="mb-2">{model}</p>
</div>
{prompt}
{response}
{judge}
<div class="col-12">
    <h6>Metrics:</h6>
    <div class="row">
        <div class="col-md-6">
            <ul class="list-unstyled">
{left}
            </ul>
        </div>
        <div class="col-md-6">
            <ul class="list-unstyled">
{right}
            </ul>
        </div>
    </div>
</div>
</div>"#,
        model = escape(&view.model_name),
        prompt = pre_panel("Prompt", &view.prompt_content, "col-12 mb-3"),
        response = pre_panel("Response", &view.response_text, "col-12 mb-3"),
        judge = judge_panel,
        left = left,
        right = right,
    )
}
