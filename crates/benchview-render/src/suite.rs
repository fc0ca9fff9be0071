//! Tabbed detail view for a benchmark suite: an overview tab followed by one
//! tab per run.

use crate::format;
use crate::html::{escape, metric, pre_panel, when};
use crate::tabs::{plan_run_tabs, TabIds};
use benchview_core::{RunRecord, SuiteDetail, SuiteSummary};

/// Display-ready suite statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteView {
    pub model_name: String,
    pub prompt_name: String,
    pub status: String,
    pub run_count: u32,
    pub max_score: String,
    pub avg_score: String,
    pub min_score: String,
    pub total_cost: String,
}

impl From<&SuiteSummary> for SuiteView {
    fn from(suite: &SuiteSummary) -> Self {
        Self {
            model_name: suite.model_name.clone(),
            prompt_name: suite.prompt_name.clone(),
            status: suite.status.clone(),
            run_count: suite.run_count,
            max_score: format::percent(suite.max_score),
            avg_score: format::percent(suite.avg_score),
            min_score: format::percent(suite.min_score),
            total_cost: format::optional_usd(suite.total_cost_usd),
        }
    }
}

pub fn render_suite_detail(detail: &SuiteDetail) -> String {
    render_suite_details(&detail.suite, &detail.runs)
}

/// Render the suite fragment. The overview tab is always first and active;
/// run tabs follow in the order given.
pub fn render_suite_details(suite: &SuiteSummary, runs: &[RunRecord]) -> String {
    let plan = plan_run_tabs(runs);
    if !plan.duplicates.is_empty() {
        tracing::warn!(
            "Suite {} has duplicate run indexes {:?}; their tabs share DOM ids",
            suite.prompt_name,
            plan.duplicates
        );
    }

    let badges: Vec<String> = plan
        .tabs
        .iter()
        .zip(runs)
        .map(|((index, _), run)| score_badge(*index, run.score))
        .collect();

    let overview = TabIds::overview();
    let mut triggers = vec![tab_trigger(&overview, "Overview", true)];
    let mut panes = vec![tab_pane(
        &overview,
        &overview_pane(&SuiteView::from(suite), &badges),
        true,
    )];

    for ((index, ids), run) in plan.tabs.iter().zip(runs) {
        triggers.push(tab_trigger(ids, &format!("Run {}", index), false));
        panes.push(tab_pane(ids, &run_pane(run), false));
    }

    format!(
        r#"<ul class="nav nav-tabs mb-3" id="suiteTabs" role="tablist">
{triggers}
</ul>
<div class="tab-content" id="suiteTabsContent">
{panes}
</div>"#,
        triggers = triggers.join("\n"),
        panes = panes.join("\n"),
    )
}

fn tab_trigger(ids: &TabIds, label: &str, active: bool) -> String {
    format!(
        r#"<li class="nav-item" role="presentation">
    <button class="nav-link{active}" id="{trigger}" data-bs-toggle="tab" data-bs-target="{target}" type="button" role="tab" aria-controls="{pane}" aria-selected="{selected}">{label}</button>
</li>"#,
        active = if active { " active" } else { "" },
        trigger = ids.trigger_id,
        target = ids.target,
        pane = ids.pane_id,
        selected = active,
        label = escape(label),
    )
}

fn tab_pane(ids: &TabIds, body: &str, active: bool) -> String {
    format!(
        r#"<div class="tab-pane fade{active}" id="{pane}" role="tabpanel" aria-labelledby="{trigger}">
{body}
</div>"#,
        active = if active { " show active" } else { "" },
        pane = ids.pane_id,
        trigger = ids.trigger_id,
        body = body,
    )
}

fn overview_pane(view: &SuiteView, badges: &[String]) -> String {
    format!(
        r#"<div class="row">
    <div class="col-md-6">
        <h6>Suite Details:</h6>
        <ul class="list-unstyled">
{model}
{prompt}
{status}
{runs}
        </ul>
    </div>
    <div class="col-md-6">
        <h6>Statistics:</h6>
        <ul class="list-unstyled">
{max}
{avg}
{min}
{cost}
        </ul>
    </div>
</div>
<div class="mt-2">
    <h6>Run Scores:</h6>
    <div>{badges}</div>
</div>"#,
        model = metric("Model", &escape(&view.model_name)),
        prompt = metric("Prompt", &escape(&view.prompt_name)),
        status = metric("Status", &escape(&view.status)),
        runs = metric("Runs", &view.run_count.to_string()),
        max = metric("Max Score", &view.max_score),
        avg = metric("Avg Score", &view.avg_score),
        min = metric("Min Score", &view.min_score),
        cost = metric("Total Cost", &view.total_cost),
        badges = badges.join(" "),
    )
}

fn score_badge(run_index: u32, score: Option<f64>) -> String {
    format!(
        r#"<span class="badge {class} me-1">Run {index}: {score}</span>"#,
        class = badge_class(score),
        index = run_index,
        score = format::percent(score),
    )
}

fn badge_class(score: Option<f64>) -> &'static str {
    match score {
        Some(s) if s >= 0.8 => "bg-success",
        Some(s) if s >= 0.5 => "bg-warning text-dark",
        Some(_) => "bg-danger",
        None => "bg-secondary",
    }
}

fn run_pane(run: &RunRecord) -> String {
    let metrics = [
        metric("Score", &format::percent(run.score)),
        metric("Input Tokens", &run.input_tokens.to_string()),
        metric("Output Tokens", &run.output_tokens.to_string()),
        metric("Total Tokens", &run.total_tokens().to_string()),
        metric("Cost", &format::usd(run.cost_usd)),
        metric("Runtime", &format::millis(run.run_time_ms)),
    ]
    .join("\n");

    format!(
        r#"{judge}
{response}
<h6>Metrics:</h6>
<ul class="list-unstyled">
{metrics}
</ul>"#,
        judge = when(run.judge_reasoning.as_deref().filter(|s| !s.is_empty()), |reasoning| {
            pre_panel("Judge Output", reasoning, "mb-3")
        }),
        response = pre_panel("Response", &run.response_text, "mb-3"),
        metrics = metrics,
    )
}
