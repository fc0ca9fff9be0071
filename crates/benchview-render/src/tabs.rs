use benchview_core::RunRecord;
use std::collections::HashSet;

const OVERVIEW_PANE: &str = "suite-overview";

/// DOM ids for one tab: the trigger button, the pane it toggles, and the
/// `data-bs-target` selector pointing from one to the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabIds {
    pub trigger_id: String,
    pub pane_id: String,
    pub target: String,
}

impl TabIds {
    fn from_pane(pane_id: String) -> Self {
        Self {
            trigger_id: format!("{}-tab", pane_id),
            target: format!("#{}", pane_id),
            pane_id,
        }
    }

    pub fn overview() -> Self {
        Self::from_pane(OVERVIEW_PANE.to_string())
    }

    pub fn for_run(run_index: u32) -> Self {
        Self::from_pane(format!("run-{}", run_index))
    }
}

/// One tab per run, in run order.
#[derive(Debug, Clone)]
pub struct TabPlan {
    pub tabs: Vec<(u32, TabIds)>,
    /// Run indexes that occur more than once. Their tabs share ids.
    pub duplicates: Vec<u32>,
}

/// Assign tab ids to runs. A run without `run_index` uses its 1-based position.
pub fn plan_run_tabs(runs: &[RunRecord]) -> TabPlan {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    let tabs = runs
        .iter()
        .enumerate()
        .map(|(pos, run)| {
            let index = run.run_index.unwrap_or(pos as u32 + 1);
            if !seen.insert(index) && !duplicates.contains(&index) {
                duplicates.push(index);
            }
            (index, TabIds::for_run(index))
        })
        .collect();

    TabPlan { tabs, duplicates }
}
