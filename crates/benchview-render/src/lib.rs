//! Pure data-to-markup transforms for benchmark run and suite details.
//!
//! Output targets Bootstrap 5 markup: the suite view uses `nav-tabs` and
//! `tab-pane`s, both views are meant to be injected into a modal body.

pub mod format;
pub mod html;
pub mod run;
pub mod suite;
pub mod tabs;

#[cfg(test)]
mod fixtures;

pub use run::{render_run_details, RunView};
pub use suite::{render_suite_detail, render_suite_details, SuiteView};
pub use tabs::{plan_run_tabs, TabIds, TabPlan};
