//! Browser entry points. Pages call these from inline handlers, e.g.
//! `onclick="showBenchmarkRunDetails(42)"`, with `#detailsModal` and
//! `#detailsContent` present in the markup.

mod api;
mod dom;

pub use api::GlooSource;
pub use dom::DomSurface;

use benchview_client::Presenter;
use benchview_core::{BenchviewError, ModalTargets, RunRecord, SuiteDetail};
use benchview_render::{render_run_details, render_suite_detail};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn targets(modal_id: Option<String>, content_id: Option<String>) -> ModalTargets {
    let defaults = ModalTargets::default();
    ModalTargets {
        modal_id: modal_id.unwrap_or(defaults.modal_id),
        content_id: content_id.unwrap_or(defaults.content_id),
    }
}

fn report_setup_error(error: &BenchviewError) {
    web_sys::console::error_1(&JsValue::from_str(&error.to_string()));
}

/// Fetch `/api/benchmark-runs/{runId}` and show it in the modal.
#[wasm_bindgen(js_name = showBenchmarkRunDetails)]
pub fn show_benchmark_run_details(run_id: u32, modal_id: Option<String>, content_id: Option<String>) {
    let targets = targets(modal_id, content_id);
    wasm_bindgen_futures::spawn_local(async move {
        let surface = match DomSurface::from_window() {
            Ok(s) => s,
            Err(e) => return report_setup_error(&e),
        };
        let mut presenter = Presenter::new(GlooSource::same_origin(), surface);
        presenter.show_run(run_id as u64, &targets).await;
    });
}

/// Fetch `/api/suite-runs/{suiteId}` and show it in the modal.
#[wasm_bindgen(js_name = showSuiteDetails)]
pub fn show_suite_details(suite_id: u32, modal_id: Option<String>, content_id: Option<String>) {
    let targets = targets(modal_id, content_id);
    wasm_bindgen_futures::spawn_local(async move {
        let surface = match DomSurface::from_window() {
            Ok(s) => s,
            Err(e) => return report_setup_error(&e),
        };
        let mut presenter = Presenter::new(GlooSource::same_origin(), surface);
        presenter.show_suite(suite_id as u64, &targets).await;
    });
}

fn from_js<T: DeserializeOwned>(data: &JsValue) -> Result<T, JsValue> {
    let json: String = js_sys::JSON::stringify(data)?.into();
    serde_json::from_str(&json).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = renderBenchmarkRunDetails)]
pub fn render_benchmark_run_details(data: JsValue) -> Result<String, JsValue> {
    let run: RunRecord = from_js(&data)?;
    Ok(render_run_details(&run))
}

#[wasm_bindgen(js_name = renderSuiteDetails)]
pub fn render_suite_details(data: JsValue) -> Result<String, JsValue> {
    let detail: SuiteDetail = from_js(&data)?;
    Ok(render_suite_detail(&detail))
}
