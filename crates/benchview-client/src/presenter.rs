//! Fetch → render → inject → open modal, with one failure boundary per call.
//!
//! A failed call logs through the surface, raises the fixed alert, and leaves
//! the content container untouched when the fetch itself failed. Concurrent
//! calls are not coordinated; whichever resolves last owns the containers.

use crate::source::DetailsSource;
use crate::surface::DetailsSurface;
use benchview_core::{BenchviewError, ModalTargets, Result, DEFAULT_ERROR_MESSAGE};
use benchview_render::{render_run_details, render_suite_detail};

#[derive(Debug)]
pub enum Outcome {
    Shown,
    Failed(BenchviewError),
}

impl Outcome {
    pub fn is_shown(&self) -> bool {
        matches!(self, Outcome::Shown)
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            Outcome::Shown => Ok(()),
            Outcome::Failed(e) => Err(e),
        }
    }
}

pub struct Presenter<S, U> {
    source: S,
    surface: U,
    error_message: String,
}

impl<S: DetailsSource, U: DetailsSurface> Presenter<S, U> {
    pub fn new(source: S, surface: U) -> Self {
        Self {
            source,
            surface,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn into_surface(self) -> U {
        self.surface
    }

    /// Show a single benchmark run in the modal.
    pub async fn show_run(&mut self, run_id: u64, targets: &ModalTargets) -> Outcome {
        let result = match self.source.fetch_run(run_id).await {
            Ok(run) => self.present(&render_run_details(&run), targets),
            Err(e) => Err(e),
        };
        self.finish(result, "Error loading benchmark run details")
    }

    /// Show a suite with its overview and per-run tabs in the modal.
    pub async fn show_suite(&mut self, suite_id: u64, targets: &ModalTargets) -> Outcome {
        let result = match self.source.fetch_suite(suite_id).await {
            Ok(detail) => self.present(&render_suite_detail(&detail), targets),
            Err(e) => Err(e),
        };
        self.finish(result, "Error loading suite details")
    }

    fn present(&mut self, html: &str, targets: &ModalTargets) -> Result<()> {
        self.surface.set_content(&targets.content_id, html)?;
        self.surface.show_modal(&targets.modal_id)
    }

    fn finish(&mut self, result: Result<()>, context: &str) -> Outcome {
        match result {
            Ok(()) => Outcome::Shown,
            Err(e) => {
                self.surface.log_error(context, &e);
                self.surface.alert(&self.error_message);
                Outcome::Failed(e)
            }
        }
    }
}
