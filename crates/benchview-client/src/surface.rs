use benchview_core::{BenchviewError, Result};

/// The host that owns the modal and content containers: a browser document,
/// a generated HTML page, or a test double.
pub trait DetailsSurface {
    /// Replace the inner markup of the container with id `content_id`.
    fn set_content(&mut self, content_id: &str, html: &str) -> Result<()>;

    /// Open the modal rooted at `modal_id`.
    fn show_modal(&mut self, modal_id: &str) -> Result<()>;

    /// Blocking, user-facing notice.
    fn alert(&mut self, message: &str);

    fn log_error(&mut self, context: &str, error: &BenchviewError) {
        tracing::error!("{}: {}", context, error);
    }
}
