//! A generated standalone HTML page acting as the modal host.

use benchview_client::DetailsSurface;
use benchview_core::{BenchviewError, ModalTargets, Result};
use benchview_render::html::escape;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

pub struct StaticPage {
    targets: ModalTargets,
    content: String,
    open: bool,
    alerts: Vec<String>,
}

impl StaticPage {
    pub fn new(targets: &ModalTargets) -> Self {
        Self {
            targets: targets.clone(),
            content: String::new(),
            open: false,
            alerts: Vec::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// The full document: Bootstrap from the CDN and the modal, opened if
    /// `show_modal` succeeded.
    pub fn to_document(&self, title: &str) -> String {
        let (modal_class, modal_style) = if self.open {
            (" show", r#" style="display: block;""#)
        } else {
            ("", "")
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{css}">
</head>
<body>
<div class="modal fade{modal_class}" id="{modal_id}" tabindex="-1" aria-labelledby="{modal_id}Label"{modal_style}>
    <div class="modal-dialog modal-xl modal-dialog-scrollable">
        <div class="modal-content">
            <div class="modal-header">
                <h5 class="modal-title" id="{modal_id}Label">{title}</h5>
                <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
            </div>
            <div class="modal-body" id="{content_id}">
{content}
            </div>
        </div>
    </div>
</div>
<script src="{js}"></script>
</body>
</html>
"#,
            title = escape(title),
            css = BOOTSTRAP_CSS,
            js = BOOTSTRAP_JS,
            modal_class = modal_class,
            modal_style = modal_style,
            modal_id = escape(&self.targets.modal_id),
            content_id = escape(&self.targets.content_id),
            content = self.content,
        )
    }
}

impl DetailsSurface for StaticPage {
    fn set_content(&mut self, content_id: &str, html: &str) -> Result<()> {
        if content_id != self.targets.content_id {
            return Err(BenchviewError::ContainerNotFound(content_id.to_string()));
        }
        self.content = html.to_string();
        Ok(())
    }

    fn show_modal(&mut self, modal_id: &str) -> Result<()> {
        if modal_id != self.targets.modal_id {
            return Err(BenchviewError::ContainerNotFound(modal_id.to_string()));
        }
        self.open = true;
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
        self.alerts.push(message.to_string());
    }
}
