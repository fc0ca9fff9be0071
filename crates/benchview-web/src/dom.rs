use benchview_client::DetailsSurface;
use benchview_core::{BenchviewError, Result};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    #[wasm_bindgen(js_name = Modal)]
    type BootstrapModal;

    #[wasm_bindgen(constructor, js_class = "Modal", catch)]
    fn new(element: &Element) -> std::result::Result<BootstrapModal, JsValue>;

    #[wasm_bindgen(method, js_class = "Modal")]
    fn show(this: &BootstrapModal);
}

/// The live page document. Modals are opened through Bootstrap's
/// `bootstrap.Modal`, which must be loaded on the page.
pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub fn from_window() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| BenchviewError::Modal("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| BenchviewError::Modal("no document".to_string()))?;
        Ok(Self { window, document })
    }

    fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| BenchviewError::ContainerNotFound(id.to_string()))
    }
}

impl DetailsSurface for DomSurface {
    fn set_content(&mut self, content_id: &str, html: &str) -> Result<()> {
        self.element(content_id)?.set_inner_html(html);
        Ok(())
    }

    fn show_modal(&mut self, modal_id: &str) -> Result<()> {
        let element = self.element(modal_id)?;
        let modal = BootstrapModal::new(&element)
            .map_err(|e| BenchviewError::Modal(format!("{:?}", e)))?;
        modal.show();
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            web_sys::console::error_2(&JsValue::from_str(message), &e);
        }
    }

    fn log_error(&mut self, context: &str, error: &BenchviewError) {
        web_sys::console::error_2(
            &JsValue::from_str(&format!("{}:", context)),
            &JsValue::from_str(&error.to_string()),
        );
    }
}
