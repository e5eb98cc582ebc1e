//! Browser DOM render target (web-sys)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::renderers::target::{RenderError, RenderTarget};

fn dom_error(e: JsValue) -> RenderError {
    RenderError::Dom(format!("{:?}", e))
}

/// Renders into `document.body` of the current window
pub struct DomTarget {
    document: Document,
    body: HtmlElement,
}

impl DomTarget {
    pub fn from_window() -> Result<Self, RenderError> {
        let window = web_sys::window()
            .ok_or_else(|| RenderError::HostUnavailable("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| RenderError::HostUnavailable("window has no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| RenderError::HostUnavailable("document has no body".to_string()))?;

        Ok(Self { document, body })
    }
}

impl RenderTarget for DomTarget {
    type Element = HtmlElement;

    fn create_element(&mut self, tag: &str) -> Result<HtmlElement, RenderError> {
        self.document
            .create_element(tag)
            .map_err(dom_error)?
            .dyn_into::<HtmlElement>()
            .map_err(|element| {
                RenderError::Dom(format!("<{}> is not an HTML element", element.tag_name()))
            })
    }

    fn set_id(&mut self, element: &HtmlElement, id: &str) -> Result<(), RenderError> {
        element.set_id(id);
        Ok(())
    }

    fn set_text(&mut self, element: &HtmlElement, text: &str) -> Result<(), RenderError> {
        element.set_text_content(Some(text));
        Ok(())
    }

    fn set_style(
        &mut self,
        element: &HtmlElement,
        property: &str,
        value: &str,
    ) -> Result<(), RenderError> {
        element.style().set_property(property, value).map_err(dom_error)
    }

    fn set_class(
        &mut self,
        element: &HtmlElement,
        class: &str,
        enabled: bool,
    ) -> Result<(), RenderError> {
        let classes = element.class_list();
        if enabled {
            classes.add_1(class).map_err(dom_error)
        } else {
            classes.remove_1(class).map_err(dom_error)
        }
    }

    fn append_child(
        &mut self,
        parent: &HtmlElement,
        child: &HtmlElement,
    ) -> Result<(), RenderError> {
        parent.append_child(child).map(|_| ()).map_err(dom_error)
    }

    fn append_to_root(&mut self, element: &HtmlElement) -> Result<(), RenderError> {
        self.body.append_child(element).map(|_| ()).map_err(dom_error)
    }

    fn remove_element(&mut self, id: &str) -> Result<bool, RenderError> {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.remove();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn measure_height(&self, element: &HtmlElement) -> Option<f64> {
        Some(f64::from(element.offset_height()))
    }
}
