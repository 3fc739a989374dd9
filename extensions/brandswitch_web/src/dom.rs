//! [`ThemeDocument`] over the live DOM

use crate::error::{Result, WebError};
use brandswitch_theme::ThemeDocument;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement, Window};

/// The page's root element, computed style access and element lookup
pub struct WebDocument {
    window: Window,
    document: Document,
    root: Element,
}

impl WebDocument {
    /// Bind to the global window's document. Fails if any of window,
    /// document or root element is missing.
    pub fn from_global() -> Result<Self> {
        let window = web_sys::window().ok_or(WebError::MissingWindow)?;
        let document = window.document().ok_or(WebError::MissingDocument)?;
        let root = document
            .document_element()
            .ok_or(WebError::MissingRootElement)?;
        Ok(Self {
            window,
            document,
            root,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// A required `<select>` control
    pub fn select(&self, id: &str) -> Result<HtmlSelectElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
            .ok_or_else(|| WebError::MissingElement(id.to_string()))
    }
}

impl ThemeDocument for WebDocument {
    type Node = Element;

    fn root_class_name(&self) -> String {
        self.root.class_name()
    }

    fn set_root_class_name(&self, value: &str) {
        self.root.set_class_name(value);
    }

    fn resolved_property(&self, name: &str) -> String {
        self.window
            .get_computed_style(&self.root)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(name).ok())
            .unwrap_or_default()
    }

    fn nodes_with_attribute(&self, attribute: &str) -> Vec<(Element, String)> {
        let Ok(list) = self.document.query_selector_all(&format!("[{attribute}]")) else {
            tracing::debug!(attribute, "attribute selector rejected");
            return Vec::new();
        };

        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|element| {
                let value = element.get_attribute(attribute)?;
                Some((element, value))
            })
            .collect()
    }

    fn node_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }
}
