//! The live `document` as a [`PageSurface`].

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::js_message;
use crate::consts::PREFERS_DARK_QUERY;
use crate::error::PrefsError;
use crate::page::PageSurface;

pub struct DocumentPage {
    window: Window,
    document: Document,
}

impl DocumentPage {
    pub fn attach() -> Result<Self, PrefsError> {
        let window = web_sys::window().ok_or(PrefsError::MissingBrowserObject("window"))?;
        let document = window.document().ok_or(PrefsError::MissingBrowserObject("document"))?;
        Ok(Self { window, document })
    }
}

impl PageSurface for DocumentPage {
    fn add_body_class(&mut self, class: &str) {
        let Some(body) = self.document.body() else {
            log::warn!("no <body>; class {class} not added");
            return;
        };
        if let Err(e) = body.class_list().add_1(class) {
            log::warn!("body class {class} not added: {}", js_message(&e));
        }
    }

    fn remove_body_class(&mut self, class: &str) {
        let Some(body) = self.document.body() else {
            return;
        };
        if let Err(e) = body.class_list().remove_1(class) {
            log::warn!("body class {class} not removed: {}", js_message(&e));
        }
    }

    fn prefers_dark(&self) -> bool {
        match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(e) => {
                log::warn!("color-scheme query failed: {}", js_message(&e));
                false
            }
        }
    }

    fn set_control_value(&mut self, id: &str, value: &str) -> bool {
        let Some(control) = self.document.get_element_by_id(id) else {
            return false;
        };
        // Equivalent of `control.value = value` for any control type.
        if let Err(e) = js_sys::Reflect::set(&control, &JsValue::from_str("value"), &JsValue::from_str(value)) {
            log::warn!("control #{id} not updated: {}", js_message(&e));
        }
        true
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let Some(el) = self.document.get_element_by_id(id) else {
            return false;
        };
        el.set_text_content(Some(text));
        true
    }

    fn rewrite_texts(&mut self, classes: &[String], rewrite: &mut dyn FnMut(&str) -> Option<String>) -> usize {
        if classes.is_empty() {
            return 0;
        }
        let selector = classes.iter().map(|c| format!(".{c}")).collect::<Vec<_>>().join(", ");
        let nodes = match self.document.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("selector {selector} rejected: {}", js_message(&e));
                return 0;
            }
        };

        let mut rewritten = 0;
        for idx in 0..nodes.length() {
            let Some(node) = nodes.item(idx) else {
                continue;
            };
            let text = node.text_content().unwrap_or_default();
            if let Some(next) = rewrite(&text) {
                node.set_text_content(Some(&next));
                rewritten += 1;
            }
        }
        rewritten
    }
}
