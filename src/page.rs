//! Page surface: the DOM operations preference handling needs.
//!
//! DESIGN
//! ======
//! `PreferenceService` never touches `web_sys` directly. Everything it does to
//! a page goes through `PageSurface`, which the browser bindings implement
//! over `document` and tests implement with `MemoryPage`. Every element is
//! optional: operations on missing ids report `false` and change nothing.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Mutations and queries on the current page.
pub trait PageSurface {
    fn add_body_class(&mut self, class: &str);

    fn remove_body_class(&mut self, class: &str);

    /// Environment color-scheme signal, read at call time.
    fn prefers_dark(&self) -> bool;

    /// Set the value of the control with `id`. Returns `false` if there is none.
    fn set_control_value(&mut self, id: &str, value: &str) -> bool;

    /// Replace the text of the element with `id`. Returns `false` if there is none.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Visit each element carrying any of `classes` once, in document order.
    ///
    /// When `rewrite` returns `Some`, the element's text is replaced. Returns
    /// the number of elements rewritten.
    fn rewrite_texts(&mut self, classes: &[String], rewrite: &mut dyn FnMut(&str) -> Option<String>) -> usize;
}

/// One element of a [`MemoryPage`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
    /// Present for form controls.
    pub value: Option<String>,
}

/// Recording page used in tests and native tooling.
#[derive(Clone, Debug, Default)]
pub struct MemoryPage {
    body_classes: Vec<String>,
    elements: Vec<MemoryElement>,
    prefers_dark: bool,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a form control (`<select id=...>`) with an initial value.
    #[must_use]
    pub fn with_control(mut self, id: &str, value: &str) -> Self {
        self.elements.push(MemoryElement { id: Some(id.to_owned()), value: Some(value.to_owned()), ..MemoryElement::default() });
        self
    }

    /// Add a text element addressed by id.
    #[must_use]
    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.elements.push(MemoryElement { id: Some(id.to_owned()), text: text.to_owned(), ..MemoryElement::default() });
        self
    }

    /// Add an anonymous element with the given classes and text.
    #[must_use]
    pub fn with_classed(mut self, classes: &[&str], text: &str) -> Self {
        self.elements.push(MemoryElement {
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            text: text.to_owned(),
            ..MemoryElement::default()
        });
        self
    }

    #[must_use]
    pub fn with_prefers_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    pub fn set_prefers_dark(&mut self, prefers_dark: bool) {
        self.prefers_dark = prefers_dark;
    }

    pub fn body_classes(&self) -> &[String] {
        &self.body_classes
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.iter().any(|c| c == class)
    }

    pub fn control_value(&self, id: &str) -> Option<&str> {
        self.by_id(id).and_then(|el| el.value.as_deref())
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.by_id(id).map(|el| el.text.as_str())
    }

    /// Texts of all anonymous (class-addressed) elements, in insertion order.
    pub fn classed_texts(&self) -> Vec<&str> {
        self.elements.iter().filter(|el| el.id.is_none()).map(|el| el.text.as_str()).collect()
    }

    fn by_id(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.iter().find(|el| el.id.as_deref() == Some(id))
    }

    fn by_id_mut(&mut self, id: &str) -> Option<&mut MemoryElement> {
        self.elements.iter_mut().find(|el| el.id.as_deref() == Some(id))
    }
}

impl PageSurface for MemoryPage {
    fn add_body_class(&mut self, class: &str) {
        if !self.has_body_class(class) {
            self.body_classes.push(class.to_owned());
        }
    }

    fn remove_body_class(&mut self, class: &str) {
        self.body_classes.retain(|c| c != class);
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn set_control_value(&mut self, id: &str, value: &str) -> bool {
        let Some(el) = self.by_id_mut(id) else {
            return false;
        };
        el.value = Some(value.to_owned());
        true
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let Some(el) = self.by_id_mut(id) else {
            return false;
        };
        el.text = text.to_owned();
        true
    }

    fn rewrite_texts(&mut self, classes: &[String], rewrite: &mut dyn FnMut(&str) -> Option<String>) -> usize {
        let mut rewritten = 0;
        for el in &mut self.elements {
            if !el.classes.iter().any(|c| classes.contains(c)) {
                continue;
            }
            if let Some(text) = rewrite(&el.text) {
                el.text = text;
                rewritten += 1;
            }
        }
        rewritten
    }
}
