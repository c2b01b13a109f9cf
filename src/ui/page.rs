//! Status banners
//!
//! Loading, error and success banners are fixed markup fragments written
//! into a named element of a [`Page`]. Writing to an element that does not
//! exist does nothing.

use std::collections::HashMap;
use std::sync::Mutex;

pub const LOADING_MARKUP: &str =
    r#"<div class="loading"><div class="spinner"></div><p>Loading...</p></div>"#;

/// Element container the banners are rendered into
pub trait Page: Send + Sync {
    /// Replace an element's inner content; `false` when the element is absent
    fn set_inner_html(&self, element_id: &str, html: &str) -> bool;
}

pub fn show_loading(page: &dyn Page, element_id: &str) {
    page.set_inner_html(element_id, LOADING_MARKUP);
}

/// The message is inserted as-is, it is not escaped
pub fn show_error(page: &dyn Page, element_id: &str, message: &str) {
    page.set_inner_html(
        element_id,
        &format!(r#"<div class="error-message">{}</div>"#, message),
    );
}

pub fn show_success(page: &dyn Page, element_id: &str, message: &str) {
    page.set_inner_html(
        element_id,
        &format!(r#"<div class="success-message">{}</div>"#, message),
    );
}

/// In-memory page holding a fixed set of elements
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: Mutex<HashMap<String, String>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with empty elements for each of `ids`
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (id.into(), String::new()))
            .collect();
        Self {
            elements: Mutex::new(elements),
        }
    }

    pub fn add_element(&self, element_id: &str) {
        if let Ok(mut elements) = self.elements.lock() {
            elements.entry(element_id.to_string()).or_default();
        }
    }

    pub fn inner_html(&self, element_id: &str) -> Option<String> {
        self.elements
            .lock()
            .ok()
            .and_then(|elements| elements.get(element_id).cloned())
    }
}

impl Page for MemoryPage {
    fn set_inner_html(&self, element_id: &str, html: &str) -> bool {
        let Ok(mut elements) = self.elements.lock() else {
            return false;
        };
        match elements.get_mut(element_id) {
            Some(content) => {
                *content = html.to_string();
                true
            }
            None => false,
        }
    }
}
