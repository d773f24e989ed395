//! `web-sys` implementations of the theme document, OS query, and toast
//! surface.
//!
//! DOM writes return `Result<(), JsValue>` but only fail for invalid
//! attribute names, which come from validated config; failures are logged
//! at debug level.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MediaQueryList, Window};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::state::theme::{ColorSchemeQuery, Theme, ThemeDocument};
use crate::state::toast::ToastSurface;

/// Render a thrown JS value for logs and error messages.
pub fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// All elements matching `selector`; empty on an invalid selector.
pub fn query_elements(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("dom: bad selector {selector:?}: {}", describe_js_error(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn log_dom_result(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::debug!("dom: {op} failed: {}", describe_js_error(&err));
    }
}

/// The `<html>` element plus the toggle icon selector.
pub struct DomThemeDocument {
    document: Document,
    root: Element,
    theme_attribute: String,
    prefers_light_attribute: String,
    icon_selector: String,
}

impl DomThemeDocument {
    pub fn new(document: Document, config: &UiConfig) -> Result<Self, UiError> {
        let root = document.document_element().ok_or(UiError::MissingRoot)?;
        Ok(Self {
            document,
            root,
            theme_attribute: config.theme_attribute.clone(),
            prefers_light_attribute: config.prefers_light_attribute.clone(),
            icon_selector: config.icon_selector.clone(),
        })
    }
}

impl ThemeDocument for DomThemeDocument {
    fn explicit_theme(&self) -> Option<String> {
        self.root.get_attribute(&self.theme_attribute)
    }

    fn set_explicit_theme(&self, theme: Option<Theme>) {
        let result = match theme {
            Some(theme) => self.root.set_attribute(&self.theme_attribute, theme.as_str()),
            None => self.root.remove_attribute(&self.theme_attribute),
        };
        log_dom_result("set theme attribute", result);
    }

    fn set_prefers_light(&self, prefers_light: bool) {
        let result = if prefers_light {
            self.root.set_attribute(&self.prefers_light_attribute, "")
        } else {
            self.root.remove_attribute(&self.prefers_light_attribute)
        };
        log_dom_result("set prefers-light marker", result);
    }

    fn set_icon_class(&self, class: &str) {
        for icon in query_elements(&self.document, &self.icon_selector) {
            icon.set_class_name(class);
        }
    }
}

/// `matchMedia` handle; `None` on engines without media query support.
pub struct DomColorScheme {
    list: Option<MediaQueryList>,
}

impl DomColorScheme {
    pub fn new(window: &Window, query: &str) -> Self {
        Self { list: window.match_media(query).ok().flatten() }
    }

    pub fn list(&self) -> Option<&MediaQueryList> {
        self.list.as_ref()
    }
}

impl ColorSchemeQuery for DomColorScheme {
    fn prefers_light(&self) -> bool {
        self.list.as_ref().is_some_and(MediaQueryList::matches)
    }
}

pub struct DomToastSurface {
    element: Element,
    visible_class: String,
}

impl DomToastSurface {
    /// Look up the toast element once; pages without one get no toasts.
    pub fn find(document: &Document, config: &UiConfig) -> Option<Self> {
        let element = document.get_element_by_id(&config.toast_element_id)?;
        Some(Self { element, visible_class: config.toast_visible_class.clone() })
    }
}

impl ToastSurface for DomToastSurface {
    fn set_text(&self, message: &str) {
        self.element.set_text_content(Some(message));
    }

    fn set_visible(&self, visible: bool) {
        let classes = self.element.class_list();
        let result = if visible {
            classes.add_1(&self.visible_class)
        } else {
            classes.remove_1(&self.visible_class)
        };
        log_dom_result("toggle toast class", result);
    }
}
