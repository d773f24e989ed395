//! Browser wiring for the theme toggle and toast notifier.
//!
//! ARCHITECTURE
//! ============
//! One `ThemeAndToastController` per page, shared by `Rc` across leaked
//! `wasm-bindgen` closures. Listeners are bound once and live as long as the
//! page; there is no teardown.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, MediaQueryList};

use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::error::UiError;
use crate::state::controller::ThemeAndToastController;
use crate::state::toast::{ToastDetail, ToastEvent, ToastTicket};
use crate::util::dom::{
    DomColorScheme, DomThemeDocument, DomToastSurface, describe_js_error, query_elements,
};
use crate::util::storage::LocalStorageStore;

type PageController =
    ThemeAndToastController<LocalStorageStore, DomThemeDocument, DomColorScheme, DomToastSurface>;

/// Set up logging and install the controller once the DOM is parsed.
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(err) = when_content_ready() {
        log::error!("ui: install failed: {err}");
    }
}

fn when_content_ready() -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::MissingWindow)?;
    let document = window.document().ok_or(UiError::MissingDocument)?;

    // The module may load after DOMContentLoaded has already fired.
    if document.ready_state() != "loading" {
        return install();
    }

    let on_ready = Closure::wrap(Box::new(move |_event: Event| {
        if let Err(err) = install() {
            log::error!("ui: install failed: {err}");
        }
    }) as Box<dyn FnMut(_)>);
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|err| UiError::Dom(describe_js_error(&err)))?;
    on_ready.forget();
    Ok(())
}

/// Build the controller against the live page and bind every listener.
pub fn install() -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::MissingWindow)?;
    let document = window.document().ok_or(UiError::MissingDocument)?;
    let config = load_config(&document);

    let store = LocalStorageStore::new(config.storage_key.clone());
    let theme_document = DomThemeDocument::new(document.clone(), &config)?;
    let query = DomColorScheme::new(&window, &config.light_query);
    let media_list = query.list().cloned();
    let toast = DomToastSurface::find(&document, &config);
    if toast.is_none() {
        log::debug!("ui: no #{} element, toasts disabled", config.toast_element_id);
    }

    let controller = ThemeAndToastController::new(config, store, theme_document, query, toast);
    let controller = Rc::new(controller);
    controller.init();

    bind_toggles(&document, &controller);
    if let Some(list) = media_list {
        bind_os_change(&list, &controller);
    }
    bind_toast_events(&document, &controller)?;

    log::info!("ui: theme {:?}, controller installed", controller.theme().current_theme());
    Ok(())
}

/// Defaults, overridden by `<script id="ui-config">` JSON when present.
fn load_config(document: &Document) -> UiConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ui: ignoring #{CONFIG_ELEMENT_ID}: {err}");
            UiConfig::default()
        }
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    let registered =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    if let Err(err) = registered {
        log::debug!("ui: {event} listener not registered: {}", describe_js_error(&err));
    }
    closure.forget();
}

fn bind_toggles(document: &Document, controller: &Rc<PageController>) {
    let buttons: Vec<Element> = query_elements(document, &controller.config().toggle_selector);
    for button in buttons {
        let controller = Rc::clone(controller);
        listen(&button, "click", move |_event| {
            controller.on_toggle_click();
        });
    }
}

/// Older engines lack `addEventListener` on `MediaQueryList`; the marker is
/// then computed once at load.
fn bind_os_change(list: &MediaQueryList, controller: &Rc<PageController>) {
    let controller = Rc::clone(controller);
    listen(list, "change", move |_event| controller.on_os_change());
}

fn bind_toast_events(document: &Document, controller: &Rc<PageController>) -> Result<(), UiError> {
    let body = document
        .body()
        .ok_or_else(|| UiError::Dom("document has no body".to_owned()))?;
    let config = controller.config();
    let names = [config.game_removed_event.clone(), config.toast_event.clone()];
    for name in names {
        let controller = Rc::clone(controller);
        listen(&body, &name, move |event| {
            let detail = event
                .dyn_ref::<web_sys::CustomEvent>()
                .map_or(ToastDetail::Absent, |custom| toast_detail(&custom.detail()));
            let name = event.type_();
            let Some(toast_event) = ToastEvent::from_dom(&name, detail, controller.config()) else {
                return;
            };
            if let Some(ticket) = controller.on_event(&toast_event) {
                schedule_hide(&controller, ticket);
            }
        });
    }
    Ok(())
}

fn schedule_hide(controller: &Rc<PageController>, ticket: ToastTicket) {
    let controller = Rc::clone(controller);
    Timeout::new(ticket.hide_after_ms(), move || {
        controller.expire_toast(ticket);
    })
    .forget();
}

/// Classify a `CustomEvent.detail`. Objects are only read through their
/// `value` field; htmx details also hold the requesting element, which is
/// cyclic and must not be walked.
fn toast_detail(detail: &JsValue) -> ToastDetail {
    if detail.is_undefined() || detail.is_null() {
        return ToastDetail::Absent;
    }
    if let Some(value) = scalar_json(detail) {
        return ToastDetail::Scalar(value);
    }
    if !detail.is_object() {
        return ToastDetail::Absent;
    }
    let value = js_sys::Reflect::get(detail, &JsValue::from_str("value"))
        .ok()
        .and_then(|inner| scalar_json(&inner));
    ToastDetail::Object { value }
}

/// A JS string, number or boolean as JSON; `None` for anything else.
fn scalar_json(value: &JsValue) -> Option<Value> {
    if let Some(text) = value.as_string() {
        Some(Value::String(text))
    } else if let Some(number) = value.as_f64() {
        serde_json::Number::from_f64(number).map(Value::Number)
    } else {
        value.as_bool().map(Value::Bool)
    }
}
