//! Toast notifications for htmx trigger events.
//!
//! DESIGN
//! ======
//! A toast is `hidden ⇄ visible`, driven by a CSS class and a hide timer.
//! Every `show` bumps a generation and hands out a ticket carrying the hide
//! delay; the timer only hides the toast if its ticket is still the newest.
//! Back-to-back triggers (the server sends `game-removed` and `toast` in one
//! response) therefore never cut the latest message short.

use std::cell::Cell;

use serde_json::Value;

use crate::config::UiConfig;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// The page element that displays toast text.
pub trait ToastSurface {
    fn set_text(&self, message: &str);
    fn set_visible(&self, visible: bool);
}

/// Identifies one `show` call. Pass it back to [`ToastNotifier::expire`]
/// once [`ToastTicket::hide_after_ms`] has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTicket {
    generation: u64,
    hide_after_ms: u32,
}

impl ToastTicket {
    pub fn hide_after_ms(self) -> u32 {
        self.hide_after_ms
    }
}

pub struct ToastNotifier<T> {
    surface: Option<T>,
    hide_after_ms: u32,
    generation: Cell<u64>,
}

impl<T: ToastSurface> ToastNotifier<T> {
    /// `surface` is `None` when the page has no toast element.
    pub fn new(surface: Option<T>, hide_after_ms: u32) -> Self {
        Self { surface, hide_after_ms, generation: Cell::new(0) }
    }

    pub fn surface(&self) -> Option<&T> {
        self.surface.as_ref()
    }

    /// Display `message`. Returns `None` (and does nothing) without a surface.
    pub fn show(&self, message: &str) -> Option<ToastTicket> {
        let surface = self.surface.as_ref()?;
        surface.set_text(message);
        surface.set_visible(true);
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        Some(ToastTicket { generation, hide_after_ms: self.hide_after_ms })
    }

    /// Hide the toast if `ticket` is from the latest `show`.
    pub fn expire(&self, ticket: ToastTicket) -> bool {
        let Some(surface) = self.surface.as_ref() else {
            return false;
        };
        if ticket.generation != self.generation.get() {
            return false;
        }
        surface.set_visible(false);
        true
    }
}

/// A `CustomEvent.detail`, reduced to what a message can come from.
///
/// htmx dispatches `HX-Trigger` values as `{ value, elt }` where `elt` is
/// the requesting element, so object details are never walked past their
/// `value` field.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ToastDetail {
    #[default]
    Absent,
    /// A string, number or boolean detail.
    Scalar(Value),
    /// An object detail and its scalar `value` field, if any.
    Object { value: Option<Value> },
}

impl ToastDetail {
    /// Text to show, or `None` for a falsy/unusable detail.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Scalar(value) | Self::Object { value: Some(value) } => scalar_message(value),
            Self::Object { value: None } | Self::Absent => None,
        }
    }
}

/// Text for a truthy string, number or boolean.
pub fn scalar_message(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

/// Custom events that raise a toast.
#[derive(Clone, Debug, PartialEq)]
pub enum ToastEvent {
    GameRemoved,
    Toast { detail: ToastDetail },
}

impl ToastEvent {
    /// Map a DOM event name to a toast event.
    pub fn from_dom(name: &str, detail: ToastDetail, config: &UiConfig) -> Option<Self> {
        if name == config.game_removed_event {
            Some(Self::GameRemoved)
        } else if name == config.toast_event {
            Some(Self::Toast { detail })
        } else {
            None
        }
    }

    pub fn message(&self, config: &UiConfig) -> String {
        match self {
            Self::GameRemoved => config.game_removed_message.clone(),
            Self::Toast { detail } => {
                detail.message().unwrap_or_else(|| config.default_toast_message.clone())
            }
        }
    }
}
