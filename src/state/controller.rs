//! Page-lifetime controller composing the theme manager and toast notifier.
//!
//! The browser glue in `app` calls into this type from DOM callbacks; nothing
//! here knows about `web-sys`.

use crate::config::UiConfig;
use crate::state::theme::{
    ColorSchemeQuery, Theme, ThemeDocument, ThemeIcons, ThemeManager, ThemePreferenceStore,
};
use crate::state::toast::{ToastEvent, ToastNotifier, ToastSurface, ToastTicket};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeAndToastController<S, D, Q, T> {
    config: UiConfig,
    theme: ThemeManager<S, D, Q>,
    toast: ToastNotifier<T>,
}

impl<S, D, Q, T> ThemeAndToastController<S, D, Q, T>
where
    S: ThemePreferenceStore,
    D: ThemeDocument,
    Q: ColorSchemeQuery,
    T: ToastSurface,
{
    pub fn new(config: UiConfig, store: S, document: D, query: Q, toast: Option<T>) -> Self {
        let icons = ThemeIcons::from_config(&config);
        Self {
            theme: ThemeManager::new(store, document, query, icons),
            toast: ToastNotifier::new(toast, config.toast_duration_ms),
            config,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn theme(&self) -> &ThemeManager<S, D, Q> {
        &self.theme
    }

    pub fn toast(&self) -> &ToastNotifier<T> {
        &self.toast
    }

    /// Content-ready initialization: restore, then sync marker and icons.
    pub fn init(&self) {
        let preference = self.theme.restore();
        self.theme.apply_pref_flag();
        self.theme.update_icons();
        log::debug!("theme: restored {preference:?}, effective {:?}", self.theme.current_theme());
    }

    pub fn on_toggle_click(&self) -> Theme {
        self.theme.toggle()
    }

    pub fn on_os_change(&self) {
        self.theme.on_os_change();
    }

    /// Show the toast for `event`. The caller schedules [`Self::expire_toast`].
    pub fn on_event(&self, event: &ToastEvent) -> Option<ToastTicket> {
        let message = event.message(&self.config);
        self.toast.show(&message)
    }

    pub fn expire_toast(&self, ticket: ToastTicket) -> bool {
        self.toast.expire(ticket)
    }
}
