//! Theme preference, resolution, and toggle behavior.
//!
//! DESIGN
//! ======
//! The explicit theme lives on the root element as `data-theme`; when it is
//! absent, stylesheets fall back to the OS color scheme and the
//! `data-prefers-light` marker. The manager only talks to the page through
//! three seams so the same code drives the browser and the native tests.
//!
//! Persistence is best-effort: storage failures are logged and dropped, and
//! the document still updates.

use crate::config::UiConfig;
use crate::error::StorageError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// A concrete rendered theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse an exact `light` / `dark` value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The theme a toggle click switches to.
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// The persisted user choice. `Unset` follows the OS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Anything other than exactly `light` or `dark` is `Unset`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.and_then(Theme::parse) {
            Some(Theme::Light) => Self::Light,
            Some(Theme::Dark) => Self::Dark,
            None => Self::Unset,
        }
    }

    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
            Self::Unset => None,
        }
    }
}

/// Persisted key/value slot holding the raw preference string.
pub trait ThemePreferenceStore {
    fn get(&self) -> Result<Option<String>, StorageError>;
    fn set(&self, value: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// Root element attributes and toggle icons.
pub trait ThemeDocument {
    /// Raw `data-theme` value, if the attribute is present.
    fn explicit_theme(&self) -> Option<String>;
    /// Set `data-theme`, or remove it for `None`.
    fn set_explicit_theme(&self, theme: Option<Theme>);
    /// Add or remove the presence-only OS preference marker.
    fn set_prefers_light(&self, prefers_light: bool);
    /// Rewrite the class of every toggle icon element.
    fn set_icon_class(&self, class: &str);
}

/// Live OS color-scheme query.
pub trait ColorSchemeQuery {
    fn prefers_light(&self) -> bool;
}

/// Icon classes for the toggle buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeIcons {
    pub sun: String,
    pub moon: String,
}

impl ThemeIcons {
    pub fn from_config(config: &UiConfig) -> Self {
        Self { sun: config.sun_icon_class.clone(), moon: config.moon_icon_class.clone() }
    }

    /// Sun while dark (click for light), moon otherwise.
    pub fn for_theme(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.sun,
            Theme::Light => &self.moon,
        }
    }
}

pub struct ThemeManager<S, D, Q> {
    store: S,
    document: D,
    query: Q,
    icons: ThemeIcons,
}

impl<S, D, Q> ThemeManager<S, D, Q>
where
    S: ThemePreferenceStore,
    D: ThemeDocument,
    Q: ColorSchemeQuery,
{
    pub fn new(store: S, document: D, query: Q, icons: ThemeIcons) -> Self {
        Self { store, document, query, icons }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Apply the persisted preference, if it is an explicit theme.
    ///
    /// Only sets the attribute; icons and the OS marker are refreshed by the
    /// caller once the whole page is wired.
    pub fn restore(&self) -> ThemePreference {
        let stored = match self.store.get() {
            Ok(value) => value,
            Err(err) => {
                log::debug!("theme: preference not restored: {err}");
                None
            }
        };
        let preference = ThemePreference::from_stored(stored.as_deref());
        if let Some(theme) = preference.theme() {
            self.document.set_explicit_theme(Some(theme));
        }
        preference
    }

    /// Whether a non-empty `data-theme` attribute is present.
    pub fn has_explicit_theme(&self) -> bool {
        self.document.explicit_theme().is_some_and(|raw| !raw.is_empty())
    }

    /// Effective theme: explicit attribute first, then the OS query.
    ///
    /// An unrecognized explicit value still counts as explicit and renders
    /// as "not dark".
    pub fn current_theme(&self) -> Theme {
        match self.document.explicit_theme().filter(|raw| !raw.is_empty()) {
            Some(raw) => Theme::parse(&raw).unwrap_or(Theme::Light),
            None if self.query.prefers_light() => Theme::Light,
            None => Theme::Dark,
        }
    }

    /// Apply and persist a raw theme value.
    ///
    /// `light` / `dark` become explicit; anything else clears the attribute
    /// and reverts to the OS scheme. The raw value is persisted as given.
    pub fn set_theme(&self, value: Option<&str>) {
        self.document.set_explicit_theme(value.and_then(Theme::parse));
        let persisted = match value {
            Some(raw) => self.store.set(raw),
            None => self.store.remove(),
        };
        if let Err(err) = persisted {
            log::debug!("theme: preference not persisted: {err}");
        }
        self.update_icons();
        self.apply_pref_flag();
    }

    pub fn update_icons(&self) {
        let theme = self.current_theme();
        self.document.set_icon_class(self.icons.for_theme(theme));
    }

    /// Sync the OS marker. Left alone while an explicit theme is set.
    pub fn apply_pref_flag(&self) {
        if !self.has_explicit_theme() {
            self.document.set_prefers_light(self.query.prefers_light());
        }
    }

    /// Toggle click: dark goes light, everything else goes dark.
    pub fn toggle(&self) -> Theme {
        let next = self.current_theme().flipped();
        self.set_theme(Some(next.as_str()));
        next
    }

    /// OS color-scheme change notification.
    pub fn on_os_change(&self) {
        self.apply_pref_flag();
        self.update_icons();
    }
}
