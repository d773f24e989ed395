//! In-memory page fakes shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::StorageError;
use crate::state::theme::{ColorSchemeQuery, Theme, ThemeDocument, ThemePreferenceStore};
use crate::state::toast::ToastSurface;

/// Storage slot; `broken` makes every call fail like disabled storage.
#[derive(Default)]
pub struct FakeStore {
    pub value: RefCell<Option<String>>,
    pub broken: Cell<bool>,
}

impl FakeStore {
    pub fn with(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())), broken: Cell::new(false) }
    }

    pub fn broken() -> Self {
        Self { value: RefCell::new(None), broken: Cell::new(true) }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.broken.get() {
            Err(StorageError::Unavailable("disabled".to_owned()))
        } else {
            Ok(())
        }
    }
}

impl ThemePreferenceStore for FakeStore {
    fn get(&self) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.value.borrow().clone())
    }

    fn set(&self, value: &str) -> Result<(), StorageError> {
        self.check()?;
        *self.value.borrow_mut() = Some(value.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        self.check()?;
        *self.value.borrow_mut() = None;
        Ok(())
    }
}

/// Root element plus `icons.len()` toggle buttons.
pub struct FakeDocument {
    pub theme: RefCell<Option<String>>,
    pub prefers_light: Cell<bool>,
    pub icons: RefCell<Vec<String>>,
}

impl FakeDocument {
    pub fn with_buttons(count: usize) -> Self {
        Self {
            theme: RefCell::new(None),
            prefers_light: Cell::new(false),
            icons: RefCell::new(vec![String::new(); count]),
        }
    }

    pub fn theme_attr(&self) -> Option<String> {
        self.theme.borrow().clone()
    }

    pub fn icon_classes(&self) -> Vec<String> {
        self.icons.borrow().clone()
    }
}

impl ThemeDocument for FakeDocument {
    fn explicit_theme(&self) -> Option<String> {
        self.theme.borrow().clone()
    }

    fn set_explicit_theme(&self, theme: Option<Theme>) {
        *self.theme.borrow_mut() = theme.map(|t| t.as_str().to_owned());
    }

    fn set_prefers_light(&self, prefers_light: bool) {
        self.prefers_light.set(prefers_light);
    }

    fn set_icon_class(&self, class: &str) {
        for icon in self.icons.borrow_mut().iter_mut() {
            class.clone_into(icon);
        }
    }
}

/// OS query whose state the test can flip after handing it over.
#[derive(Clone, Default)]
pub struct FakeQuery(pub Rc<Cell<bool>>);

impl FakeQuery {
    pub fn light() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn dark() -> Self {
        Self(Rc::new(Cell::new(false)))
    }
}

impl ColorSchemeQuery for FakeQuery {
    fn prefers_light(&self) -> bool {
        self.0.get()
    }
}

#[derive(Default)]
pub struct FakeToast {
    pub text: RefCell<String>,
    pub visible: Cell<bool>,
}

impl ToastSurface for FakeToast {
    fn set_text(&self, message: &str) {
        message.clone_into(&mut self.text.borrow_mut());
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}
