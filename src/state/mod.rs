//! Page behavior, independent of the browser.
//!
//! DESIGN
//! ======
//! `theme` and `toast` are unrelated features that share one init entry
//! point in `controller`.

pub mod controller;
pub mod theme;
pub mod toast;
