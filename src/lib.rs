//! # tracker-ui
//!
//! WASM page enhancements for the server-rendered tracker UI: a persisted
//! light/dark theme toggle that follows the OS color scheme until the user
//! picks one, and a transient toast surface driven by htmx trigger events.
//!
//! Logic lives in `state` behind small traits (storage, document, OS query,
//! toast surface) so it runs natively under `cargo test`. The `browser`
//! feature adds the `web-sys` implementations in `util` and the
//! `wasm-bindgen` entry point in `app`.

#[cfg(feature = "browser")]
pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point. Runs once when the module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::start();
}
