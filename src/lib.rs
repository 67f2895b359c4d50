//! # page-behaviors
//!
//! Leptos + WASM glue for the content admin pages. Enhances server-rendered
//! markup with four independent behaviors:
//!
//! - image preview for the upload input,
//! - confirmation before delete actions,
//! - presence validation for required form fields,
//! - a floating light/dark theme toggle.
//!
//! Decisions live in [`state`] and [`config`] as plain Rust so they run under
//! native `cargo test`. The `csr` feature adds the browser wiring in
//! `behaviors` and the WASM start function.

pub mod config;
pub mod error;
pub mod state;

#[cfg(feature = "csr")]
pub mod behaviors;
#[cfg(feature = "csr")]
mod util;

pub use config::BehaviorConfig;
pub use error::BehaviorError;

/// WASM entry point.
///
/// Installs the panic hook and console logger, then runs the page behavior
/// initializer once the document has been parsed.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    behaviors::run_when_ready();
}
