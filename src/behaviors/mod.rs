//! Page behavior initializer.
//!
//! Runs once per page view after the document is parsed and installs each
//! enabled behavior independently. A behavior that fails to install is
//! logged and skipped; the others still run.

pub mod delete_confirm;
pub mod form_validation;
pub mod image_preview;
pub mod theme_toggle;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Event;

use crate::config::BehaviorConfig;
use crate::error::BehaviorError;
use crate::util::dom;

/// What [`init`] managed to wire up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitSummary {
    pub image_preview: bool,
    pub delete_buttons: usize,
    pub forms: usize,
    pub theme_toggle: bool,
}

/// Run [`init`] now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn run_when_ready() {
    let document = match dom::document() {
        Ok(d) => d,
        Err(e) => {
            log::warn!("page behaviors not started: {e}");
            return;
        }
    };

    if document.ready_state() != "loading" {
        init(&BehaviorConfig::from_document());
        return;
    }

    let on_ready = Closure::once_into_js(move |_: Event| {
        init(&BehaviorConfig::from_document());
    });
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("page behaviors not started: {}", BehaviorError::dom("addEventListener")(e));
    }
}

/// Install every enabled behavior on the current document.
pub fn init(config: &BehaviorConfig) -> InitSummary {
    let mut summary = InitSummary::default();
    let document = match dom::document() {
        Ok(d) => d,
        Err(e) => {
            log::warn!("page behaviors not installed: {e}");
            return summary;
        }
    };

    if config.image_preview.enabled {
        match image_preview::install(&document, &config.image_preview) {
            Ok(installed) => summary.image_preview = installed,
            Err(e) => log::warn!("image preview not installed: {e}"),
        }
    }
    if config.delete_confirm.enabled {
        match delete_confirm::install(&document, &config.delete_confirm) {
            Ok(count) => summary.delete_buttons = count,
            Err(e) => log::warn!("delete confirmation not installed: {e}"),
        }
    }
    if config.form_validation.enabled {
        match form_validation::install(&document, &config.form_validation) {
            Ok(count) => summary.forms = count,
            Err(e) => log::warn!("form validation not installed: {e}"),
        }
    }
    if config.theme.enabled {
        match theme_toggle::install(&document, &config.theme) {
            Ok(()) => summary.theme_toggle = true,
            Err(e) => log::warn!("theme toggle not installed: {e}"),
        }
    }

    log::info!(
        "page behaviors ready: image_preview={} delete_buttons={} forms={} theme_toggle={}",
        summary.image_preview,
        summary.delete_buttons,
        summary.forms,
        summary.theme_toggle
    );
    summary
}
