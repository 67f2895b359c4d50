//! Floating light/dark theme toggle.
//!
//! The control owns its [`ThemeState`]; the body class and inline colors are
//! written from it on every change and never read back.

use leptos::prelude::*;
use web_sys::Document;

use crate::config::ThemeConfig;
use crate::error::BehaviorError;
use crate::state::theme::{BodyOverrides, ThemeState};
use crate::util::dom;

#[component]
pub fn ThemeToggle(config: ThemeConfig) -> impl IntoView {
    let theme = RwSignal::new(ThemeState::default());
    let class = config.control_class.clone();
    let style = config.control_style();
    let label_config = config.clone();

    // Body styling stays untouched until the first activation.
    Effect::new(move |_| {
        let state = theme.get();
        if state.activated() {
            log::debug!("theme switched to {:?}", state.theme());
            apply_body(&state.body_overrides(&config));
        }
    });

    view! {
        <button type="button" class=class style=style on:click=move |_| theme.update(ThemeState::toggle)>
            {move || theme.with(|s| s.label(&label_config).to_owned())}
        </button>
    }
}

/// Append the toggle control to `<body>`.
pub fn install(document: &Document, config: &ThemeConfig) -> Result<(), BehaviorError> {
    let body = document.body().ok_or(BehaviorError::MissingBody)?;
    let config = config.clone();
    leptos::mount::mount_to(body, move || view! { <ThemeToggle config=config/> }).forget();
    Ok(())
}

fn apply_body(overrides: &BodyOverrides<'_>) {
    let Some(body) = dom::document().ok().and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if overrides.marked { classes.add_1(overrides.class) } else { classes.remove_1(overrides.class) };
    dom::set_style(&body, "background-color", overrides.background);
    dom::set_style(&body, "color", overrides.color);
}
