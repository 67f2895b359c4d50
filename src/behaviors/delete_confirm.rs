//! Confirmation prompt in front of delete actions.
//!
//! Covers the elements matching the selector at install time only.

use web_sys::{Document, Event};

use crate::config::DeleteConfirmConfig;
use crate::error::BehaviorError;
use crate::state::confirm::DeleteDecision;
use crate::util::dom;

/// Guard every matching element. Returns how many were guarded.
pub fn install(document: &Document, config: &DeleteConfirmConfig) -> Result<usize, BehaviorError> {
    let window = dom::window()?;
    let targets = dom::select_all(document, &config.selector)?;

    for target in &targets {
        let window = window.clone();
        let prompt = config.prompt.clone();
        dom::listen(target, "click", move |ev: Event| {
            let decision = DeleteDecision::from_answer(window.confirm_with_message(&prompt).ok());
            log::debug!("delete confirmation: {decision:?}");
            if decision.blocks_default() {
                ev.prevent_default();
            }
        })?;
    }

    Ok(targets.len())
}
