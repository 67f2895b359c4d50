//! Inline preview for the upload file input.
//!
//! Each selection starts one `FileReader` read. Reads are never cancelled;
//! every completion writes the same signal, so the last one to finish is
//! what stays on screen.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Event, FileReader, HtmlElement, HtmlInputElement, ProgressEvent};

use crate::config::ImagePreviewConfig;
use crate::error::BehaviorError;
use crate::state::preview::{ReadOutcome, UploadHints, image_style};
use crate::util::dom;

type PreviewSlot = Rc<RefCell<Option<RwSignal<String>>>>;

/// Label plus image for the selected file.
#[component]
pub fn ImagePreview(src: RwSignal<String>, label: String, alt: String, image_style: String) -> impl IntoView {
    view! {
        <p>{label}</p>
        <img src=move || src.get() alt=alt style=image_style/>
    }
}

/// Watch the configured file input. Returns `false` when the page has none.
pub fn install(document: &Document, config: &ImagePreviewConfig) -> Result<bool, BehaviorError> {
    let Some(input) = document
        .get_element_by_id(&config.input_id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        log::debug!("no #{} file input, image preview skipped", config.input_id);
        return Ok(false);
    };

    let slot = PreviewSlot::default();
    let config = config.clone();
    let target = input.clone();
    dom::listen(&target, "change", move |_: Event| {
        if let Err(e) = start_read(&input, &config, &slot) {
            log::warn!("image preview read not started: {e}");
        }
    })?;
    Ok(true)
}

fn start_read(input: &HtmlInputElement, config: &ImagePreviewConfig, slot: &PreviewSlot) -> Result<(), BehaviorError> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(());
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size().max(0.0) as u64;
    for notice in UploadHints::new(&config.upload_hints).check(&file.name(), size) {
        log::warn!("{}: {notice}", file.name());
    }

    let reader = FileReader::new().map_err(BehaviorError::dom("new FileReader"))?;
    // `loadend` fires exactly once whether the read succeeds, fails or aborts.
    let on_load_end = {
        let reader = reader.clone();
        let input = input.clone();
        let config = config.clone();
        let slot = Rc::clone(slot);
        let name = file.name();
        Closure::once_into_js(move |_: ProgressEvent| {
            let result = reader.result().ok().and_then(|v| v.as_string());
            match ReadOutcome::from_result(result) {
                ReadOutcome::Preview(src) => {
                    if let Err(e) = show(&input, &config, &slot, src) {
                        log::warn!("image preview not shown: {e}");
                    }
                }
                ReadOutcome::Unrenderable => log::warn!("{name}: read produced no previewable data"),
                ReadOutcome::Failed => log::warn!("{name}: file read failed"),
            }
        })
    };
    reader.set_onloadend(Some(on_load_end.unchecked_ref()));
    reader
        .read_as_data_url(&file)
        .map_err(BehaviorError::dom("readAsDataURL"))?;
    log::debug!("reading {} for preview", file.name());
    Ok(())
}

fn show(input: &HtmlInputElement, config: &ImagePreviewConfig, slot: &PreviewSlot, src: String) -> Result<(), BehaviorError> {
    let mounted = *slot.borrow();
    if let Some(signal) = mounted {
        signal.set(src);
        return Ok(());
    }

    let container = locate_container(input, config)?;
    container.set_inner_html("");

    let label = config.label.clone();
    let alt = config.alt.clone();
    let style = image_style(config);
    let slot = Rc::clone(slot);
    leptos::mount::mount_to(container, move || {
        let src = RwSignal::new(src);
        *slot.borrow_mut() = Some(src);
        view! { <ImagePreview src=src label=label alt=alt image_style=style/> }
    })
    .forget();
    Ok(())
}

/// Reuse the page's preview container or append a new one beside the input.
fn locate_container(input: &HtmlInputElement, config: &ImagePreviewConfig) -> Result<HtmlElement, BehaviorError> {
    let document = input.owner_document().ok_or(BehaviorError::MissingDocument)?;
    let selector = format!(".{}", config.container_class);
    let parent = input.parent_element();

    let existing = parent
        .as_ref()
        .and_then(|p| p.query_selector(&selector).ok().flatten())
        .or_else(|| document.query_selector(&selector).ok().flatten());
    if let Some(container) = existing {
        return dom::as_html(container);
    }

    let parent = parent.ok_or(BehaviorError::Dom {
        op: "locate preview container",
        detail: "file input has no parent".to_owned(),
    })?;
    let container = dom::create(&document, "div", &config.container_class)?;
    parent
        .append_child(&container)
        .map_err(BehaviorError::dom("appendChild"))?;
    dom::as_html(container)
}
