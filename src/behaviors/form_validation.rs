//! Required-field check on form submission.
//!
//! Blank required fields get the error border and one annotation inserted
//! directly after the field; the submission is cancelled and an alert shown.
//! Filled fields get the default border back and lose their annotation.

use std::collections::HashMap;

use web_sys::{Document, Element, Event};

use crate::config::FormValidationConfig;
use crate::error::BehaviorError;
use crate::state::validation::{
    AnnotationLedger, AnnotationOp, FieldKey, RequiredField, ValidationReport, Verdict, has_class_token, validate,
};
use crate::util::dom;

/// Guard every matching form. Returns how many were guarded.
pub fn install(document: &Document, config: &FormValidationConfig) -> Result<usize, BehaviorError> {
    let window = dom::window()?;
    let forms = dom::select_all(document, &config.form_selector)?;

    for form in &forms {
        let mut guard = FormGuard::new(document.clone(), form.clone(), config.clone());
        let window = window.clone();
        dom::listen(form, "submit", move |ev: Event| {
            let report = guard.check();
            if report.is_valid() {
                return;
            }
            ev.prevent_default();
            log::debug!("submission blocked: {} blank required field(s)", report.blank_count());
            let _ = window.alert_with_message(&guard.config.alert_message);
        })?;
    }

    Ok(forms.len())
}

/// Per-form validation state; owns the annotation elements by field key.
struct FormGuard {
    document: Document,
    form: Element,
    config: FormValidationConfig,
    ledger: AnnotationLedger,
    notes: HashMap<FieldKey, Element>,
}

impl FormGuard {
    fn new(document: Document, form: Element, config: FormValidationConfig) -> Self {
        Self { document, form, config, ledger: AnnotationLedger::default(), notes: HashMap::new() }
    }

    /// Validate the form's current required fields and update the page.
    fn check(&mut self) -> ValidationReport {
        let fields = dom::select_within(&self.form, &self.config.required_selector).unwrap_or_else(|e| {
            log::warn!("required fields not readable: {e}");
            Vec::new()
        });
        let inputs: Vec<RequiredField> = fields
            .iter()
            .enumerate()
            .map(|(position, el)| {
                let id = el.id();
                let name = el.get_attribute("name");
                let key = FieldKey::for_field(position, Some(id.as_str()), name.as_deref());
                RequiredField::new(key, dom::control_value(el))
            })
            .collect();
        self.adopt_existing(&fields, &inputs);
        let report = validate(&inputs);

        for (position, el) in fields.iter().enumerate() {
            let color = if report.verdict_at(position) == Some(Verdict::Blank) {
                self.config.error_color.as_str()
            } else {
                self.config.default_border_color.as_str()
            };
            dom::set_style(el, "border-color", Some(color));
        }

        for op in self.ledger.reconcile(&report) {
            match op {
                AnnotationOp::Attach { key, field } | AnnotationOp::Refresh { key, field } => {
                    if let Err(e) = self.annotate(key, &fields[field]) {
                        log::warn!("error annotation not shown: {e}");
                    }
                }
                AnnotationOp::Detach { key } => {
                    if let Some(note) = self.notes.remove(&key) {
                        note.remove();
                    }
                }
            }
        }

        report
    }

    /// Take over annotations the page markup already placed after a field,
    /// so they are reused or removed instead of duplicated.
    fn adopt_existing(&mut self, fields: &[Element], inputs: &[RequiredField]) {
        for (el, input) in fields.iter().zip(inputs) {
            if self.ledger.is_annotated(&input.key) {
                continue;
            }
            let Some(sibling) = el.next_element_sibling() else {
                continue;
            };
            if !has_class_token(&sibling.class_name(), &self.config.annotation_class)
                || self.notes.values().any(|note| note == &sibling)
            {
                continue;
            }
            if self.ledger.adopt(input.key.clone()) {
                log::debug!("adopted existing annotation for {}", input.key.as_str());
                self.notes.insert(input.key.clone(), sibling);
            }
        }
    }

    /// Ensure `key` has exactly one annotation, placed right after `field`.
    fn annotate(&mut self, key: FieldKey, field: &Element) -> Result<(), BehaviorError> {
        let note = match self.notes.get(&key) {
            Some(note) => note.clone(),
            None => {
                let note = dom::create(&self.document, "div", &self.config.annotation_class)?;
                note.set_attribute("style", &self.config.annotation_style())
                    .map_err(BehaviorError::dom("setAttribute"))?;
                self.notes.insert(key, note.clone());
                note
            }
        };
        if !note.is_connected() {
            field
                .insert_adjacent_element("afterend", &note)
                .map_err(BehaviorError::dom("insertAdjacentElement"))?;
        }
        note.set_text_content(Some(&self.config.field_message));
        Ok(())
    }
}
