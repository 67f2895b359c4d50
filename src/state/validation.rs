//! Required-field presence checks and error annotation bookkeeping.
//!
//! Validation is presence-only: a field passes when its value has any
//! non-whitespace character. Annotations are tracked per [`FieldKey`] rather
//! than by DOM position, so a field never ends up with two annotations and an
//! annotation never drifts onto a neighbor.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeSet;

/// Stable identity of a required field within its form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldKey(String);

impl FieldKey {
    /// Key a field by its `id`, then its `name`, then its position among the
    /// form's required fields.
    pub fn for_field(position: usize, id: Option<&str>, name: Option<&str>) -> Self {
        let non_empty = |s: &&str| !s.trim().is_empty();
        if let Some(id) = id.filter(non_empty) {
            return Self(format!("id:{id}"));
        }
        if let Some(name) = name.filter(non_empty) {
            return Self(format!("name:{name}"));
        }
        Self(format!("pos:{position}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A required field as read at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiredField {
    pub key: FieldKey,
    pub value: String,
}

impl RequiredField {
    pub fn new(key: FieldKey, value: impl Into<String>) -> Self {
        Self { key, value: value.into() }
    }
}

/// Whitespace here matches the browser's `String.prototype.trim`, which also
/// strips U+FEFF.
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Filled,
    Blank,
}

/// Per-field verdicts for one submission, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    verdicts: Vec<(FieldKey, Verdict)>,
}

impl ValidationReport {
    /// Submission may proceed only when no required field is blank.
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(|(_, v)| *v == Verdict::Filled)
    }

    pub fn verdicts(&self) -> &[(FieldKey, Verdict)] {
        &self.verdicts
    }

    /// Verdict of the field at `position`.
    pub fn verdict_at(&self, position: usize) -> Option<Verdict> {
        self.verdicts.get(position).map(|(_, v)| *v)
    }

    pub fn blank_count(&self) -> usize {
        self.verdicts.iter().filter(|(_, v)| *v == Verdict::Blank).count()
    }

    /// A key is blank when any field sharing it is blank.
    fn key_is_blank(&self, key: &FieldKey) -> bool {
        self.verdicts.iter().any(|(k, v)| k == key && *v == Verdict::Blank)
    }
}

pub fn validate(fields: &[RequiredField]) -> ValidationReport {
    let verdicts = fields
        .iter()
        .map(|f| {
            let verdict = if is_blank(&f.value) { Verdict::Blank } else { Verdict::Filled };
            (f.key.clone(), verdict)
        })
        .collect();
    ValidationReport { verdicts }
}

/// Whether a `class` attribute value contains `class` as a whole token.
pub fn has_class_token(class_attr: &str, class: &str) -> bool {
    !class.is_empty() && class_attr.split_whitespace().any(|token| token == class)
}

/// DOM change needed to bring annotations in line with a report.
///
/// `field` is the position of the field the annotation belongs after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnnotationOp {
    /// Create an annotation for a newly blank field.
    Attach { key: FieldKey, field: usize },
    /// Field is still blank; rewrite the existing annotation.
    Refresh { key: FieldKey, field: usize },
    /// Field is filled (or gone); remove its annotation.
    Detach { key: FieldKey },
}

/// Which fields of one form currently carry an error annotation.
#[derive(Clone, Debug, Default)]
pub struct AnnotationLedger {
    annotated: BTreeSet<FieldKey>,
}

impl AnnotationLedger {
    pub fn is_annotated(&self, key: &FieldKey) -> bool {
        self.annotated.contains(key)
    }

    pub fn len(&self) -> usize {
        self.annotated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotated.is_empty()
    }

    /// Record an annotation already present in the page markup for `key`.
    ///
    /// Returns `false` when the key is already tracked, in which case the
    /// caller must not take over a second element for it.
    pub fn adopt(&mut self, key: FieldKey) -> bool {
        self.annotated.insert(key)
    }

    /// Compute the annotation changes for `report` and record the result.
    ///
    /// Emits at most one op per key. Annotated keys missing from the report
    /// (field removed from the form) are detached last.
    pub fn reconcile(&mut self, report: &ValidationReport) -> Vec<AnnotationOp> {
        let mut ops = Vec::new();
        let mut seen = BTreeSet::new();

        for (position, (key, _)) in report.verdicts.iter().enumerate() {
            if !seen.insert(key.clone()) {
                continue;
            }
            if report.key_is_blank(key) {
                let field = report
                    .verdicts
                    .iter()
                    .position(|(k, v)| k == key && *v == Verdict::Blank)
                    .unwrap_or(position);
                if self.annotated.insert(key.clone()) {
                    ops.push(AnnotationOp::Attach { key: key.clone(), field });
                } else {
                    ops.push(AnnotationOp::Refresh { key: key.clone(), field });
                }
            } else if self.annotated.remove(key) {
                ops.push(AnnotationOp::Detach { key: key.clone() });
            }
        }

        let vanished: Vec<FieldKey> = self.annotated.difference(&seen).cloned().collect();
        for key in vanished {
            self.annotated.remove(&key);
            ops.push(AnnotationOp::Detach { key });
        }

        ops
    }
}
