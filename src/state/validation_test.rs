use super::*;

fn field(name: &str, value: &str) -> RequiredField {
    RequiredField::new(FieldKey::for_field(0, None, Some(name)), value)
}

// =============================================================
// Presence checks
// =============================================================

#[test]
fn is_blank_treats_whitespace_as_empty() {
    assert!(is_blank(""));
    assert!(is_blank("   "));
    assert!(is_blank("\t\n "));
    assert!(!is_blank(" a "));
}

#[test]
fn is_blank_strips_byte_order_mark_like_browser_trim() {
    assert!(is_blank("\u{feff}"));
    assert!(is_blank(" \u{feff}\n"));
    assert!(!is_blank("\u{feff}x"));
}

#[test]
fn all_filled_is_valid_without_annotations() {
    let report = validate(&[field("title", "Hello"), field("intro", "  text  ")]);
    assert!(report.is_valid());
    assert_eq!(report.blank_count(), 0);

    let mut ledger = AnnotationLedger::default();
    assert!(ledger.reconcile(&report).is_empty());
    assert!(ledger.is_empty());
}

#[test]
fn no_required_fields_is_valid() {
    let report = validate(&[]);
    assert!(report.is_valid());
}

#[test]
fn name_blank_email_filled_blocks_and_annotates_only_name() {
    let name = field("name", "");
    let email = field("email", "a@b.com");
    let report = validate(&[name.clone(), email.clone()]);

    assert!(!report.is_valid());
    assert_eq!(report.verdict_at(0), Some(Verdict::Blank));
    assert_eq!(report.verdict_at(1), Some(Verdict::Filled));

    let mut ledger = AnnotationLedger::default();
    let ops = ledger.reconcile(&report);
    assert_eq!(ops, vec![AnnotationOp::Attach { key: name.key.clone(), field: 0 }]);
    assert!(ledger.is_annotated(&name.key));
    assert!(!ledger.is_annotated(&email.key));
}

#[test]
fn whitespace_only_value_is_blank() {
    let report = validate(&[field("detail", "   ")]);
    assert!(!report.is_valid());
    assert_eq!(report.blank_count(), 1);
}

// =============================================================
// Annotation reconciliation
// =============================================================

#[test]
fn repeated_failure_refreshes_instead_of_duplicating() {
    let mut ledger = AnnotationLedger::default();
    let report = validate(&[field("title", "")]);

    let first = ledger.reconcile(&report);
    let second = ledger.reconcile(&report);

    assert!(matches!(first.as_slice(), [AnnotationOp::Attach { .. }]));
    assert!(matches!(second.as_slice(), [AnnotationOp::Refresh { .. }]));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn corrected_field_detaches_its_annotation() {
    let mut ledger = AnnotationLedger::default();
    ledger.reconcile(&validate(&[field("title", ""), field("intro", "")]));
    assert_eq!(ledger.len(), 2);

    let ops = ledger.reconcile(&validate(&[field("title", "Fixed"), field("intro", "")]));
    assert_eq!(
        ops,
        vec![
            AnnotationOp::Detach { key: field("title", "").key },
            AnnotationOp::Refresh { key: field("intro", "").key, field: 1 },
        ]
    );
    assert_eq!(ledger.len(), 1);
}

#[test]
fn filled_field_without_annotation_emits_nothing() {
    let mut ledger = AnnotationLedger::default();
    let ops = ledger.reconcile(&validate(&[field("title", "x")]));
    assert!(ops.is_empty());
}

#[test]
fn vanished_field_annotation_is_detached() {
    let mut ledger = AnnotationLedger::default();
    ledger.reconcile(&validate(&[field("title", ""), field("intro", "")]));

    let ops = ledger.reconcile(&validate(&[field("title", "")]));
    assert_eq!(
        ops,
        vec![
            AnnotationOp::Refresh { key: field("title", "").key, field: 0 },
            AnnotationOp::Detach { key: field("intro", "").key },
        ]
    );
    assert_eq!(ledger.len(), 1);
}

#[test]
fn shared_key_gets_single_annotation_anchored_at_first_blank() {
    let key = FieldKey::for_field(0, None, Some("choice"));
    let report = validate(&[RequiredField::new(key.clone(), "a"), RequiredField::new(key.clone(), " ")]);

    let mut ledger = AnnotationLedger::default();
    let ops = ledger.reconcile(&report);
    assert_eq!(ops, vec![AnnotationOp::Attach { key, field: 1 }]);
    assert_eq!(ledger.len(), 1);
}

// =============================================================
// FieldKey
// =============================================================

#[test]
fn field_key_prefers_id_then_name_then_position() {
    assert_eq!(FieldKey::for_field(3, Some("title"), Some("t")).as_str(), "id:title");
    assert_eq!(FieldKey::for_field(3, None, Some("t")).as_str(), "name:t");
    assert_eq!(FieldKey::for_field(3, Some(""), Some(" ")).as_str(), "pos:3");
    assert_eq!(FieldKey::for_field(3, None, None).as_str(), "pos:3");
}

#[test]
fn id_and_name_keys_do_not_collide() {
    assert_ne!(FieldKey::for_field(0, Some("x"), None), FieldKey::for_field(0, None, Some("x")));
}

// =============================================================
// Annotations already in the markup
// =============================================================

#[test]
fn has_class_token_matches_whole_tokens_only() {
    assert!(has_class_token("error-message", "error-message"));
    assert!(has_class_token("hint  error-message small", "error-message"));
    assert!(!has_class_token("error-messages", "error-message"));
    assert!(!has_class_token("", "error-message"));
    assert!(!has_class_token("error-message", ""));
}

#[test]
fn adopted_annotation_is_refreshed_not_duplicated() {
    let title = field("title", "");
    let mut ledger = AnnotationLedger::default();
    assert!(ledger.adopt(title.key.clone()));

    let ops = ledger.reconcile(&validate(&[title.clone()]));
    assert_eq!(ops, vec![AnnotationOp::Refresh { key: title.key, field: 0 }]);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn adopted_annotation_is_detached_once_field_is_filled() {
    let title = field("title", "Hello");
    let mut ledger = AnnotationLedger::default();
    ledger.adopt(title.key.clone());

    let ops = ledger.reconcile(&validate(&[title.clone()]));
    assert_eq!(ops, vec![AnnotationOp::Detach { key: title.key }]);
    assert!(ledger.is_empty());
}

#[test]
fn adopt_refuses_already_tracked_key() {
    let mut ledger = AnnotationLedger::default();
    ledger.reconcile(&validate(&[field("title", "")]));
    assert!(!ledger.adopt(field("title", "").key));
    assert_eq!(ledger.len(), 1);
}
