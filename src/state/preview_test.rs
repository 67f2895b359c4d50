use super::*;

#[test]
fn image_style_uses_configured_bounds() {
    assert_eq!(
        image_style(&ImagePreviewConfig::default()),
        "max-width: 200px; border-radius: 4px; margin-top: 10px;"
    );
}

#[test]
fn is_data_url_accepts_reader_output() {
    assert!(is_data_url("data:image/png;base64,iVBORw0KGgo="));
    assert!(is_data_url("DATA:image/gif;base64,R0lGOD"));
}

#[test]
fn is_data_url_accepts_bare_scheme_from_empty_file() {
    assert!(is_data_url("data:"));
}

#[test]
fn is_data_url_rejects_other_values() {
    assert!(!is_data_url(""));
    assert!(!is_data_url("data"));
    assert!(!is_data_url("blob:https://example.com/1"));
    assert!(!is_data_url("/static/uploads/a.png"));
}

#[test]
fn accepted_upload_has_no_notices() {
    let config = UploadHintsConfig::default();
    let hints = UploadHints::new(&config);
    assert!(hints.check("cover.PNG", 1024).is_empty());
    assert!(hints.check("photo.final.jpeg", 0).is_empty());
}

#[test]
fn unsupported_extension_is_reported() {
    let config = UploadHintsConfig::default();
    let notices = UploadHints::new(&config).check("diagram.webp", 10);
    assert_eq!(notices, vec![UploadNotice::UnsupportedExtension { extension: Some("webp".to_owned()) }]);
    assert_eq!(notices[0].to_string(), "extension .webp will be rejected on upload");
}

#[test]
fn missing_extension_is_reported() {
    let config = UploadHintsConfig::default();
    assert_eq!(
        UploadHints::new(&config).check("README", 10),
        vec![UploadNotice::UnsupportedExtension { extension: None }]
    );
    assert_eq!(
        UploadHints::new(&config).check("trailing.", 10),
        vec![UploadNotice::UnsupportedExtension { extension: None }]
    );
}

#[test]
fn oversize_file_is_reported_alongside_extension() {
    let config = UploadHintsConfig { max_bytes: 100, ..UploadHintsConfig::default() };
    let notices = UploadHints::new(&config).check("big.bmp", 101);
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[1], UploadNotice::TooLarge { size: 101, max: 100 });
    assert_eq!(notices[1].to_string(), "101 bytes exceeds upload limit of 100 bytes");
}

#[test]
fn size_at_limit_is_accepted() {
    let config = UploadHintsConfig::default();
    assert!(UploadHints::new(&config).check("a.gif", config.max_bytes).is_empty());
}

// =============================================================
// ReadOutcome
// =============================================================

#[test]
fn read_outcome_previews_data_url() {
    assert_eq!(
        ReadOutcome::from_result(Some("data:image/png;base64,AAAA".to_owned())),
        ReadOutcome::Preview("data:image/png;base64,AAAA".to_owned())
    );
    assert_eq!(ReadOutcome::from_result(Some("data:".to_owned())), ReadOutcome::Preview("data:".to_owned()));
}

#[test]
fn read_outcome_without_result_is_failure() {
    assert_eq!(ReadOutcome::from_result(None), ReadOutcome::Failed);
}

#[test]
fn read_outcome_other_text_is_unrenderable() {
    assert_eq!(ReadOutcome::from_result(Some("hello".to_owned())), ReadOutcome::Unrenderable);
}
