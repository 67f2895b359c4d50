//! Image preview settings and upload hints.
//!
//! The preview itself never validates the file: anything the browser can
//! read is shown. [`UploadHints`] only reports what the server would refuse
//! so it can be logged.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::config::{ImagePreviewConfig, UploadHintsConfig};

/// Inline style for the preview `<img>`.
pub fn image_style(config: &ImagePreviewConfig) -> String {
    format!(
        "max-width: {}px; border-radius: {}px; margin-top: {}px;",
        config.max_width_px, config.border_radius_px, config.margin_top_px
    )
}

/// `FileReader::readAsDataURL` results always carry the `data:` scheme. An
/// empty untyped file yields a bare `data:`, which still gets a preview.
pub fn is_data_url(src: &str) -> bool {
    src.get(..5).is_some_and(|s| s.eq_ignore_ascii_case("data:"))
}

/// How a finished `FileReader` read should be handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Render this data URL.
    Preview(String),
    /// The read completed with something other than a data URL.
    Unrenderable,
    /// The read failed or was aborted; the reader holds no result.
    Failed,
}

impl ReadOutcome {
    /// Classify `reader.result` as seen from the `loadend` handler.
    pub fn from_result(result: Option<String>) -> Self {
        match result {
            Some(src) if is_data_url(&src) => Self::Preview(src),
            Some(_) => Self::Unrenderable,
            None => Self::Failed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadNotice {
    UnsupportedExtension { extension: Option<String> },
    TooLarge { size: u64, max: u64 },
}

impl std::fmt::Display for UploadNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedExtension { extension: Some(ext) } => {
                write!(f, "extension .{ext} will be rejected on upload")
            }
            Self::UnsupportedExtension { extension: None } => {
                write!(f, "file without extension will be rejected on upload")
            }
            Self::TooLarge { size, max } => write!(f, "{size} bytes exceeds upload limit of {max} bytes"),
        }
    }
}

pub struct UploadHints<'a> {
    config: &'a UploadHintsConfig,
}

impl<'a> UploadHints<'a> {
    pub fn new(config: &'a UploadHintsConfig) -> Self {
        Self { config }
    }

    /// Notices for a selected file, empty when the upload would be accepted.
    pub fn check(&self, file_name: &str, size: u64) -> Vec<UploadNotice> {
        let mut notices = Vec::new();
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty());
        let allowed = extension
            .as_deref()
            .is_some_and(|ext| self.config.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(ext)));
        if !allowed {
            notices.push(UploadNotice::UnsupportedExtension { extension });
        }
        if size > self.config.max_bytes {
            notices.push(UploadNotice::TooLarge { size, max: self.config.max_bytes });
        }
        notices
    }
}
