//! Behavior configuration.
//!
//! Defaults reproduce the admin pages' stock look and wording. A page can
//! override any subset through a JSON island:
//!
//! ```html
//! <script type="application/json" id="page-behaviors-config">
//!   { "theme": { "initial_label": "Dark Mode" } }
//! </script>
//! ```
//!
//! Missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::BehaviorError;

/// Element id of the optional JSON config island.
pub const CONFIG_ISLAND_ID: &str = "page-behaviors-config";

pub const DEFAULT_ERROR_COLOR: &str = "#dc3545";
pub const DEFAULT_BORDER_COLOR: &str = "#ced4da";
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub image_preview: ImagePreviewConfig,
    pub delete_confirm: DeleteConfirmConfig,
    pub form_validation: FormValidationConfig,
    pub theme: ThemeConfig,
}

impl BehaviorConfig {
    /// Parse a (possibly partial) JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Config`] if `raw` is not valid JSON or a key
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Load config from the page's JSON island, falling back to defaults.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(island) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ISLAND_ID))
            else {
                return Self::default();
            };
            let raw = island.text_content().unwrap_or_default();
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring #{CONFIG_ISLAND_ID}: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

/// Upload input preview settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImagePreviewConfig {
    pub enabled: bool,
    pub input_id: String,
    pub container_class: String,
    pub label: String,
    pub alt: String,
    pub max_width_px: u32,
    pub border_radius_px: u32,
    pub margin_top_px: u32,
    pub upload_hints: UploadHintsConfig,
}

impl Default for ImagePreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            input_id: "image".to_owned(),
            container_class: "image-preview".to_owned(),
            label: "图片预览:".to_owned(),
            alt: "图片预览".to_owned(),
            max_width_px: 200,
            border_radius_px: 4,
            margin_top_px: 10,
            upload_hints: UploadHintsConfig::default(),
        }
    }
}

/// Limits the server enforces on upload. Used for log hints only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UploadHintsConfig {
    pub allowed_extensions: Vec<String>,
    pub max_bytes: u64,
}

impl Default for UploadHintsConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: ["png", "jpg", "jpeg", "gif"].map(str::to_owned).to_vec(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeleteConfirmConfig {
    pub enabled: bool,
    pub selector: String,
    pub prompt: String,
}

impl Default for DeleteConfirmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            selector: ".btn-icon.delete".to_owned(),
            prompt: "确定要删除这项内容吗？此操作无法撤销。".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormValidationConfig {
    pub enabled: bool,
    pub form_selector: String,
    pub required_selector: String,
    pub field_message: String,
    pub alert_message: String,
    pub error_color: String,
    pub default_border_color: String,
    pub annotation_class: String,
    pub annotation_font_size: String,
    pub annotation_margin_top: String,
}

impl Default for FormValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            form_selector: "form".to_owned(),
            required_selector: "[required]".to_owned(),
            field_message: "此字段为必填项".to_owned(),
            alert_message: "请填写所有必填字段！".to_owned(),
            error_color: DEFAULT_ERROR_COLOR.to_owned(),
            default_border_color: DEFAULT_BORDER_COLOR.to_owned(),
            annotation_class: "error-message".to_owned(),
            annotation_font_size: "0.9rem".to_owned(),
            annotation_margin_top: "0.25rem".to_owned(),
        }
    }
}

impl FormValidationConfig {
    /// Inline style applied to a freshly created error annotation.
    pub fn annotation_style(&self) -> String {
        format!(
            "color: {}; font-size: {}; margin-top: {};",
            self.error_color, self.annotation_font_size, self.annotation_margin_top
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub enabled: bool,
    pub body_class: String,
    pub dark_background: String,
    pub dark_text: String,
    /// Shown until the first activation. Does not describe the next state.
    pub initial_label: String,
    pub to_dark_label: String,
    pub to_light_label: String,
    pub control_class: String,
    pub bottom_px: u32,
    pub right_px: u32,
    pub z_index: i32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            body_class: "dark-mode".to_owned(),
            dark_background: "#343a40".to_owned(),
            dark_text: "#f8f9fa".to_owned(),
            initial_label: "Change Theme".to_owned(),
            to_dark_label: "Dark Mode".to_owned(),
            to_light_label: "Light Mode".to_owned(),
            control_class: "btn secondary".to_owned(),
            bottom_px: 20,
            right_px: 20,
            z_index: 1000,
        }
    }
}

impl ThemeConfig {
    /// Inline style pinning the toggle control to the viewport corner.
    pub fn control_style(&self) -> String {
        format!(
            "position: fixed; bottom: {}px; right: {}px; z-index: {};",
            self.bottom_px, self.right_px, self.z_index
        )
    }
}
