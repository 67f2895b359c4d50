//! Light/dark theme view state.
//!
//! The dark flag is owned here and toggled explicitly; the body marker class
//! and color overrides are derived from it instead of being read back from
//! the DOM.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme state for one page view. Starts light and is never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
    activations: u32,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        self.theme = self.theme.flipped();
        self.activations = self.activations.saturating_add(1);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Whether the control has been activated at least once.
    pub fn activated(&self) -> bool {
        self.activations > 0
    }

    /// Control label: the state the next activation switches to, or the
    /// configured initial label before the first activation.
    pub fn label<'a>(&self, config: &'a ThemeConfig) -> &'a str {
        if !self.activated() {
            return &config.initial_label;
        }
        match self.theme {
            Theme::Light => &config.to_dark_label,
            Theme::Dark => &config.to_light_label,
        }
    }

    pub fn body_overrides<'a>(&self, config: &'a ThemeConfig) -> BodyOverrides<'a> {
        match self.theme {
            Theme::Light => BodyOverrides { class: &config.body_class, marked: false, background: None, color: None },
            Theme::Dark => BodyOverrides {
                class: &config.body_class,
                marked: true,
                background: Some(&config.dark_background),
                color: Some(&config.dark_text),
            },
        }
    }
}

/// Body styling derived from a [`ThemeState`].
///
/// `None` colors mean the inline override is cleared, restoring the
/// stylesheet's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyOverrides<'a> {
    pub class: &'a str,
    pub marked: bool,
    pub background: Option<&'a str>,
    pub color: Option<&'a str>,
}
