use valtext_core::{Color, ImageRef};

use crate::config::PresentationConfig;
use crate::textfield::Focus;

/// Outcome of the last validation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validity {
    /// Nothing has been typed yet; the predicate has never run.
    #[default]
    Ready,
    Valid,
    Invalid,
}

impl Validity {
    pub fn from_outcome(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    /// Only `Valid` counts toward submission; `Ready` does not.
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }
}

/// Inputs the decorations are derived from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldState {
    pub text: String,
    pub focus: Focus,
    pub validity: Validity,
    pub enabled: bool,
}

impl FieldState {
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_active()
    }
}

/// Everything paint and layout need to know, derived from [`FieldState`]
/// and [`PresentationConfig`] with no memory of earlier states.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    pub title_visible: bool,
    pub title_alpha: f32,
    pub title_text: String,
    pub title_color: Color,
    pub underline_color: Color,
    /// Thick underline (editing or selected).
    pub underline_emphasized: bool,
    pub error_visible: bool,
    pub error_text: Option<String>,
    pub status_icon: Option<ImageRef>,
    pub placeholder_visible: bool,
    pub placeholder_color: Color,
}

impl VisualState {
    pub fn derive(state: &FieldState, config: &PresentationConfig) -> Self {
        let has_text = state.has_text();

        let title_visible = config.use_title && (config.show_title_always || has_text);

        // An empty field never shows as erroring, whatever the predicate says.
        let error_visible = state.validity == Validity::Invalid && has_text;

        let status_icon = match state.validity {
            _ if !has_text => None,
            Validity::Ready => None,
            Validity::Valid => Some(config.resolved_success_icon()),
            Validity::Invalid => Some(config.resolved_error_icon()),
        };

        let underline_color = if !state.enabled {
            config.disabled_color
        } else if error_visible {
            config.error_color
        } else if state.is_focused() {
            config.completed_color
        } else {
            config.base_color
        };

        // An erroring field never keeps the completed title.
        let (title_text, title_color) = if error_visible {
            (
                config
                    .error_message
                    .clone()
                    .unwrap_or_else(|| config.title_text.clone()),
                config.error_color,
            )
        } else {
            (config.title_text.clone(), config.title_color)
        };

        let placeholder_color = if state.enabled {
            config.placeholder_color
        } else {
            config.disabled_color
        };

        VisualState {
            title_visible,
            title_alpha: if title_visible { 1.0 } else { 0.0 },
            title_text,
            title_color,
            underline_color,
            underline_emphasized: state.is_focused(),
            error_visible,
            error_text: if error_visible {
                config.error_message.clone()
            } else {
                None
            },
            status_icon,
            placeholder_visible: !has_text && config.placeholder.is_some(),
            placeholder_color,
        }
    }
}
