use valtext_core::{BundledIcon, Color, Font, ImageRef};

/// Host supplied look of a [`ValidationField`](crate::ValidationField).
///
/// Built with chained setters:
///
/// ```rust
/// use valtext_core::{Color, ImageRef};
/// use valtext_ui::PresentationConfig;
///
/// let cfg = PresentationConfig::new()
///     .title("Password")
///     .placeholder("At least 9 characters")
///     .error_message("Too short")
///     .success_icon(ImageRef::named("thumb_up"))
///     .error_icon(ImageRef::named("thumb_down"))
///     .secure_entry(true);
/// assert_eq!(cfg.completed_color, Color::COMPLETED);
/// ```
///
/// With the `serde` feature it also deserializes from a theme file; every key
/// is optional and colors are `#RRGGBB` strings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PresentationConfig {
    pub title_text: String,
    pub title_font: Font,
    pub title_color: Color,

    pub error_message: Option<String>,
    pub error_font: Font,
    pub error_color: Color,

    /// Underline at rest.
    pub base_color: Color,
    /// Underline while editing or selected.
    pub completed_color: Color,
    /// Underline and placeholder while the field is disabled.
    pub disabled_color: Color,

    pub placeholder: Option<String>,
    pub placeholder_color: Color,
    /// Falls back to `text_font`.
    pub placeholder_font: Option<Font>,

    pub text_font: Font,
    pub text_color: Color,

    pub success_icon: Option<ImageRef>,
    pub error_icon: Option<ImageRef>,
    pub left_icon: Option<ImageRef>,

    pub show_title_always: bool,
    pub use_title: bool,
    pub secure_entry: bool,
    /// Device pixels per unit; the hairline underline is two pixels tall.
    pub scale: f32,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            title_text: "Completed!".to_string(),
            title_font: Font::system(13.0),
            title_color: Color::COMPLETED,
            error_message: None,
            error_font: Font::system(13.0),
            error_color: Color::ERROR,
            base_color: Color::DARK_GRAY,
            completed_color: Color::COMPLETED,
            disabled_color: Color::DISABLED,
            placeholder: None,
            placeholder_color: Color::LIGHT_GRAY,
            placeholder_font: None,
            text_font: Font::system(17.0),
            text_color: Color::BLACK,
            success_icon: None,
            error_icon: None,
            left_icon: None,
            show_title_always: false,
            use_title: true,
            secure_entry: false,
            scale: 2.0,
        }
    }
}

impl PresentationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title_text = text.into();
        self
    }
    pub fn title_font(mut self, font: Font) -> Self {
        self.title_font = font;
        self
    }
    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
    pub fn error_font(mut self, font: Font) -> Self {
        self.error_font = font;
        self
    }
    pub fn error_color(mut self, color: Color) -> Self {
        self.error_color = color;
        self
    }
    pub fn base_color(mut self, color: Color) -> Self {
        self.base_color = color;
        self
    }
    pub fn completed_color(mut self, color: Color) -> Self {
        self.completed_color = color;
        self
    }
    pub fn disabled_color(mut self, color: Color) -> Self {
        self.disabled_color = color;
        self
    }
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
    pub fn placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }
    pub fn placeholder_font(mut self, font: Font) -> Self {
        self.placeholder_font = Some(font);
        self
    }
    pub fn text_font(mut self, font: Font) -> Self {
        self.text_font = font;
        self
    }
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }
    pub fn success_icon(mut self, icon: ImageRef) -> Self {
        self.success_icon = Some(icon);
        self
    }
    pub fn error_icon(mut self, icon: ImageRef) -> Self {
        self.error_icon = Some(icon);
        self
    }
    pub fn left_icon(mut self, icon: ImageRef) -> Self {
        self.left_icon = Some(icon);
        self
    }
    pub fn show_title_always(mut self, on: bool) -> Self {
        self.show_title_always = on;
        self
    }
    pub fn use_title(mut self, on: bool) -> Self {
        self.use_title = on;
        self
    }
    pub fn secure_entry(mut self, on: bool) -> Self {
        self.secure_entry = on;
        self
    }
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Configured success icon, or the bundled one.
    pub fn resolved_success_icon(&self) -> ImageRef {
        self.success_icon
            .clone()
            .unwrap_or(ImageRef::Bundled(BundledIcon::Success))
    }

    /// Configured error icon, or the bundled one.
    pub fn resolved_error_icon(&self) -> ImageRef {
        self.error_icon
            .clone()
            .unwrap_or(ImageRef::Bundled(BundledIcon::Error))
    }

    pub fn resolved_placeholder_font(&self) -> &Font {
        self.placeholder_font.as_ref().unwrap_or(&self.text_font)
    }

    /// Thickness of the resting underline: two device pixels.
    pub fn line_height(&self) -> f32 {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        2.0 / scale
    }

    pub fn selected_line_height(&self) -> f32 {
        2.0 * self.line_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_icons_fall_back_to_bundled() {
        let cfg = PresentationConfig::new();
        assert_eq!(
            cfg.resolved_success_icon(),
            ImageRef::Bundled(BundledIcon::Success)
        );
        assert_eq!(cfg.resolved_error_icon(), ImageRef::Bundled(BundledIcon::Error));

        let cfg = cfg.error_icon(ImageRef::named("thumb_down"));
        assert_eq!(cfg.resolved_error_icon(), ImageRef::named("thumb_down"));
    }

    #[test]
    fn underline_thickness_doubles_when_selected() {
        let cfg = PresentationConfig::new();
        assert_eq!(cfg.line_height(), 1.0);
        assert_eq!(cfg.selected_line_height(), 2.0);

        let cfg = cfg.scale(0.0);
        assert_eq!(cfg.line_height(), 2.0);
    }

    #[test]
    fn placeholder_font_defaults_to_text_font() {
        let cfg = PresentationConfig::new().text_font(Font::system(20.0));
        assert_eq!(cfg.resolved_placeholder_font().size, 20.0);
        let cfg = cfg.placeholder_font(Font::system(12.0));
        assert_eq!(cfg.resolved_placeholder_font().size, 12.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_theme() {
        let json = r##"{
            "title_text": "Email",
            "error_message": "Enter a valid address",
            "error_color": "#FF0000",
            "success_icon": "success",
            "error_icon": "bundled:error",
            "title_font": { "size": 11.0 },
            "show_title_always": true
        }"##;
        let cfg: PresentationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.title_text, "Email");
        assert_eq!(cfg.error_color, Color(255, 0, 0, 255));
        assert_eq!(cfg.success_icon, Some(ImageRef::named("success")));
        assert_eq!(cfg.error_icon, Some(ImageRef::Bundled(BundledIcon::Error)));
        assert_eq!(cfg.title_font.size, 11.0);
        assert_eq!(cfg.title_font.family, valtext_core::SYSTEM_FONT_FAMILY);
        assert!(cfg.show_title_always);
        assert!(cfg.use_title);
        assert_eq!(cfg.base_color, Color::DARK_GRAY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_bad_color() {
        let err = serde_json::from_str::<PresentationConfig>(r#"{ "base_color": "blue" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid hex color"));
    }
}
