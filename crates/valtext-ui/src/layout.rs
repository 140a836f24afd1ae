//! Rects of the field's decorations, in field-local coordinates.
//!
//! Every query is a pure function of the field size, the configured fonts
//! and two flags: whether the title is showing and whether the field is
//! editing/selected.

use valtext_core::{Rect, Size};

use crate::config::PresentationConfig;

/// Gap between the left decoration icon and the text.
pub const LEFT_ICON_PADDING: f32 = 5.0;
/// Extra vertical room around the text line in the intrinsic height.
pub const TEXT_VERTICAL_PADDING: f32 = 7.0;

#[derive(Clone, Copy, Debug)]
pub struct FieldLayout<'a> {
    pub config: &'a PresentationConfig,
    pub size: Size,
}

impl<'a> FieldLayout<'a> {
    pub fn new(config: &'a PresentationConfig, size: Size) -> Self {
        Self { config, size }
    }

    pub fn title_height(&self) -> f32 {
        self.config.title_font.line_height()
    }

    /// Top strip when visible; parked one strip lower (behind the text) when
    /// hidden so it slides up as it fades in.
    pub fn title_rect(&self, visible: bool) -> Rect {
        let th = self.title_height();
        Rect::new(0.0, if visible { 0.0 } else { th }, self.size.width, th)
    }

    pub fn underline_rect(&self, emphasized: bool) -> Rect {
        let h = if emphasized {
            self.config.selected_line_height()
        } else {
            self.config.line_height()
        };
        Rect::new(0.0, self.size.height - h, self.size.width, h)
    }

    /// Below the field's own bounds; callers must not clip to the bounds.
    pub fn error_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.size.height,
            self.size.width,
            self.config.error_font.line_height(),
        )
    }

    fn text_strip(&self) -> Rect {
        let th = self.title_height();
        let h = (self.size.height - th - self.config.selected_line_height()).max(0.0);
        Rect::new(0.0, th, self.size.width, h)
    }

    fn icon_side(&self) -> f32 {
        self.text_strip().h.min(self.size.width / 2.0).max(0.0)
    }

    pub fn left_icon_rect(&self) -> Option<Rect> {
        self.config.left_icon.as_ref()?;
        let strip = self.text_strip();
        let side = self.icon_side();
        Some(Rect::new(0.0, strip.y, side, side))
    }

    /// Trailing slot for the success/error icon. Always reserved so the text
    /// does not jump when an icon appears.
    pub fn status_icon_rect(&self) -> Rect {
        let strip = self.text_strip();
        let side = self.icon_side();
        Rect::new(self.size.width - side, strip.y, side, side)
    }

    /// Where the editable text (and caret) lives.
    ///
    /// A left icon occupies its own square at `x = 0`; the text then starts
    /// [`LEFT_ICON_PADDING`] past the icon's right edge, so it shifts by
    /// `icon.w + LEFT_ICON_PADDING` relative to an undecorated field.
    pub fn text_input_rect(&self) -> Rect {
        let strip = self.text_strip();
        let left = match self.left_icon_rect() {
            Some(icon) => icon.right() + LEFT_ICON_PADDING,
            None => 0.0,
        };
        let right = self.status_icon_rect().x;
        Rect::new(left, strip.y, (right - left).max(0.0), strip.h)
    }

    pub fn placeholder_rect(&self) -> Rect {
        self.text_input_rect()
    }

    pub fn intrinsic_size(&self) -> Size {
        Size {
            width: self.size.width,
            height: self.title_height()
                + self.config.text_font.line_height()
                + TEXT_VERTICAL_PADDING,
        }
    }
}
