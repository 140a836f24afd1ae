/// Line spacing applied on top of the point size, matching the shaping
/// metrics used for single-line text (`px * 1.3`).
pub const LINE_HEIGHT_FACTOR: f32 = 1.3;

pub const SYSTEM_FONT_FAMILY: &str = "system-ui";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Font::system(17.0)
    }
}

impl Font {
    pub fn system(size: f32) -> Self {
        Self {
            family: SYSTEM_FONT_FAMILY.to_string(),
            size,
        }
    }

    pub fn named(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.size.max(0.0) * LINE_HEIGHT_FACTOR
    }
}
