use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Images shipped with the widget, used whenever a host leaves an icon unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BundledIcon {
    Success,
    Error,
}

impl BundledIcon {
    pub fn name(self) -> &'static str {
        match self {
            BundledIcon::Success => "success",
            BundledIcon::Error => "error",
        }
    }
}

impl FromStr for BundledIcon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(BundledIcon::Success),
            "error" => Ok(BundledIcon::Error),
            other => Err(Error::UnknownBundledIcon(other.to_string())),
        }
    }
}

/// Reference to an image the host knows how to draw.
///
/// The widget never decodes pixels; it only passes references through to the
/// scene so the rendering backend can resolve them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageRef {
    /// Asset looked up by name in the host's catalog.
    Named(String),
    Bundled(BundledIcon),
}

impl ImageRef {
    pub fn named(name: impl Into<String>) -> Self {
        ImageRef::Named(name.into())
    }
}

impl From<BundledIcon> for ImageRef {
    fn from(icon: BundledIcon) -> Self {
        ImageRef::Bundled(icon)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Named(n) => f.write_str(n),
            ImageRef::Bundled(b) => write!(f, "bundled:{}", b.name()),
        }
    }
}

impl FromStr for ImageRef {
    type Err = Error;

    /// `bundled:<name>` selects a bundled icon, anything else is a named asset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("bundled:") {
            Some(name) => Ok(ImageRef::Bundled(name.parse()?)),
            None => Ok(ImageRef::Named(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ImageRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ImageRef {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
