use thiserror::Error;

/// Errors from parsing host supplied configuration.
///
/// Widget operations themselves are total; only turning strings into colors
/// or bundled icons can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid hex color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidHexColor(String),
    #[error("unknown bundled icon {0:?}")]
    UnknownBundledIcon(String),
}

pub type Result<T> = std::result::Result<T, Error>;
