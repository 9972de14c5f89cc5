use thiserror::Error;

/// Configuration errors raised while building a theme.
///
/// Unknown names are never replaced with a default; the caller gets the
/// offending input back.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown color family `{0}`")]
    UnknownFamily(String),

    #[error("unknown brightness mode `{0}`")]
    UnknownMode(String),

    #[error("unknown text direction `{0}`")]
    UnknownDirection(String),

    #[error("alpha step {0} is not one of 0, 5, 10, 20, ..., 90, 95, 100")]
    UnknownAlphaStep(u8),

    #[error("invalid color `{0}`: expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("invalid theme configuration: {0}")]
    Config(#[from] toml::de::Error),
}
