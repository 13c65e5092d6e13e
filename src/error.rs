//! Error type shared by the controller and its host collaborators.

/// Failures surfaced by the host environment.
///
/// None of these are recovered from. They propagate to the entry point,
/// which logs them and stops.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("host api unavailable: {0}")]
    Unavailable(&'static str),
    #[error("preference store error: {0}")]
    Storage(String),
    #[error("document error: {0}")]
    Dom(String),
    #[error("invalid theme: {0:?}")]
    InvalidTheme(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;
