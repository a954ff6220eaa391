/// Result alias used across configuration and layout loading.
pub type StackResult<T> = Result<T, StackError>;

/// Error type for the fallible edges of the engine.
///
/// The recompute path never produces one of these: degenerate thresholds are
/// clamped and missing geometry reads as zero. Errors only surface while
/// loading configuration or host layouts.
#[derive(thiserror::Error, Debug)]
pub enum StackError {
    /// Configuration value could not be parsed or is not finite.
    #[error("config error: {0}")]
    Config(String),

    /// Host layout description is unusable.
    #[error("layout error: {0}")]
    Layout(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StackError {
    /// Build a [`StackError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StackError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`StackError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StackError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
