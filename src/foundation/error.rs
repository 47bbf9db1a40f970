/// Convenience result type used across wavepaths.
pub type WavepathsResult<T> = Result<T, WavepathsError>;

/// Error taxonomy of configuration, rendering and output.
#[derive(thiserror::Error, Debug)]
pub enum WavepathsError {
    /// Invalid configuration or arguments; raised at load time, never mid-animation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A renderer failed to produce a frame.
    #[error("render error: {0}")]
    Render(String),

    /// No drawable surface could be created for the requested viewport.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem errors while reading configs or writing output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavepathsError {
    /// Build a [`WavepathsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WavepathsError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WavepathsError::SurfaceUnavailable`] value.
    pub fn surface_unavailable(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`WavepathsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Decorative failures that should leave the page untouched rather than surface an error.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::SurfaceUnavailable(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
