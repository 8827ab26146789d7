pub type FrameResult<T> = Result<T, FrameError>;

/// Errors surfaced by the framing pipeline.
///
/// Every variant is recoverable from the caller's point of view: a failed
/// operation reports its message and leaves previously produced state
/// (an earlier normalized photo, an earlier export) untouched.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid file type: {0}")]
    InvalidFileType(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrameError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_file_type(msg: impl Into<String>) -> Self {
        Self::InvalidFileType(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
