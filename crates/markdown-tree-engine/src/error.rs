/// Errors from the engine's fallible surface, only returned by
/// [`Document::from_bytes`](crate::Document::from_bytes).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
