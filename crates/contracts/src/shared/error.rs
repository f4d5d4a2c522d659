use thiserror::Error;

/// A data attribute carried a value the browser layer does not understand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("unknown section category `{0}`")]
    UnknownCategory(String),
    #[error("invalid object depth `{0}`")]
    InvalidDepth(String),
    #[error("unknown toolbar control `{0}`")]
    UnknownControl(String),
}
