use crate::shared::error::MarkupError;

/// Kind of section a toggle opens (`data-dd-type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionCategory {
    /// The dumped object itself.
    Type,
    /// Its attribute list.
    Attr,
    /// Its function list.
    Func,
}

impl SectionCategory {
    pub fn from_code(code: &str) -> Result<Self, MarkupError> {
        match code {
            "type" => Ok(SectionCategory::Type),
            "attr" => Ok(SectionCategory::Attr),
            "func" => Ok(SectionCategory::Func),
            other => Err(MarkupError::UnknownCategory(other.to_string())),
        }
    }
}
