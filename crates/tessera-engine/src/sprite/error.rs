use std::fmt;

use super::TemplateId;

/// A batch refused to grow past its configured capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    TemplateCapacity { max: usize },
    InstanceCapacity { max: usize },
    UnknownTemplate(TemplateId),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::TemplateCapacity { max } => write!(f, "batch template capacity ({max}) exceeded"),
            BatchError::InstanceCapacity { max } => write!(f, "batch instance capacity ({max}) exceeded"),
            BatchError::UnknownTemplate(id) => write!(f, "template {} does not belong to this batch", id.index()),
        }
    }
}

impl std::error::Error for BatchError {}
