use std::fmt;

use uuid::Uuid;

/// A per-item problem reported alongside an otherwise successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub item_id: Uuid,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(item_id: Uuid, message: impl Into<String>) -> Self {
        Self {
            item_id,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_id, self.message)
    }
}
