use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A content-bearing card owned by exactly one column at a time. Which
/// column that is can change while a card is dragged; everything else is
/// edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub column_id: String,
    pub content: String,
}

impl Task {
    pub fn new(column_id: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            column_id,
            content,
        }
    }
}
