//! Category types for the finance ledger
//!
//! Categories group transactions. They are unique by title and are created
//! lazily the first time a transaction refers to them.

use serde::{Deserialize, Serialize};

/// Category identifier
///
/// Assigned by the store on save.
pub type CategoryId = u32;

/// A persisted category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier
    pub id: CategoryId,

    /// Exact title; at most one category exists per title
    pub title: String,
}

/// A category that has not been saved yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub title: String,
}

impl NewCategory {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Attach a store-assigned id, producing the persisted entity
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            title: self.title,
        }
    }
}
