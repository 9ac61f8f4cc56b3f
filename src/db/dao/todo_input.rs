use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::db::entities::todo;

/// Creation payload. Fields default when absent so a client-supplied `id`
/// can be told apart from an unset one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTodo {
    pub id: i32,
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Field-level merge over `existing`. An empty title counts as absent.
    /// `updated_at` never goes below `created_at`, even with a skewed clock.
    pub fn merge(self, existing: &todo::Model, now: DateTimeWithTimeZone) -> todo::Model {
        let mut merged = existing.clone();
        if let Some(title) = self.title.filter(|title| !title.is_empty()) {
            merged.title = title;
        }
        if let Some(completed) = self.completed {
            merged.completed = completed;
        }
        merged.updated_at = now.max(existing.created_at);
        merged
    }
}
