use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;

use super::{DaoResult, NewTodo, TodoPatch};
use crate::db::entities::todo;

/// Persistence capability behind the todo service.
///
/// Every mutation is a single attempt that either fully applies or leaves
/// the store untouched. Implementations do no validation of their own; ids
/// and titles are checked by the service before a call reaches the store.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Persists a new row stamped with `now` for both timestamps.
    async fn insert(&self, todo: NewTodo, now: DateTimeWithTimeZone) -> DaoResult<todo::Model>;

    async fn find_by_id(&self, id: i32) -> DaoResult<todo::Model>;

    /// All rows ordered by id.
    async fn list(&self) -> DaoResult<Vec<todo::Model>>;

    /// Merges `patch` over the stored row. Fails with `NotFound` when the
    /// row is missing.
    async fn update(
        &self,
        id: i32,
        patch: TodoPatch,
        now: DateTimeWithTimeZone,
    ) -> DaoResult<todo::Model>;

    /// Returns the number of rows removed; zero is not an error.
    async fn delete(&self, id: i32) -> DaoResult<u64>;
}
