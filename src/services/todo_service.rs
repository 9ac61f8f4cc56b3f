use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::TodoError;
use super::validation::{validate_id, validate_new};
use crate::db::dao::{NewTodo, TodoPatch, TodoStore};
use crate::db::entities::todo;

/// Validates input, then delegates to the store. Nothing reaches the store
/// when validation fails.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, todo: NewTodo) -> Result<todo::Model, TodoError> {
        validate_new(&todo)?;

        match self.store.insert(todo, Utc::now().fixed_offset()).await {
            Ok(created) => {
                info!(todo_id = created.id, "todo created");
                Ok(created)
            }
            Err(err) => {
                warn!(error = %err, "todo create failed");
                Err(err.into())
            }
        }
    }

    pub async fn find(&self, id: i32) -> Result<todo::Model, TodoError> {
        validate_id(id)?;
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<todo::Model>, TodoError> {
        Ok(self.store.list().await?)
    }

    pub async fn update(&self, id: i32, patch: TodoPatch) -> Result<todo::Model, TodoError> {
        validate_id(id)?;

        match self.store.update(id, patch, Utc::now().fixed_offset()).await {
            Ok(updated) => {
                info!(todo_id = id, "todo updated");
                Ok(updated)
            }
            Err(err) => {
                warn!(todo_id = id, error = %err, "todo update failed");
                Err(err.into())
            }
        }
    }

    /// Removing an id that does not exist succeeds.
    pub async fn delete(&self, id: i32) -> Result<(), TodoError> {
        validate_id(id)?;

        match self.store.delete(id).await {
            Ok(removed) => {
                info!(todo_id = id, removed, "todo deleted");
                Ok(())
            }
            Err(err) => {
                warn!(todo_id = id, error = %err, "todo delete failed");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use sea_orm::prelude::DateTimeWithTimeZone;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::TodoService;
    use crate::db::dao::{DaoResult, MemoryTodoDao, NewTodo, TodoDao, TodoPatch, TodoStore};
    use crate::db::entities::todo;
    use crate::services::TodoError;

    /// Counts every call that reaches the wrapped store.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryTodoDao,
        calls: AtomicUsize,
    }

    impl CountingStore {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl TodoStore for CountingStore {
        async fn insert(&self, todo: NewTodo, now: DateTimeWithTimeZone) -> DaoResult<todo::Model> {
            self.hit();
            self.inner.insert(todo, now).await
        }

        async fn find_by_id(&self, id: i32) -> DaoResult<todo::Model> {
            self.hit();
            self.inner.find_by_id(id).await
        }

        async fn list(&self) -> DaoResult<Vec<todo::Model>> {
            self.hit();
            self.inner.list().await
        }

        async fn update(
            &self,
            id: i32,
            patch: TodoPatch,
            now: DateTimeWithTimeZone,
        ) -> DaoResult<todo::Model> {
            self.hit();
            self.inner.update(id, patch, now).await
        }

        async fn delete(&self, id: i32) -> DaoResult<u64> {
            self.hit();
            self.inner.delete(id).await
        }
    }

    fn memory_service() -> TodoService {
        TodoService::new(Arc::new(MemoryTodoDao::new()))
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let service = memory_service();
        let started = chrono::Utc::now().fixed_offset();

        let created = service
            .create(NewTodo::new("Learn Go"))
            .await
            .expect("create should succeed");

        assert_eq!(created.id, 1);
        assert_eq!(created.title, "Learn Go");
        assert!(!created.completed);
        assert!(created.created_at >= started);
        assert_eq!(created.updated_at, created.created_at);
    }

    #[tokio::test]
    async fn create_with_preassigned_id_never_reaches_store() {
        let store = Arc::new(CountingStore::default());
        let service = TodoService::new(store.clone());

        let err = service
            .create(NewTodo {
                id: 5,
                title: "x".to_string(),
                completed: false,
            })
            .await
            .expect_err("create should fail");

        assert!(matches!(err, TodoError::InvalidIdentifier { id: 5, .. }));
        assert_eq!(store.calls(), 0);
        assert!(store.inner.is_empty());
    }

    #[tokio::test]
    async fn invalid_ids_never_reach_store() {
        let store = Arc::new(CountingStore::default());
        let service = TodoService::new(store.clone());

        let delete = service.delete(0).await.expect_err("delete should fail");
        let update = service
            .update(-1, TodoPatch::default())
            .await
            .expect_err("update should fail");
        let find = service.find(0).await.expect_err("find should fail");

        assert!(matches!(delete, TodoError::InvalidIdentifier { id: 0, .. }));
        assert!(matches!(update, TodoError::InvalidIdentifier { id: -1, .. }));
        assert!(matches!(find, TodoError::InvalidIdentifier { id: 0, .. }));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn update_merges_and_refreshes_updated_at() {
        let service = memory_service();
        let created = service
            .create(NewTodo::new("Learn Go"))
            .await
            .expect("create should succeed");
        tokio::time::sleep(Duration::from_millis(5)).await;

        let updated = service
            .update(
                created.id,
                TodoPatch {
                    title: Some("Learn Go Updated".to_string()),
                    completed: Some(false),
                },
            )
            .await
            .expect("update should succeed");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Learn Go Updated");
        assert!(!updated.completed);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.created_at);
    }

    #[tokio::test]
    async fn explicit_false_resets_a_completed_todo() {
        let service = memory_service();
        let created = service
            .create(NewTodo {
                completed: true,
                ..NewTodo::new("done already")
            })
            .await
            .expect("create should succeed");

        let updated = service
            .update(
                created.id,
                TodoPatch {
                    title: None,
                    completed: Some(false),
                },
            )
            .await
            .expect("update should succeed");
        assert!(!updated.completed);

        let untouched = service
            .update(created.id, TodoPatch::default())
            .await
            .expect("empty update should succeed");
        assert_eq!(untouched.title, "done already");
        assert!(!untouched.completed);
        assert!(untouched.updated_at >= untouched.created_at);
    }

    #[tokio::test]
    async fn update_missing_todo_is_not_found() {
        let err = memory_service()
            .update(42, TodoPatch::default())
            .await
            .expect_err("update should fail");
        assert!(matches!(err, TodoError::NotFound { id: 42 }));
    }

    #[tokio::test]
    async fn delete_then_update_is_not_found() {
        let service = memory_service();
        let created = service
            .create(NewTodo::new("Learn Go"))
            .await
            .expect("create should succeed");

        service.delete(created.id).await.expect("delete should succeed");

        let find = service.find(created.id).await.expect_err("find should fail");
        let update = service
            .update(created.id, TodoPatch::default())
            .await
            .expect_err("update should fail");
        assert!(matches!(find, TodoError::NotFound { .. }));
        assert!(matches!(update, TodoError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_missing_todo_succeeds() {
        memory_service()
            .delete(77)
            .await
            .expect("deleting a missing id should succeed");
    }

    #[tokio::test]
    async fn list_returns_todos_in_id_order() {
        let service = memory_service();
        for title in ["one", "two", "three"] {
            service
                .create(NewTodo::new(title))
                .await
                .expect("create should succeed");
        }

        let titles: Vec<String> = service
            .list()
            .await
            .expect("list should succeed")
            .into_iter()
            .map(|todo| todo.title)
            .collect();
        assert_eq!(titles, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn storage_errors_surface_as_persistence_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let service = TodoService::new(Arc::new(TodoDao::new(&db)));

        let err = service
            .create(NewTodo::new("Learn Go"))
            .await
            .expect_err("create should fail");
        assert!(matches!(err, TodoError::PersistenceFailure(_)));
    }
}
