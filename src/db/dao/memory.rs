use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use sea_orm::DbErr;
use sea_orm::prelude::DateTimeWithTimeZone;

use super::{DaoLayerError, DaoResult, NewTodo, TodoPatch, TodoStore};
use crate::db::entities::todo;

const ENTITY: &str = "todo";

/// Process-local store used by tests and database-less runs. Ids are
/// assigned sequentially from 1 and never reused.
#[derive(Clone, Default)]
pub struct MemoryTodoDao {
    inner: Arc<RwLock<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i32,
    rows: BTreeMap<i32, todo::Model>,
}

impl MemoryTodoDao {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().map(|state| state.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> DaoResult<RwLockReadGuard<'_, MemoryState>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> DaoResult<RwLockWriteGuard<'_, MemoryState>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> DaoLayerError {
    DaoLayerError::Db(DbErr::Custom("todo store lock poisoned".to_string()))
}

#[async_trait]
impl TodoStore for MemoryTodoDao {
    async fn insert(&self, todo: NewTodo, now: DateTimeWithTimeZone) -> DaoResult<todo::Model> {
        let mut state = self.write()?;
        let id = state.last_id.checked_add(1).ok_or_else(|| {
            DaoLayerError::Db(DbErr::Custom("todo id space exhausted".to_string()))
        })?;
        state.last_id = id;
        let model = todo::Model {
            id,
            title: todo.title,
            completed: todo.completed,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(model.id, model.clone());
        Ok(model)
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<todo::Model> {
        let state = self.read()?;
        state
            .rows
            .get(&id)
            .cloned()
            .ok_or(DaoLayerError::NotFound { entity: ENTITY, id })
    }

    async fn list(&self) -> DaoResult<Vec<todo::Model>> {
        let state = self.read()?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn update(
        &self,
        id: i32,
        patch: TodoPatch,
        now: DateTimeWithTimeZone,
    ) -> DaoResult<todo::Model> {
        let mut state = self.write()?;
        let row = state
            .rows
            .get_mut(&id)
            .ok_or(DaoLayerError::NotFound { entity: ENTITY, id })?;
        *row = patch.merge(row, now);
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> DaoResult<u64> {
        let mut state = self.write()?;
        Ok(u64::from(state.rows.remove(&id).is_some()))
    }
}
