use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, QueryOrder, Set, TransactionTrait,
};
use tracing::warn;

use super::{DaoLayerError, DaoResult, NewTodo, TodoPatch, TodoStore};
use crate::db::entities::prelude::Todo;
use crate::db::entities::todo;

const ENTITY: &str = "todo";

/// Relational store. Each mutation runs in its own transaction that is
/// committed on success and rolled back on any failure.
#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

impl TodoDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    async fn begin(&self) -> DaoResult<DatabaseTransaction> {
        self.db.begin().await.map_err(DaoLayerError::Db)
    }
}

async fn finish<T>(txn: DatabaseTransaction, result: DaoResult<T>) -> DaoResult<T> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(DaoLayerError::Db)?;
            Ok(value)
        }
        Err(err) => {
            warn!(error = %err, "rolling back todo transaction");
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}

async fn find_in<C: ConnectionTrait>(conn: &C, id: i32) -> DaoResult<todo::Model> {
    Todo::find_by_id(id)
        .one(conn)
        .await
        .map_err(DaoLayerError::Db)?
        .ok_or(DaoLayerError::NotFound { entity: ENTITY, id })
}

async fn insert_in<C: ConnectionTrait>(
    conn: &C,
    todo: NewTodo,
    now: DateTimeWithTimeZone,
) -> DaoResult<todo::Model> {
    let active = todo::ActiveModel {
        title: Set(todo.title),
        completed: Set(todo.completed),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    active.insert(conn).await.map_err(DaoLayerError::Db)
}

async fn update_in<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    patch: TodoPatch,
    now: DateTimeWithTimeZone,
) -> DaoResult<todo::Model> {
    let existing = find_in(conn, id).await?;
    let merged = patch.merge(&existing, now);

    let mut active = existing.into_active_model();
    active.title = Set(merged.title);
    active.completed = Set(merged.completed);
    active.updated_at = Set(merged.updated_at);
    active.update(conn).await.map_err(DaoLayerError::Db)
}

#[async_trait]
impl TodoStore for TodoDao {
    async fn insert(&self, todo: NewTodo, now: DateTimeWithTimeZone) -> DaoResult<todo::Model> {
        let txn = self.begin().await?;
        let result = insert_in(&txn, todo, now).await;
        finish(txn, result).await
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<todo::Model> {
        find_in(&self.db, id).await
    }

    async fn list(&self) -> DaoResult<Vec<todo::Model>> {
        Todo::find()
            .order_by_asc(todo::Column::Id)
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn update(
        &self,
        id: i32,
        patch: TodoPatch,
        now: DateTimeWithTimeZone,
    ) -> DaoResult<todo::Model> {
        let txn = self.begin().await?;
        let result = update_in(&txn, id, patch, now).await;
        finish(txn, result).await
    }

    async fn delete(&self, id: i32) -> DaoResult<u64> {
        let txn = self.begin().await?;
        let result = Todo::delete_by_id(id)
            .exec(&txn)
            .await
            .map(|res| res.rows_affected)
            .map_err(DaoLayerError::Db);
        finish(txn, result).await
    }
}
