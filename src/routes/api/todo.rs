use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

use crate::{
    db::dao::{NewTodo, TodoPatch},
    db::entities::todo,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, todo_service::TodoService},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<todo::Model> for TodoResponse {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/todo", get(list_todos).post(create_todo))
        .route(
            "/todo/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

fn todo_service(state: &AppState) -> TodoService {
    ServiceContext::from_state(state).todo()
}

async fn list_todos(State(state): State<Arc<AppState>>) -> ApiResult<Vec<TodoResponse>> {
    let todos = todo_service(state.as_ref()).list().await?;
    JsonApiResponse::ok(todos.into_iter().map(TodoResponse::from).collect())
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewTodo>,
) -> ApiResult<TodoResponse> {
    let created = todo_service(state.as_ref()).create(body).await?;
    JsonApiResponse::with_status(
        StatusCode::CREATED,
        "Todo created successfully",
        created.into(),
    )
}

async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<TodoResponse> {
    let todo = todo_service(state.as_ref()).find(id).await?;
    JsonApiResponse::ok(todo.into())
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<TodoPatch>,
) -> ApiResult<TodoResponse> {
    let updated = todo_service(state.as_ref()).update(id, body).await?;
    JsonApiResponse::with_status(StatusCode::OK, "Todo updated successfully", updated.into())
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<serde_json::Value> {
    todo_service(state.as_ref()).delete(id).await?;
    JsonApiResponse::with_status(
        StatusCode::OK,
        "Todo deleted successfully",
        serde_json::Value::Null,
    )
}
