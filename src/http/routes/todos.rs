use axum::{extract::{Path, State}, routing::{delete, get, put}, Router, Json};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ::http::header::LOCATION;

use crate::{application::todo_service::TodoService, domain::todo::{CreateTodo, Todo, TodoId}};
use crate::http::types::{ApiError, ApiJson, ErrorBody, MessageBody};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/api/todos/:id", delete(delete_todo::<S>))
        .route("/api/todos/:id/toggle", put(toggle_todo::<S>))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/todos",
    operation_id = "GetTodos",
    responses((status = 200, description = "All todos in insertion order", body = [Todo])),
    tag = "todos"
)]
pub async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Json<Vec<Todo>> {
    Json(state.service.list().await)
}

#[utoipa::path(
    post,
    path = "/api/todos",
    operation_id = "CreateTodo",
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Missing or blank title", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, ApiJson(payload): ApiJson<CreateTodo>) -> Result<impl IntoResponse, ApiError> {
    let todo = state.service.create(payload).await?;
    let location = format!("/api/todos/{}", todo.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(todo)))
}

#[utoipa::path(
    put,
    path = "/api/todos/{id}/toggle",
    operation_id = "ToggleTodo",
    params(("id" = i32, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Todo with its completion flag flipped", body = Todo),
        (status = 400, description = "Id is not a 32-bit integer", body = ErrorBody),
        (status = 404, description = "No todo with this id", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn toggle_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.toggle_complete(id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    operation_id = "DeleteTodo",
    params(("id" = i32, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Todo removed", body = MessageBody),
        (status = 400, description = "Id is not a 32-bit integer", body = ErrorBody),
        (status = 404, description = "No todo with this id", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(&id)?;
    let removed = state.service.delete(id).await?;
    Ok(Json(MessageBody { message: format!("Todo '{}' deleted", removed.title) }))
}

fn parse_id(s: &str) -> Result<TodoId, ApiError> {
    s.parse::<i32>().map(TodoId).map_err(|_| ApiError::BadRequest(format!("invalid id: {s}")))
}
