use async_trait::async_trait;

use super::error::TodoError;
use super::todo::{CreateTodo, Todo, TodoId};

/// Storage for todos. Implementations keep insertion order and never reuse an id.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn list(&self) -> Vec<Todo>;
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError>;
    async fn toggle_complete(&self, id: TodoId) -> Result<Todo, TodoError>;
    /// Removes the todo and hands it back so callers can report what went away.
    async fn delete(&self, id: TodoId) -> Result<Todo, TodoError>;
}
