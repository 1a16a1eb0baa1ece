use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId};
use async_trait::async_trait;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn list(&self) -> Vec<Todo>;
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError>;
    async fn toggle_complete(&self, id: TodoId) -> Result<Todo, TodoError>;
    async fn delete(&self, id: TodoId) -> Result<Todo, TodoError>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn list(&self) -> Vec<Todo> { self.repo.list().await }

    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError> {
        let input = input.validate()?;
        let todo = self.repo.create(input).await?;
        tracing::info!(id = %todo.id, title = %todo.title, "todo created");
        Ok(todo)
    }

    async fn toggle_complete(&self, id: TodoId) -> Result<Todo, TodoError> {
        let todo = self.repo.toggle_complete(id).await?;
        tracing::info!(%id, completed = todo.is_completed, "todo toggled");
        Ok(todo)
    }

    async fn delete(&self, id: TodoId) -> Result<Todo, TodoError> {
        let todo = self.repo.delete(id).await?;
        tracing::info!(%id, "todo deleted");
        Ok(todo)
    }
}
