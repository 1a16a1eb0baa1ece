use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    error::TodoError,
    repository::TodoRepository,
    todo::{seed_todos, CreateTodo, Todo, TodoId},
};

struct Store {
    items: Vec<Todo>,
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<i32>,
}

/// Process-local todo store. Clones share the same underlying list.
#[derive(Clone)]
pub struct InMemoryTodoRepository {
    inner: Arc<RwLock<Store>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::build(Vec::new()) }

    /// Starts from `items` in the given order; ids handed out afterwards begin
    /// one past the highest id present. Fails if two items share an id.
    pub fn with_items(items: Vec<Todo>) -> Result<Self, TodoError> {
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|t| !seen.insert(t.id)) {
            return Err(TodoError::DuplicateId(dup.id));
        }
        Ok(Self::build(items))
    }

    pub fn seeded() -> Self { Self::build(seed_todos()) }

    fn build(items: Vec<Todo>) -> Self {
        let next_id = match items.iter().map(|t| t.id.0).max() {
            Some(highest) => highest.checked_add(1),
            None => Some(1),
        };
        Self { inner: Arc::new(RwLock::new(Store { items, next_id })) }
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.items.clone()
    }

    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError> {
        let mut store = self.inner.write().await;
        let id = store.next_id.ok_or(TodoError::IdsExhausted)?;
        let todo = Todo { id: TodoId(id), title: input.title, is_completed: false };
        store.next_id = id.checked_add(1);
        store.items.push(todo.clone());
        Ok(todo)
    }

    async fn toggle_complete(&self, id: TodoId) -> Result<Todo, TodoError> {
        let mut store = self.inner.write().await;
        let Some(index) = store.items.iter().position(|t| t.id == id) else {
            return Err(TodoError::NotFound(id));
        };
        let updated = store.items[index].toggled();
        store.items[index] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: TodoId) -> Result<Todo, TodoError> {
        let mut store = self.inner.write().await;
        let index = store.items.iter().position(|t| t.id == id).ok_or(TodoError::NotFound(id))?;
        Ok(store.items.remove(index))
    }
}
