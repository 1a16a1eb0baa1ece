use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::TodoError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TodoId(pub i32);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[schema(value_type = i32)]
    pub id: TodoId,
    pub title: String,
    pub is_completed: bool,
}

impl Todo {
    pub fn new(id: i32, title: impl Into<String>, is_completed: bool) -> Self {
        Self { id: TodoId(id), title: title.into(), is_completed }
    }

    /// Copy of this todo with the completion flag flipped.
    pub fn toggled(&self) -> Self {
        Self { is_completed: !self.is_completed, ..self.clone() }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTodo {
    pub title: String,
}

impl CreateTodo {
    /// Returns the payload with a trimmed title, or a validation error when
    /// nothing but whitespace was supplied.
    pub fn validate(self) -> Result<Self, TodoError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TodoError::Validation("title must not be empty".into()));
        }
        Ok(Self { title: title.to_string() })
    }
}

/// Items every fresh store starts with.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Learn Azure", true),
        Todo::new(2, "Deploy Backend", false),
        Todo::new(3, "Connect Frontend", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Todo::new(7, "Ship it", true)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 7, "title": "Ship it", "isCompleted": true }));
    }

    #[test]
    fn toggled_keeps_id_and_title() {
        let todo = Todo::new(2, "Deploy Backend", false);
        let flipped = todo.toggled();
        assert_eq!(flipped, Todo::new(2, "Deploy Backend", true));
        assert_eq!(flipped.toggled(), todo);
    }

    #[test]
    fn validate_trims_title() {
        let input = CreateTodo { title: "  Write tests \n".into() }.validate().unwrap();
        assert_eq!(input.title, "Write tests");
    }

    #[test]
    fn validate_rejects_blank_title() {
        for title in ["", "   ", "\t\n"] {
            let err = CreateTodo { title: title.into() }.validate().unwrap_err();
            assert!(matches!(err, TodoError::Validation(_)));
        }
    }
}
