use thiserror::Error;

use super::todo::TodoId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo {0} not found")]
    NotFound(TodoId),
    #[error("{0}")]
    Validation(String),
    #[error("duplicate todo id {0}")]
    DuplicateId(TodoId),
    #[error("no todo ids left to assign")]
    IdsExhausted,
}
