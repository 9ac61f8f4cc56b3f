use super::TodoError;
use crate::db::dao::NewTodo;

pub const ID_PROVIDED: &str = "ID should not be provided";
pub const TITLE_REQUIRED: &str = "The title is required";
pub const INVALID_ID: &str = "invalid ID";

/// Checks a creation payload. Titles are not trimmed, so whitespace-only
/// titles pass.
pub fn validate_new(todo: &NewTodo) -> Result<(), TodoError> {
    if todo.id != 0 {
        return Err(TodoError::InvalidIdentifier {
            id: todo.id,
            reason: ID_PROVIDED,
        });
    }
    if todo.title.is_empty() {
        return Err(TodoError::ValidationFailure(TITLE_REQUIRED.to_string()));
    }
    Ok(())
}

pub fn validate_id(id: i32) -> Result<(), TodoError> {
    if id <= 0 {
        return Err(TodoError::InvalidIdentifier {
            id,
            reason: INVALID_ID,
        });
    }
    Ok(())
}
