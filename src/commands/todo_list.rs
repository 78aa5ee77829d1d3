//! Todo List Commands
//!
//! Frontend bindings for list endpoints.

use crate::errors::AppError;
use crate::models::TodoList;

use super::http::{self, Method};

pub async fn list_todo_lists(token: Option<&str>) -> Result<Vec<TodoList>, AppError> {
    http::get_json("/api/todolists", token).await
}

/// Fetch one list; `None` when the backend does not know the id
pub async fn get_todo_list(id: i64, token: Option<&str>) -> Result<Option<TodoList>, AppError> {
    http::get_optional_json(&format!("/api/todolists/{id}"), token).await
}

/// Replace the stored list record (name and all)
pub async fn update_todo_list(list: &TodoList, token: Option<&str>) -> Result<TodoList, AppError> {
    http::send_json(Method::Put, &format!("/api/todolists/{}", list.id), list, token).await
}
