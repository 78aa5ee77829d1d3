//! Todo Item Commands
//!
//! Frontend bindings for item endpoints.

use crate::errors::AppError;
use crate::models::TodoItem;

use super::http::{self, Method};

// ========================
// Paths
// ========================

fn items_path(item: &TodoItem) -> Result<String, AppError> {
    let list_id = item
        .todo_list_id
        .ok_or_else(|| AppError::Serialization("Item is not attached to a list.".to_string()))?;
    Ok(format!("/api/todolists/{list_id}/todoitems"))
}

fn item_path(item: &TodoItem) -> Result<String, AppError> {
    let id = item
        .id
        .ok_or_else(|| AppError::Serialization("Item has not been saved yet.".to_string()))?;
    Ok(format!("/api/todoitems/{id}"))
}

// ========================
// Commands
// ========================

pub async fn add_todo_item(item: &TodoItem, token: Option<&str>) -> Result<TodoItem, AppError> {
    http::send_json(Method::Post, &items_path(item)?, item, token).await
}

pub async fn update_todo_item(item: &TodoItem, token: Option<&str>) -> Result<TodoItem, AppError> {
    http::send_json(Method::Put, &item_path(item)?, item, token).await
}

pub async fn delete_todo_item(item: &TodoItem, token: Option<&str>) -> Result<(), AppError> {
    http::delete(&item_path(item)?, token).await
}
