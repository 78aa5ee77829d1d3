//! Backend API Wrappers
//!
//! Frontend bindings to the REST API, organized by resource. The hooks layer
//! reaches them through [`TodoApi`] so it can run against an in-memory
//! backend in tests.

mod http;
mod todo_item;
mod todo_list;

// Re-export all public items
pub use todo_item::*;
pub use todo_list::*;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{TodoItem, TodoList};

/// Backend operations, each taking the caller's bearer token
#[async_trait(?Send)]
pub trait TodoApi {
    async fn list_todo_lists(&self, token: Option<&str>) -> Result<Vec<TodoList>, AppError>;
    async fn get_todo_list(&self, id: i64, token: Option<&str>)
        -> Result<Option<TodoList>, AppError>;
    async fn update_todo_list(&self, list: &TodoList, token: Option<&str>)
        -> Result<TodoList, AppError>;
    async fn add_todo_item(&self, item: &TodoItem, token: Option<&str>)
        -> Result<TodoItem, AppError>;
    async fn update_todo_item(&self, item: &TodoItem, token: Option<&str>)
        -> Result<TodoItem, AppError>;
    async fn delete_todo_item(&self, item: &TodoItem, token: Option<&str>)
        -> Result<(), AppError>;
}

/// The HTTP backend at `AppConfig::api_base_url`
pub struct RestApi;

#[async_trait(?Send)]
impl TodoApi for RestApi {
    async fn list_todo_lists(&self, token: Option<&str>) -> Result<Vec<TodoList>, AppError> {
        list_todo_lists(token).await
    }

    async fn get_todo_list(
        &self,
        id: i64,
        token: Option<&str>,
    ) -> Result<Option<TodoList>, AppError> {
        get_todo_list(id, token).await
    }

    async fn update_todo_list(
        &self,
        list: &TodoList,
        token: Option<&str>,
    ) -> Result<TodoList, AppError> {
        update_todo_list(list, token).await
    }

    async fn add_todo_item(
        &self,
        item: &TodoItem,
        token: Option<&str>,
    ) -> Result<TodoItem, AppError> {
        add_todo_item(item, token).await
    }

    async fn update_todo_item(
        &self,
        item: &TodoItem,
        token: Option<&str>,
    ) -> Result<TodoItem, AppError> {
        update_todo_item(item, token).await
    }

    async fn delete_todo_item(&self, item: &TodoItem, token: Option<&str>) -> Result<(), AppError> {
        delete_todo_item(item, token).await
    }
}
