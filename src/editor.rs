//! List Editor
//!
//! What the list editing page shows and how its actions reach the backend,
//! kept free of DOM code. `EditTodoList` renders an [`EditorView`] and
//! forwards user actions to a [`ListEditor`].

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{TodoItem, TodoList};

/// Mutations the editor delegates to. Implementations own cache invalidation.
#[async_trait(?Send)]
pub trait TodoMutations {
    async fn add_todo_item(&self, item: &TodoItem) -> Result<TodoItem, AppError>;
    async fn update_todo_item(&self, item: &TodoItem) -> Result<TodoItem, AppError>;
    async fn delete_todo_item(&self, item: &TodoItem) -> Result<(), AppError>;
    async fn update_todo_list(&self, list: &TodoList) -> Result<TodoList, AppError>;
}

/// Status tag of the list query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Pending,
    Success,
    Error,
}

/// Snapshot of the fetch-list-by-id query
#[derive(Clone, Debug, PartialEq)]
pub struct TodoListQuery {
    pub status: FetchStatus,
    pub data: Option<TodoList>,
    pub error: Option<AppError>,
}

impl TodoListQuery {
    pub fn pending() -> Self {
        Self {
            status: FetchStatus::Pending,
            data: None,
            error: None,
        }
    }

    /// From a resource value; `None` until a fetch has actually run
    pub fn from_result(result: Option<Result<Option<TodoList>, AppError>>) -> Self {
        match result {
            None => Self::pending(),
            Some(Ok(data)) => Self {
                status: FetchStatus::Success,
                data,
                error: None,
            },
            Some(Err(error)) => Self {
                status: FetchStatus::Error,
                data: None,
                error: Some(error),
            },
        }
    }

    /// The loaded list, if the query succeeded with one
    pub fn loaded(&self) -> Option<&TodoList> {
        match self.status {
            FetchStatus::Success => self.data.as_ref(),
            _ => None,
        }
    }

    pub fn view(&self) -> EditorView {
        match (self.status, &self.data, &self.error) {
            (FetchStatus::Pending, _, _) => EditorView::Loading,
            (FetchStatus::Success, Some(list), _) => EditorView::Content(list.clone()),
            (FetchStatus::Success, None, _) => EditorView::Empty,
            (FetchStatus::Error, _, Some(error)) => EditorView::Failed(error.to_string()),
            (FetchStatus::Error, _, None) => EditorView::Failed("Unknown error".to_string()),
        }
    }
}

/// What the editor page renders
#[derive(Clone, Debug, PartialEq)]
pub enum EditorView {
    /// Loading indicator only
    Loading,
    /// Name editor, add-item input and the items in payload order
    Content(TodoList),
    /// Fetch succeeded without a list: render nothing
    Empty,
    Failed(String),
}

/// Parse the route parameter into a list id
pub fn parse_list_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidListId(raw.to_string()))
}

/// Actions of the list editing page for one route parameter
pub struct ListEditor<M> {
    route_param: String,
    mutations: M,
}

impl<M: TodoMutations> ListEditor<M> {
    pub fn new(route_param: impl Into<String>, mutations: M) -> Self {
        Self {
            route_param: route_param.into(),
            mutations,
        }
    }

    pub fn list_id(&self) -> Result<i64, AppError> {
        parse_list_id(&self.route_param)
    }

    /// Attach the item to this page's list and submit it
    pub async fn add_todo_item(&self, item: TodoItem) -> Result<(), AppError> {
        let todo_list_id = self.list_id()?;
        let item = TodoItem {
            todo_list_id: Some(todo_list_id),
            ..item
        };
        self.mutations.add_todo_item(&item).await?;
        Ok(())
    }

    /// Submit the loaded list with a new name; nothing happens before it loads
    pub async fn set_todo_list_name(
        &self,
        loaded: Option<&TodoList>,
        name: &str,
    ) -> Result<(), AppError> {
        let Some(list) = loaded else {
            tracing::debug!("list not loaded yet, ignoring rename");
            return Ok(());
        };
        let renamed = TodoList {
            name: name.to_string(),
            ..list.clone()
        };
        self.mutations.update_todo_list(&renamed).await?;
        Ok(())
    }

    pub async fn update_todo_item(&self, item: &TodoItem) -> Result<(), AppError> {
        self.mutations.update_todo_item(item).await?;
        Ok(())
    }

    pub async fn delete_todo_item(&self, item: &TodoItem) -> Result<(), AppError> {
        self.mutations.delete_todo_item(item).await
    }
}
