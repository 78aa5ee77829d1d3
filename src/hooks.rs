//! Data Hooks
//!
//! Queries and mutations backed by the app's [`TodoApi`]. Every successful
//! mutation bumps the app-wide reload trigger, which refetches the queries.

use async_trait::async_trait;
use leptos::prelude::*;

use crate::auth::{use_auth, AuthContext};
use crate::commands::TodoApi;
use crate::context::AppContext;
use crate::editor::{parse_list_id, TodoListQuery, TodoMutations};
use crate::errors::AppError;
use crate::models::{TodoItem, TodoList};

/// Mutations for the list editor
#[derive(Clone, Copy)]
pub struct TodoHooks {
    ctx: AppContext,
    auth: AuthContext,
}

impl TodoHooks {
    pub fn new(ctx: AppContext, auth: AuthContext) -> Self {
        Self { ctx, auth }
    }
}

#[async_trait(?Send)]
impl TodoMutations for TodoHooks {
    async fn add_todo_item(&self, item: &TodoItem) -> Result<TodoItem, AppError> {
        let token = self.auth.bearer_token().await;
        let created = self.ctx.api().add_todo_item(item, token.as_deref()).await?;
        self.ctx.reload();
        Ok(created)
    }

    async fn update_todo_item(&self, item: &TodoItem) -> Result<TodoItem, AppError> {
        let token = self.auth.bearer_token().await;
        let updated = self.ctx.api().update_todo_item(item, token.as_deref()).await?;
        self.ctx.reload();
        Ok(updated)
    }

    async fn delete_todo_item(&self, item: &TodoItem) -> Result<(), AppError> {
        let token = self.auth.bearer_token().await;
        self.ctx.api().delete_todo_item(item, token.as_deref()).await?;
        self.ctx.reload();
        Ok(())
    }

    async fn update_todo_list(&self, list: &TodoList) -> Result<TodoList, AppError> {
        let token = self.auth.bearer_token().await;
        let updated = self.ctx.api().update_todo_list(list, token.as_deref()).await?;
        self.ctx.reload();
        Ok(updated)
    }
}

/// Fetch-list-by-id query. Refetches when the route parameter, the reload
/// trigger or the authentication status changes.
///
/// Pending while the session initializes: the fetcher resolves to `None`
/// right away instead of waiting, so the settled session can start the
/// real fetch.
pub fn use_todo_list_query(route_param: Signal<String>) -> Signal<TodoListQuery> {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let auth = use_auth();

    let session_key = session_key(auth);
    let resource = LocalResource::new(move || {
        let _ = ctx.reload_trigger.get();
        let (auth_ready, _) = session_key.get();
        let raw = route_param.get();
        let api = ctx.api();
        async move {
            if !auth_ready {
                return None;
            }
            Some(fetch_todo_list(api.as_ref(), auth, &raw).await)
        }
    });

    Signal::derive(move || TodoListQuery::from_result(resource.get().flatten()))
}

async fn fetch_todo_list(
    api: &dyn TodoApi,
    auth: AuthContext,
    raw: &str,
) -> Result<Option<TodoList>, AppError> {
    let id = parse_list_id(raw)?;
    let token = auth.bearer_token().await;
    api.get_todo_list(id, token.as_deref()).await
}

/// All lists of the signed-in user, for the overview page.
/// `None` until the session has settled as authenticated.
pub fn use_todo_lists_query() -> Signal<Option<Result<Vec<TodoList>, AppError>>> {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let auth = use_auth();

    let session_key = session_key(auth);
    let resource = LocalResource::new(move || {
        let _ = ctx.reload_trigger.get();
        let (auth_ready, authenticated) = session_key.get();
        let api = ctx.api();
        async move {
            if !auth_ready || authenticated != Some(true) {
                return None;
            }
            let token = auth.bearer_token().await;
            Some(api.list_todo_lists(token.as_deref()).await)
        }
    });

    Signal::derive(move || resource.get().flatten())
}

/// Session readiness and status; changes only when one of them does, so
/// popup or error updates do not refetch
fn session_key(auth: AuthContext) -> Memo<(bool, Option<bool>)> {
    Memo::new(move |_| (!auth.loading(), auth.is_authenticated()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use any_spawner::Executor;
    use tokio::task::LocalSet;

    use crate::auth::testing::{initializing_auth, settle, settled_auth, STUB_TOKEN};
    use crate::editor::{EditorView, FetchStatus};

    /// In-memory backend; records the token of every request
    #[derive(Default)]
    struct MemoryApi {
        lists: Vec<TodoList>,
        fail_writes: bool,
        tokens: RefCell<Vec<Option<String>>>,
    }

    impl MemoryApi {
        fn with_lists(lists: Vec<TodoList>) -> Rc<Self> {
            Rc::new(Self {
                lists,
                ..Default::default()
            })
        }

        fn failing() -> Rc<Self> {
            Rc::new(Self {
                fail_writes: true,
                ..Default::default()
            })
        }

        fn tokens(&self) -> Vec<Option<String>> {
            self.tokens.borrow().clone()
        }

        fn record(&self, token: Option<&str>) {
            self.tokens.borrow_mut().push(token.map(str::to_string));
        }

        fn write<T>(&self, token: Option<&str>, value: T) -> Result<T, AppError> {
            self.record(token);
            if self.fail_writes {
                Err(AppError::Network("connection reset".to_string()))
            } else {
                Ok(value)
            }
        }
    }

    #[async_trait(?Send)]
    impl TodoApi for MemoryApi {
        async fn list_todo_lists(&self, token: Option<&str>) -> Result<Vec<TodoList>, AppError> {
            self.record(token);
            Ok(self.lists.clone())
        }

        async fn get_todo_list(
            &self,
            id: i64,
            token: Option<&str>,
        ) -> Result<Option<TodoList>, AppError> {
            self.record(token);
            Ok(self.lists.iter().find(|list| list.id == id).cloned())
        }

        async fn update_todo_list(
            &self,
            list: &TodoList,
            token: Option<&str>,
        ) -> Result<TodoList, AppError> {
            self.write(token, list.clone())
        }

        async fn add_todo_item(
            &self,
            item: &TodoItem,
            token: Option<&str>,
        ) -> Result<TodoItem, AppError> {
            self.write(
                token,
                TodoItem {
                    id: Some(99),
                    ..item.clone()
                },
            )
        }

        async fn update_todo_item(
            &self,
            item: &TodoItem,
            token: Option<&str>,
        ) -> Result<TodoItem, AppError> {
            self.write(token, item.clone())
        }

        async fn delete_todo_item(
            &self,
            _item: &TodoItem,
            token: Option<&str>,
        ) -> Result<(), AppError> {
            self.write(token, ())
        }
    }

    fn groceries() -> TodoList {
        TodoList {
            id: 42,
            name: "Groceries".to_string(),
            todo_items: vec![TodoItem {
                id: Some(1),
                todo_list_id: Some(42),
                description: "Milk".to_string(),
                is_complete: false,
            }],
        }
    }

    fn provide_app_context(api: Rc<MemoryApi>) -> AppContext {
        let api: Rc<dyn TodoApi> = api;
        let ctx = AppContext::new(signal(0u32), api);
        provide_context(ctx);
        ctx
    }

    /// Let spawned resource fetches run to completion
    async fn run_pending_tasks() {
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_list_query_waits_for_session_then_loads() {
        LocalSet::new()
            .run_until(async {
                let _ = Executor::init_tokio();
                let owner = Owner::new();
                owner.set();
                let api = MemoryApi::with_lists(vec![groceries()]);
                provide_app_context(api.clone());
                let (auth, session) = initializing_auth();
                provide_context(auth);

                let query = use_todo_list_query(Signal::derive(|| "42".to_string()));
                run_pending_tasks().await;

                assert_eq!(query.get_untracked().status, FetchStatus::Pending);
                assert!(api.tokens().is_empty());

                settle(&session, true).await;
                run_pending_tasks().await;

                assert_eq!(query.get_untracked().view(), EditorView::Content(groceries()));
                assert_eq!(api.tokens(), vec![Some(STUB_TOKEN.to_string())]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_list_query_reports_bad_route_once_session_settles() {
        LocalSet::new()
            .run_until(async {
                let _ = Executor::init_tokio();
                let owner = Owner::new();
                owner.set();
                let api = MemoryApi::with_lists(vec![groceries()]);
                provide_app_context(api.clone());
                let (auth, session) = initializing_auth();
                provide_context(auth);

                let query = use_todo_list_query(Signal::derive(|| "abc".to_string()));
                run_pending_tasks().await;
                assert_eq!(query.get_untracked().view(), EditorView::Loading);

                settle(&session, false).await;
                run_pending_tasks().await;

                assert_eq!(
                    query.get_untracked().view(),
                    EditorView::Failed("Invalid list id: \"abc\"".to_string())
                );
                assert!(api.tokens().is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn test_list_query_refetches_on_reload() {
        LocalSet::new()
            .run_until(async {
                let _ = Executor::init_tokio();
                let owner = Owner::new();
                owner.set();
                let api = MemoryApi::with_lists(vec![groceries()]);
                let ctx = provide_app_context(api.clone());
                provide_context(settled_auth(false).await);

                let query = use_todo_list_query(Signal::derive(|| "7".to_string()));
                run_pending_tasks().await;
                assert_eq!(query.get_untracked().view(), EditorView::Empty);
                assert_eq!(api.tokens(), vec![None]);

                ctx.reload();
                run_pending_tasks().await;

                assert_eq!(api.tokens(), vec![None, None]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_lists_query_skips_signed_out_users() {
        LocalSet::new()
            .run_until(async {
                let _ = Executor::init_tokio();
                let owner = Owner::new();
                owner.set();
                let api = MemoryApi::with_lists(vec![groceries()]);
                provide_app_context(api.clone());
                provide_context(settled_auth(false).await);

                let lists = use_todo_lists_query();
                run_pending_tasks().await;

                assert_eq!(lists.get_untracked(), None);
                assert!(api.tokens().is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn test_lists_query_loads_after_sign_in() {
        LocalSet::new()
            .run_until(async {
                let _ = Executor::init_tokio();
                let owner = Owner::new();
                owner.set();
                let api = MemoryApi::with_lists(vec![groceries()]);
                provide_app_context(api.clone());
                let (auth, session) = initializing_auth();
                provide_context(auth);

                let lists = use_todo_lists_query();
                run_pending_tasks().await;
                assert_eq!(lists.get_untracked(), None);

                settle(&session, true).await;
                run_pending_tasks().await;

                assert_eq!(lists.get_untracked(), Some(Ok(vec![groceries()])));
                assert_eq!(api.tokens(), vec![Some(STUB_TOKEN.to_string())]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_successful_mutations_reload_queries() {
        let owner = Owner::new();
        owner.set();
        let api = MemoryApi::with_lists(vec![groceries()]);
        let ctx = provide_app_context(api.clone());
        let hooks = TodoHooks::new(ctx, settled_auth(true).await);
        let mut butter = TodoItem::draft("Butter");
        butter.todo_list_id = Some(42);

        let created = hooks.add_todo_item(&butter).await.unwrap();
        assert_eq!(created.id, Some(99));
        assert_eq!(ctx.reload_trigger.get_untracked(), 1);

        hooks.update_todo_item(&created.toggled()).await.unwrap();
        hooks.delete_todo_item(&created).await.unwrap();
        hooks.update_todo_list(&groceries()).await.unwrap();

        assert_eq!(ctx.reload_trigger.get_untracked(), 4);
        assert!(api
            .tokens()
            .iter()
            .all(|token| token.as_deref() == Some(STUB_TOKEN)));
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_queries_alone() {
        let owner = Owner::new();
        owner.set();
        let api = MemoryApi::failing();
        let ctx = provide_app_context(api.clone());
        let hooks = TodoHooks::new(ctx, settled_auth(false).await);

        let result = hooks.delete_todo_item(&groceries().todo_items[0]).await;

        assert_eq!(
            result,
            Err(AppError::Network("connection reset".to_string()))
        );
        assert_eq!(ctx.reload_trigger.get_untracked(), 0);
        assert_eq!(api.tokens(), vec![None]);
    }
}
