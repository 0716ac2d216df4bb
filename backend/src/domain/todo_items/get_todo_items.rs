//! List the todo items that are still outstanding.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::TodoItem;
use crate::domain::pipeline::{HandlerResult, Request, RequestHandler};
use crate::domain::ports::TodoItemsReadRepository;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GetTodoItemsQuery;

/// Incomplete items in repository order, which callers must not rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTodoItemsResponse {
    pub items: Vec<TodoItem>,
}

impl Request for GetTodoItemsQuery {
    type Response = GetTodoItemsResponse;
}

#[derive(Clone)]
pub struct GetTodoItemsHandler {
    read_repo: Arc<dyn TodoItemsReadRepository>,
}

impl GetTodoItemsHandler {
    pub fn new(read_repo: Arc<dyn TodoItemsReadRepository>) -> Self {
        Self { read_repo }
    }
}

#[async_trait]
impl RequestHandler<GetTodoItemsQuery> for GetTodoItemsHandler {
    async fn handle(&self, _request: GetTodoItemsQuery) -> HandlerResult<GetTodoItemsResponse> {
        info!("getting todo items");
        let items = self.read_repo.get_all().await?;
        info!(count = items.len(), "returning todo items");

        Ok(Ok(GetTodoItemsResponse { items }))
    }
}
