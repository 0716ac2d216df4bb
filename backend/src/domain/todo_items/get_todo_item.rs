//! Fetch a single todo item by id.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::pipeline::{HandlerResult, Request, RequestHandler};
use crate::domain::ports::TodoItemsReadRepository;
use crate::domain::validation::{ID_FIELD, ValidationFailure, Validator, validate_id};
use crate::domain::{ApplicationError, TodoItem, TodoItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTodoItemQuery {
    pub id: TodoItemId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTodoItemResponse {
    pub item: TodoItem,
}

impl Request for GetTodoItemQuery {
    type Response = GetTodoItemResponse;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GetTodoItemValidator;

impl Validator<GetTodoItemQuery> for GetTodoItemValidator {
    fn validate(&self, request: &GetTodoItemQuery) -> Vec<ValidationFailure> {
        validate_id(&request.id).into_iter().collect()
    }
}

#[derive(Clone)]
pub struct GetTodoItemHandler {
    read_repo: Arc<dyn TodoItemsReadRepository>,
}

impl GetTodoItemHandler {
    pub fn new(read_repo: Arc<dyn TodoItemsReadRepository>) -> Self {
        Self { read_repo }
    }
}

#[async_trait]
impl RequestHandler<GetTodoItemQuery> for GetTodoItemHandler {
    async fn handle(&self, request: GetTodoItemQuery) -> HandlerResult<GetTodoItemResponse> {
        let id = request.id;

        info!(%id, "getting todo item");
        match self.read_repo.get_by_id(&id).await? {
            Some(item) => Ok(Ok(GetTodoItemResponse { item })),
            None => {
                warn!(%id, "todo item not found");
                Ok(Err(ApplicationError::not_found(ID_FIELD, id.to_string())))
            }
        }
    }
}
