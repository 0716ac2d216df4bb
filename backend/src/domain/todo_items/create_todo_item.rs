//! Create a todo item unless its id or description is already taken.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::pipeline::{HandlerResult, Request, RequestHandler};
use crate::domain::ports::{TodoItemsReadRepository, TodoItemsWriteRepository};
use crate::domain::validation::{
    DESCRIPTION_FIELD, ID_FIELD, ValidationFailure, Validator, validate_description, validate_id,
};
use crate::domain::{ApplicationError, TodoItem, TodoItemId};

/// Command carrying the client-chosen identity and initial state of a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoItemCommand {
    pub id: TodoItemId,
    pub description: String,
    pub is_completed: bool,
}

/// The item as stored by the write repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoItemResponse {
    pub item: TodoItem,
}

impl Request for CreateTodoItemCommand {
    type Response = CreateTodoItemResponse;
}

/// Requires a non-nil id and a non-blank description within the length limit.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateTodoItemValidator;

impl Validator<CreateTodoItemCommand> for CreateTodoItemValidator {
    fn validate(&self, request: &CreateTodoItemCommand) -> Vec<ValidationFailure> {
        validate_id(&request.id)
            .into_iter()
            .chain(validate_description(&request.description))
            .collect()
    }
}

/// Handler for [`CreateTodoItemCommand`].
///
/// The id is checked first, then the trimmed description against incomplete
/// items. Neither duplicate path reaches the write repository.
#[derive(Clone)]
pub struct CreateTodoItemHandler {
    read_repo: Arc<dyn TodoItemsReadRepository>,
    write_repo: Arc<dyn TodoItemsWriteRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateTodoItemHandler {
    pub fn new(
        read_repo: Arc<dyn TodoItemsReadRepository>,
        write_repo: Arc<dyn TodoItemsWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            clock,
        }
    }
}

#[async_trait]
impl RequestHandler<CreateTodoItemCommand> for CreateTodoItemHandler {
    async fn handle(&self, request: CreateTodoItemCommand) -> HandlerResult<CreateTodoItemResponse> {
        let CreateTodoItemCommand {
            id,
            description,
            is_completed,
        } = request;

        info!(%id, "finding duplicate todo items by id");
        if self.read_repo.find_by_id(&id).await? {
            warn!(%id, "todo item already exists with id");
            return Ok(Err(ApplicationError::duplicate(ID_FIELD, id.to_string())));
        }

        let trimmed = description.trim();
        info!(description = trimmed, "finding duplicate todo items by description");
        if self.read_repo.find_by_description(trimmed).await? {
            warn!(description = trimmed, "todo item already exists with description");
            return Ok(Err(ApplicationError::duplicate(DESCRIPTION_FIELD, trimmed)));
        }

        let now = self.clock.utc();
        let item = TodoItem::new(id, description, is_completed, now, now);

        info!(%id, "creating todo item");
        let created = self.write_repo.create(item).await?;
        info!(id = %created.id(), "todo item created");

        Ok(Ok(CreateTodoItemResponse { item: created }))
    }
}
