//! Replace the description and completion state of an existing todo item.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::pipeline::{HandlerResult, Request, RequestHandler};
use crate::domain::ports::{TodoItemsReadRepository, TodoItemsWriteRepository};
use crate::domain::validation::{
    ID_FIELD, ValidationFailure, Validator, validate_description, validate_id,
};
use crate::domain::{ApplicationError, TodoItemId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoItemCommand {
    pub id: TodoItemId,
    pub description: String,
    pub is_completed: bool,
}

/// Updates produce no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTodoItemResponse;

impl Request for UpdateTodoItemCommand {
    type Response = UpdateTodoItemResponse;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateTodoItemValidator;

impl Validator<UpdateTodoItemCommand> for UpdateTodoItemValidator {
    fn validate(&self, request: &UpdateTodoItemCommand) -> Vec<ValidationFailure> {
        validate_id(&request.id)
            .into_iter()
            .chain(validate_description(&request.description))
            .collect()
    }
}

/// Handler for [`UpdateTodoItemCommand`].
#[derive(Clone)]
pub struct UpdateTodoItemHandler {
    read_repo: Arc<dyn TodoItemsReadRepository>,
    write_repo: Arc<dyn TodoItemsWriteRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateTodoItemHandler {
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
impl RequestHandler<UpdateTodoItemCommand> for UpdateTodoItemHandler {
    async fn handle(&self, request: UpdateTodoItemCommand) -> HandlerResult<UpdateTodoItemResponse> {
        let id = request.id;

        info!(%id, "getting todo item");
        let Some(mut item) = self.read_repo.get_by_id(&id).await? else {
            warn!(%id, "todo item not found");
            return Ok(Err(ApplicationError::not_found(ID_FIELD, id.to_string())));
        };

        info!(%id, "updating todo item");
        if request.is_completed {
            item.mark_as_completed();
        } else {
            item.mark_as_incomplete();
        }
        item.set_description(request.description);
        item.set_modified(self.clock.utc());

        self.write_repo.update(&item).await?;
        info!(%id, "todo item updated");

        Ok(Ok(UpdateTodoItemResponse))
    }
}
