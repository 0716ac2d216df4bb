//! Todo item use cases.
//!
//! Each use case lives in its own module with its request, response,
//! validator and handler. [`TodoItemHandlers`] wires every handler behind a
//! [`ValidationBehavior`] carrying the validators registered for it.

use std::sync::Arc;

use mockable::Clock;

use super::pipeline::{RequestHandler, ValidationBehavior};
use super::ports::{TodoItemsReadRepository, TodoItemsWriteRepository};
use super::validation::Validator;

mod create_todo_item;
mod get_todo_item;
mod get_todo_items;
mod update_todo_item;

pub use create_todo_item::{
    CreateTodoItemCommand, CreateTodoItemHandler, CreateTodoItemResponse, CreateTodoItemValidator,
};
pub use get_todo_item::{
    GetTodoItemHandler, GetTodoItemQuery, GetTodoItemResponse, GetTodoItemValidator,
};
pub use get_todo_items::{GetTodoItemsHandler, GetTodoItemsQuery, GetTodoItemsResponse};
pub use update_todo_item::{
    UpdateTodoItemCommand, UpdateTodoItemHandler, UpdateTodoItemResponse, UpdateTodoItemValidator,
};

/// Validated entry points for every todo item use case.
#[derive(Clone)]
pub struct TodoItemHandlers {
    pub create: Arc<dyn RequestHandler<CreateTodoItemCommand>>,
    pub update: Arc<dyn RequestHandler<UpdateTodoItemCommand>>,
    pub get_one: Arc<dyn RequestHandler<GetTodoItemQuery>>,
    pub get_many: Arc<dyn RequestHandler<GetTodoItemsQuery>>,
}

impl TodoItemHandlers {
    /// Build the handler set over the given repositories and clock.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use todo_list_backend::domain::todo_items::TodoItemHandlers;
    /// use todo_list_backend::outbound::memory::InMemoryTodoItemsRepository;
    ///
    /// let repo = Arc::new(InMemoryTodoItemsRepository::default());
    /// let handlers = TodoItemHandlers::new(repo.clone(), repo, Arc::new(DefaultClock));
    /// # let _ = handlers;
    /// ```
    pub fn new(
        read_repo: Arc<dyn TodoItemsReadRepository>,
        write_repo: Arc<dyn TodoItemsWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let create_rules: Vec<Arc<dyn Validator<CreateTodoItemCommand>>> =
            vec![Arc::new(CreateTodoItemValidator)];
        let update_rules: Vec<Arc<dyn Validator<UpdateTodoItemCommand>>> =
            vec![Arc::new(UpdateTodoItemValidator)];
        let get_one_rules: Vec<Arc<dyn Validator<GetTodoItemQuery>>> =
            vec![Arc::new(GetTodoItemValidator)];

        Self {
            create: Arc::new(ValidationBehavior::new(
                create_rules,
                CreateTodoItemHandler::new(read_repo.clone(), write_repo.clone(), clock.clone()),
            )),
            update: Arc::new(ValidationBehavior::new(
                update_rules,
                UpdateTodoItemHandler::new(read_repo.clone(), write_repo, clock),
            )),
            get_one: Arc::new(ValidationBehavior::new(
                get_one_rules,
                GetTodoItemHandler::new(read_repo.clone()),
            )),
            get_many: Arc::new(ValidationBehavior::<GetTodoItemsQuery, _>::new(
                Vec::new(),
                GetTodoItemsHandler::new(read_repo),
            )),
        }
    }
}

#[cfg(test)]
mod tests;
