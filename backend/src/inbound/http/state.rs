//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` so they depend only on the domain
//! request pipeline and stay testable without I/O.

use crate::config::RuntimeEnvironment;
use crate::domain::ports::TodoItemsRepositoryError;
use crate::domain::todo_items::TodoItemHandlers;
use crate::inbound::http::error::InternalServerError;

/// Dependency bundle for the todo item endpoints.
#[derive(Clone)]
pub struct HttpState {
    pub handlers: TodoItemHandlers,
    pub environment: RuntimeEnvironment,
}

impl HttpState {
    pub fn new(handlers: TodoItemHandlers, environment: RuntimeEnvironment) -> Self {
        Self {
            handlers,
            environment,
        }
    }

    /// Wrap a repository fault for rendering under this deployment's
    /// disclosure rules.
    pub fn internal_error(&self, source: TodoItemsRepositoryError) -> InternalServerError {
        InternalServerError::new(source, self.environment)
    }
}
