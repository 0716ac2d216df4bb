//! Port for writing todo items through persistence adapters.
use async_trait::async_trait;

use crate::domain::TodoItem;

use super::TodoItemsRepositoryError;

/// Write side of todo item persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoItemsWriteRepository: Send + Sync {
    /// Insert a new item and return it as stored.
    async fn create(&self, item: TodoItem) -> Result<TodoItem, TodoItemsRepositoryError>;

    /// Overwrite the stored state of an existing item.
    async fn update(&self, item: &TodoItem) -> Result<(), TodoItemsRepositoryError>;
}
