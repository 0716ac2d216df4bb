//! Port for reading todo items from persistence adapters.
use async_trait::async_trait;

use crate::domain::{TodoItem, TodoItemId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by todo item repository adapters.
    pub enum TodoItemsRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "todo item repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "todo item repository query failed: {message}",
    }
}

/// Read side of todo item persistence.
///
/// Only items that are not yet completed take part in description lookups
/// and listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoItemsReadRepository: Send + Sync {
    /// Whether any item, completed or not, uses this identifier.
    async fn find_by_id(&self, id: &TodoItemId) -> Result<bool, TodoItemsRepositoryError>;

    /// Whether an incomplete item has exactly this description.
    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<bool, TodoItemsRepositoryError>;

    /// Fetch an item by identifier.
    async fn get_by_id(
        &self,
        id: &TodoItemId,
    ) -> Result<Option<TodoItem>, TodoItemsRepositoryError>;

    /// List every incomplete item. Order is unspecified.
    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoItemsRepositoryError>;
}
