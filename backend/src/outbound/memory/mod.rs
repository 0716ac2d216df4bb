//! In-process todo item store.
//!
//! Used when no database URL is configured and by the HTTP integration
//! tests. State lives for the lifetime of the process only.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    TodoItemsReadRepository, TodoItemsRepositoryError, TodoItemsWriteRepository,
};
use crate::domain::{TodoItem, TodoItemId};

/// Todo items held in a shared map keyed by identifier.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoItemsRepository {
    items: Arc<RwLock<HashMap<TodoItemId, TodoItem>>>,
}

impl InMemoryTodoItemsRepository {
    /// Number of stored items, completed ones included.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl TodoItemsReadRepository for InMemoryTodoItemsRepository {
    async fn find_by_id(&self, id: &TodoItemId) -> Result<bool, TodoItemsRepositoryError> {
        Ok(self.items.read().await.contains_key(id))
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<bool, TodoItemsRepositoryError> {
        Ok(self
            .items
            .read()
            .await
            .values()
            .any(|item| !item.is_completed() && item.description() == description))
    }

    async fn get_by_id(
        &self,
        id: &TodoItemId,
    ) -> Result<Option<TodoItem>, TodoItemsRepositoryError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoItemsRepositoryError> {
        Ok(self
            .items
            .read()
            .await
            .values()
            .filter(|item| !item.is_completed())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TodoItemsWriteRepository for InMemoryTodoItemsRepository {
    async fn create(&self, item: TodoItem) -> Result<TodoItem, TodoItemsRepositoryError> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id()) {
            return Err(TodoItemsRepositoryError::query("todo item already stored"));
        }
        items.insert(item.id(), item.clone());
        Ok(item)
    }

    async fn update(&self, item: &TodoItem) -> Result<(), TodoItemsRepositoryError> {
        let mut items = self.items.write().await;
        match items.get_mut(&item.id()) {
            Some(stored) => {
                *stored = item.clone();
                Ok(())
            }
            None => Err(TodoItemsRepositoryError::query("todo item vanished before update")),
        }
    }
}
