//! PostgreSQL-backed todo item repository using Diesel.
//!
//! One adapter implements both the read and write ports so the handlers can
//! share a single pool.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{TodoItemRecord, TodoItemRow};
use super::pool::DbPool;
use super::schema::todo_items;
use crate::domain::ports::{
    TodoItemsReadRepository, TodoItemsRepositoryError, TodoItemsWriteRepository,
};
use crate::domain::{TodoItem, TodoItemId};

/// Diesel implementation of the todo item repository ports.
#[derive(Clone)]
pub struct DieselTodoItemsRepository {
    pool: DbPool,
}

impl DieselTodoItemsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoItemsReadRepository for DieselTodoItemsRepository {
    async fn find_by_id(&self, id: &TodoItemId) -> Result<bool, TodoItemsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(todo_items::table.find(*id.as_uuid())))
            .get_result::<bool>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<bool, TodoItemsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(
            todo_items::table
                .filter(todo_items::description.eq(description))
                .filter(todo_items::is_completed.eq(false)),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn get_by_id(
        &self,
        id: &TodoItemId,
    ) -> Result<Option<TodoItem>, TodoItemsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TodoItemRow> = todo_items::table
            .find(*id.as_uuid())
            .select(TodoItemRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(TodoItem::from))
    }

    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoItemsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoItemRow> = todo_items::table
            .filter(todo_items::is_completed.eq(false))
            .select(TodoItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(count = rows.len(), "loaded incomplete todo items");
        Ok(rows.into_iter().map(TodoItem::from).collect())
    }
}

#[async_trait]
impl TodoItemsWriteRepository for DieselTodoItemsRepository {
    async fn create(&self, item: TodoItem) -> Result<TodoItem, TodoItemsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: TodoItemRow = diesel::insert_into(todo_items::table)
            .values(TodoItemRecord::from(&item))
            .returning(TodoItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(&self, item: &TodoItem) -> Result<(), TodoItemsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(todo_items::table.find(*item.id().as_uuid()))
            .set((
                todo_items::description.eq(item.description()),
                todo_items::is_completed.eq(item.is_completed()),
                todo_items::modified_at.eq(item.modified_at()),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            return Err(TodoItemsRepositoryError::query("todo item vanished before update"));
        }
        Ok(())
    }
}
