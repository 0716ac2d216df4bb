//! Internal Diesel row structs for the `todo_items` table.
//!
//! These never leave the persistence layer; repositories convert them to and
//! from [`TodoItem`].

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::todo_items;
use crate::domain::{TodoItem, TodoItemId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todo_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoItemRow {
    pub id: Uuid,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<TodoItemRow> for TodoItem {
    fn from(row: TodoItemRow) -> Self {
        TodoItem::new(
            TodoItemId::from_uuid(row.id),
            row.description,
            row.is_completed,
            row.created_at,
            row.modified_at,
        )
    }
}

/// Insertable view over a borrowed [`TodoItem`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todo_items)]
pub(crate) struct TodoItemRecord<'a> {
    pub id: Uuid,
    pub description: &'a str,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl<'a> From<&'a TodoItem> for TodoItemRecord<'a> {
    fn from(item: &'a TodoItem) -> Self {
        Self {
            id: *item.id().as_uuid(),
            description: item.description(),
            is_completed: item.is_completed(),
            created_at: item.created_at(),
            modified_at: item.modified_at(),
        }
    }
}
