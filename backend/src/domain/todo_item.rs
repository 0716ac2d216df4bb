//! Todo item aggregate.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of characters accepted for a description.
pub const DESCRIPTION_MAX_LENGTH: usize = 100;

/// Stable todo item identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItemId(Uuid);

impl TodoItemId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Whether this is the all-zero UUID, which never names a stored item.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TodoItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry on the todo list.
///
/// State changes go through the explicit transition methods; fields are not
/// publicly mutable.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use todo_list_backend::domain::{TodoItem, TodoItemId};
///
/// let now = Utc::now();
/// let mut item = TodoItem::new(TodoItemId::random(), "Buy milk", false, now, now);
/// item.mark_as_completed();
/// assert!(item.is_completed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    id: TodoItemId,
    description: String,
    is_completed: bool,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl TodoItem {
    /// Construct an item from its persisted or freshly created state.
    pub fn new(
        id: TodoItemId,
        description: impl Into<String>,
        is_completed: bool,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            is_completed,
            created_at,
            modified_at,
        }
    }

    /// Stable identifier chosen by the client.
    #[must_use]
    pub fn id(&self) -> TodoItemId {
        self.id
    }

    /// Free-text description as stored.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Whether the item has been ticked off.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// When the item was first stored.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the item last changed.
    #[must_use]
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Tick the item off.
    pub fn mark_as_completed(&mut self) {
        self.is_completed = true;
    }

    /// Reopen a completed item.
    ///
    /// Earlier releases of this service set the flag to `true` here, so an
    /// update with `isCompleted: false` could never reopen an item. Clearing
    /// the flag is the intended behaviour until product confirms otherwise.
    pub fn mark_as_incomplete(&mut self) {
        self.is_completed = false;
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Record `now` as the last modification time.
    pub fn set_modified(&mut self, now: DateTime<Utc>) {
        self.modified_at = now;
    }
}
