//! Domain types, ports, and use cases for the todo list.
//!
//! Nothing in this module knows about HTTP or SQL. Inbound adapters build
//! requests and dispatch them through [`todo_items::TodoItemHandlers`];
//! outbound adapters implement the traits in [`ports`].

pub mod error;
pub mod pipeline;
pub mod ports;
pub mod result;
pub mod todo_item;
pub mod todo_items;
pub mod trace_id;
pub mod validation;

pub use self::error::{ApplicationError, ErrorReason, FieldErrors};
pub use self::result::TodoItemResult;
pub use self::todo_item::{DESCRIPTION_MAX_LENGTH, TodoItem, TodoItemId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
