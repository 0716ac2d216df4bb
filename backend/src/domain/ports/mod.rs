//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod dependency_health;
mod todo_items_read_repository;
mod todo_items_write_repository;

pub use dependency_health::DependencyHealthCheck;
#[cfg(test)]
pub use dependency_health::MockDependencyHealthCheck;
#[cfg(test)]
pub use todo_items_read_repository::MockTodoItemsReadRepository;
pub use todo_items_read_repository::{TodoItemsReadRepository, TodoItemsRepositoryError};
#[cfg(test)]
pub use todo_items_write_repository::MockTodoItemsWriteRepository;
pub use todo_items_write_repository::TodoItemsWriteRepository;
