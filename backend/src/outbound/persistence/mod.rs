//! PostgreSQL persistence adapters built on Diesel.
//!
//! Row structs and the table schema stay private to this module; callers
//! only see the port implementations, the pool, and the migration runner.
//!
//! ```ignore
//! use todo_list_backend::outbound::persistence::{DbPool, DieselTodoItemsRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/todo")).await?;
//! let repo = DieselTodoItemsRepository::new(pool);
//! ```

mod database_health;
mod diesel_basic_error_mapping;
mod diesel_todo_items_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use database_health::{DATABASE_CHECK_NAME, DatabaseHealthCheck};
pub use diesel_todo_items_repository::DieselTodoItemsRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
