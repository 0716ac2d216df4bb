//! HTTP inbound adapter exposing the REST endpoints.

pub mod constants;
pub mod error;
pub mod health;
pub mod state;
pub mod todo_items;

pub use error::ApiResult;
