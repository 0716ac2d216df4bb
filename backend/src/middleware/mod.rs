//! Request middleware.

pub mod cors;
pub mod trace;

pub use cors::cors;
pub use trace::Trace;
