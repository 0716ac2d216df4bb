//! Todo list backend library.
//!
//! The domain holds the request pipeline and business rules; `inbound` and
//! `outbound` adapt it to HTTP and storage respectively.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
