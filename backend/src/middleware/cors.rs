//! Cross-origin policy for the browser front end.
//!
//! Any origin, method and header is accepted, so the single-page client can
//! be served from a different host than the API.

use actix_cors::Cors;

/// Permissive CORS middleware; wrap the app with it.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use todo_list_backend::middleware::cors;
///
/// let _app = App::new().wrap(cors());
/// ```
#[must_use]
pub fn cors() -> Cors {
    Cors::permissive()
}
