//! Request dispatch pipeline shared by every todo item use case.
//!
//! Each use case is a [`Request`] handled by a [`RequestHandler`]. The
//! [`ValidationBehavior`] decorator sits in front of a handler and rejects
//! requests that fail their registered validators before any repository is
//! touched.
//!
//! Handlers report business outcomes through the inner [`TodoItemResult`];
//! the outer `Result` is reserved for infrastructure faults, which callers
//! propagate with `?` to the outermost request boundary.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::ports::TodoItemsRepositoryError;
use super::validation::{Validator, group_failures};
use super::{ApplicationError, TodoItemResult};

/// Outcome of dispatching a request: an infrastructure fault, or a business
/// result.
pub type HandlerResult<T> = Result<TodoItemResult<T>, TodoItemsRepositoryError>;

/// A command or query together with the response it produces on success.
pub trait Request: Send + Sync + 'static {
    /// Value produced when the request succeeds.
    type Response: Send + 'static;
}

/// Orchestration unit for one use case.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    /// Process `request` to completion.
    async fn handle(&self, request: R) -> HandlerResult<R::Response>;
}

/// Decorator running every validator registered for `R` before delegating to
/// the wrapped handler.
///
/// With no validators the request passes straight through. Otherwise all
/// failures from all validators are collected, grouped per field, and
/// returned as a single [`ErrorReason::Validation`](super::ErrorReason)
/// error without invoking the wrapped handler.
///
/// # Examples
/// ```
/// use async_trait::async_trait;
/// use todo_list_backend::domain::pipeline::{
///     HandlerResult, Request, RequestHandler, ValidationBehavior,
/// };
///
/// struct Ping;
/// impl Request for Ping {
///     type Response = &'static str;
/// }
///
/// struct Pong;
/// #[async_trait]
/// impl RequestHandler<Ping> for Pong {
///     async fn handle(&self, _request: Ping) -> HandlerResult<&'static str> {
///         Ok(Ok("pong"))
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let pipeline = ValidationBehavior::<Ping, _>::new(Vec::new(), Pong);
/// let outcome = pipeline.handle(Ping).await.expect("no infrastructure fault");
/// assert_eq!(outcome, Ok("pong"));
/// # });
/// ```
pub struct ValidationBehavior<R, H> {
    validators: Vec<Arc<dyn Validator<R>>>,
    inner: H,
}

impl<R, H> ValidationBehavior<R, H> {
    /// Wrap `inner`; validators run in the order given.
    pub fn new(validators: Vec<Arc<dyn Validator<R>>>, inner: H) -> Self {
        Self { validators, inner }
    }
}

#[async_trait]
impl<R, H> RequestHandler<R> for ValidationBehavior<R, H>
where
    R: Request,
    H: RequestHandler<R>,
{
    async fn handle(&self, request: R) -> HandlerResult<R::Response> {
        if self.validators.is_empty() {
            return self.inner.handle(request).await;
        }

        let failures: Vec<_> = self
            .validators
            .iter()
            .flat_map(|validator| validator.validate(&request))
            .collect();

        if !failures.is_empty() {
            debug!(
                failures = failures.len(),
                request = std::any::type_name::<R>(),
                "request rejected by validation"
            );
            return Ok(Err(ApplicationError::validation_from_map(group_failures(
                failures,
            ))));
        }

        self.inner.handle(request).await
    }
}
