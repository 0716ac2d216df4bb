//! Problem-details rendering for HTTP responses.
//!
//! Business failures arrive as [`ApplicationError`] values and are turned into
//! 400/404 bodies by [`ProblemDetails::from_application_error`].
//! Infrastructure faults travel as [`InternalServerError`], whose
//! `ResponseError` impl renders the 500 body, so handlers can use `?`.

use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use super::constants::{APPLICATION_PROBLEM_JSON, details, titles, types};
use crate::config::RuntimeEnvironment;
use crate::domain::ports::TodoItemsRepositoryError;
use crate::domain::{ApplicationError, ErrorReason, FieldErrors, TraceId};

/// Result alias for HTTP handlers whose only `Err` is an infrastructure fault.
pub type ApiResult<T> = Result<T, InternalServerError>;

/// RFC 7807 style error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    /// Short summary of the problem class.
    pub title: String,
    /// RFC reference URI for the status.
    #[serde(rename = "type")]
    pub problem_type: String,
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Explanation specific to this occurrence.
    pub detail: String,
    /// Messages keyed by field; empty when the failure is not field-specific.
    #[serde(default)]
    pub errors: FieldErrors,
    /// Correlation identifier of the failing request.
    pub trace_id: Option<String>,
}

impl ProblemDetails {
    fn new(status: StatusCode, title: &str, detail: impl Into<String>, errors: FieldErrors) -> Self {
        let problem_type = match status {
            StatusCode::NOT_FOUND => types::NOT_FOUND,
            status if status.is_server_error() => types::INTERNAL_SERVER_ERROR,
            _ => types::BAD_REQUEST,
        };
        Self {
            title: title.to_owned(),
            problem_type: problem_type.to_owned(),
            status: status.as_u16(),
            detail: detail.into(),
            errors,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// `400` for requests that broke one or more field rules.
    pub fn validation(errors: FieldErrors) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            titles::VALIDATION_ERROR,
            details::SEE_ERRORS,
            errors,
        )
    }

    /// `400` for an id or description that is already taken.
    pub fn duplicate(errors: FieldErrors) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            titles::VALIDATION_ERROR,
            details::PROPERTY_DUPLICATE,
            errors,
        )
    }

    /// `404` for an unknown item.
    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            titles::NOT_FOUND,
            details::ID_DOES_NOT_EXIST,
            FieldErrors::new(),
        )
    }

    /// The `id` path segment disagrees with the `id` in the body.
    pub fn id_mismatch() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            titles::VALIDATION_ERROR,
            details::ID_MISMATCH,
            FieldErrors::new(),
        )
    }

    /// `500` carrying `detail`, which callers redact outside development.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            titles::INTERNAL_SERVER_ERROR,
            detail,
            FieldErrors::new(),
        )
    }

    /// Map a business failure onto its problem body.
    ///
    /// # Examples
    /// ```
    /// use todo_list_backend::domain::ApplicationError;
    /// use todo_list_backend::inbound::http::error::ProblemDetails;
    ///
    /// let problem = ProblemDetails::from_application_error(&ApplicationError::duplicate("Id", "x"));
    /// assert_eq!(problem.status, 400);
    /// assert_eq!(problem.detail, "The provided property is a duplicate.");
    /// ```
    pub fn from_application_error(error: &ApplicationError) -> Self {
        match error.reason() {
            ErrorReason::Duplicate => Self::duplicate(error.errors().clone()),
            ErrorReason::NotFound => Self::not_found(),
            ErrorReason::Validation => Self::validation(error.errors().clone()),
        }
    }

    /// The `status` field as a [`StatusCode`].
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Render as an `application/problem+json` response.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(APPLICATION_PROBLEM_JSON)
            .json(self)
    }
}

/// Render a business failure, logging it at `warn`.
pub fn application_error_response(error: &ApplicationError) -> HttpResponse {
    let problem = ProblemDetails::from_application_error(error);
    warn!(
        reason = %error.reason(),
        trace_id = problem.trace_id.as_deref().unwrap_or_default(),
        "request failed"
    );
    problem.into_response()
}

/// Render the path/body id disagreement on `PUT`.
pub fn id_mismatch_response() -> HttpResponse {
    let problem = ProblemDetails::id_mismatch();
    warn!(
        reason = %ErrorReason::Validation,
        trace_id = problem.trace_id.as_deref().unwrap_or_default(),
        "request failed: id mismatch"
    );
    problem.into_response()
}

/// An infrastructure fault surfaced at the HTTP boundary.
///
/// The error text reaches the client only in development.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct InternalServerError {
    source: TodoItemsRepositoryError,
    expose_detail: bool,
}

impl InternalServerError {
    /// Wrap `source`, exposing its text only in development.
    pub fn new(source: TodoItemsRepositoryError, environment: RuntimeEnvironment) -> Self {
        Self {
            source,
            expose_detail: environment.is_development(),
        }
    }
}

impl ResponseError for InternalServerError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self.source, "unhandled infrastructure failure");
        let detail = if self.expose_detail {
            self.source.to_string()
        } else {
            details::ERROR_PROCESSING_REQUEST.to_owned()
        };
        ProblemDetails::internal(detail).into_response()
    }
}

fn single_field(field: &str, message: String) -> FieldErrors {
    FieldErrors::from([(field.to_owned(), vec![message])])
}

/// Render malformed or mistyped JSON bodies as validation problems.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let problem = ProblemDetails::validation(single_field("body", err.to_string()));
    InternalError::from_response(err, problem.into_response()).into()
}

/// Render unparsable path identifiers as validation problems.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let problem = ProblemDetails::validation(single_field("id", err.to_string()));
    InternalError::from_response(err, problem.into_response()).into()
}

#[cfg(test)]
mod tests;
