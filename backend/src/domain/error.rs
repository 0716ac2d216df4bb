//! Application-level error types.
//!
//! These errors are transport agnostic. Handlers return them inside a
//! [`TodoItemResult`](crate::domain::TodoItemResult) and inbound adapters map
//! them to HTTP responses.

use std::collections::BTreeMap;

/// Field name mapped to the human-readable messages reported against it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Stable category describing why a request could not be fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorReason {
    /// A property collides with an existing item.
    Duplicate,
    /// The addressed item does not exist.
    NotFound,
    /// The request failed one or more validation rules.
    Validation,
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Duplicate => "Duplicate",
            Self::NotFound => "NotFound",
            Self::Validation => "Validation",
        })
    }
}

/// Categorised, field-addressable business error.
///
/// ## Invariants
/// - Instances built through the constructors carry at least one field entry,
///   except when a caller deliberately passes an empty map to
///   [`ApplicationError::validation_from_map`].
/// - Instances are immutable once constructed.
///
/// # Examples
/// ```
/// use todo_list_backend::domain::{ApplicationError, ErrorReason};
///
/// let err = ApplicationError::not_found("Id", "4a28c8c5-0a4c-4d3e-9a5d-7f7e5b1c2aa8");
/// assert_eq!(err.reason(), ErrorReason::NotFound);
/// assert_eq!(err.errors()["Id"], vec!["4a28c8c5-0a4c-4d3e-9a5d-7f7e5b1c2aa8"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} error on {}", field_list(.errors))]
pub struct ApplicationError {
    reason: ErrorReason,
    errors: FieldErrors,
}

impl ApplicationError {
    fn single(reason: ErrorReason, property: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(property.into(), vec![message.into()]);
        Self { reason, errors }
    }

    /// A property duplicates one already held by another item.
    pub fn duplicate(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::single(ErrorReason::Duplicate, property, message)
    }

    /// The item addressed by `property` does not exist.
    pub fn not_found(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::single(ErrorReason::NotFound, property, message)
    }

    /// A single validation failure.
    pub fn validation(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::single(ErrorReason::Validation, property, message)
    }

    /// Validation failures already grouped per field; the map is kept as-is.
    pub fn validation_from_map(errors: FieldErrors) -> Self {
        Self {
            reason: ErrorReason::Validation,
            errors,
        }
    }

    /// Failure category.
    #[must_use]
    pub fn reason(&self) -> ErrorReason {
        self.reason
    }

    /// Messages keyed by the offending field.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Consume the error, yielding the field map.
    #[must_use]
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

fn field_list(errors: &FieldErrors) -> String {
    errors.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}
