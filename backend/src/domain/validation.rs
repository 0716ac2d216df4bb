//! Request validators and the shared field rules they are built from.

use super::todo_item::{DESCRIPTION_MAX_LENGTH, TodoItemId};
use super::FieldErrors;

/// Field name reported for identifier failures.
pub const ID_FIELD: &str = "Id";
/// Field name reported for description failures.
pub const DESCRIPTION_FIELD: &str = "Description";

/// A single rule violation against a request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Request field the rule applies to, e.g. `Description`.
    pub property: String,
    /// Human-readable explanation returned to the client.
    pub message: String,
}

impl ValidationFailure {
    /// Build a failure for `property`.
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }
}

/// Rule set checked against requests of type `R` before they reach a handler.
///
/// An empty result means the request satisfied every rule.
pub trait Validator<R>: Send + Sync {
    /// Every rule `request` breaks.
    fn validate(&self, request: &R) -> Vec<ValidationFailure>;
}

/// Group failures by field, keeping each field's messages in the order they
/// were reported.
///
/// # Examples
/// ```
/// use todo_list_backend::domain::validation::{ValidationFailure, group_failures};
///
/// let grouped = group_failures(vec![
///     ValidationFailure::new("Id", "first"),
///     ValidationFailure::new("Id", "second"),
/// ]);
/// assert_eq!(grouped["Id"], vec!["first", "second"]);
/// ```
pub fn group_failures(failures: impl IntoIterator<Item = ValidationFailure>) -> FieldErrors {
    let mut grouped = FieldErrors::new();
    for ValidationFailure { property, message } in failures {
        grouped.entry(property).or_default().push(message);
    }
    grouped
}

/// The identifier must not be the nil UUID.
pub fn validate_id(id: &TodoItemId) -> Option<ValidationFailure> {
    id.is_nil()
        .then(|| ValidationFailure::new(ID_FIELD, format!("'{ID_FIELD}' must not be empty.")))
}

/// The description must contain a non-whitespace character and stay within
/// [`DESCRIPTION_MAX_LENGTH`] characters.
pub fn validate_description(description: &str) -> Option<ValidationFailure> {
    if description.trim().is_empty() {
        return Some(ValidationFailure::new(
            DESCRIPTION_FIELD,
            format!("'{DESCRIPTION_FIELD}' must not be empty."),
        ));
    }

    let length = description.chars().count();
    (length > DESCRIPTION_MAX_LENGTH).then(|| {
        ValidationFailure::new(
            DESCRIPTION_FIELD,
            format!(
                "The length of '{DESCRIPTION_FIELD}' must be {DESCRIPTION_MAX_LENGTH} characters or fewer. You entered {length} characters."
            ),
        )
    })
}
