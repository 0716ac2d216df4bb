//! Outcome type returned by every todo item handler.

use super::ApplicationError;

/// Either the handler's response or the business error explaining why it
/// could not be produced.
///
/// Build the success branch with `Ok` and the failure branch with `Err`;
/// there is no implicit conversion from a bare value or error.
///
/// # Examples
/// ```
/// use todo_list_backend::domain::{ApplicationError, TodoItemResult};
///
/// let found: TodoItemResult<u8> = Ok(7);
/// assert!(!found.is_err());
///
/// let missing: TodoItemResult<u8> = Err(ApplicationError::not_found("Id", "7"));
/// assert!(missing.is_err());
/// ```
pub type TodoItemResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorReason;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Payload(&'static str);

    #[rstest]
    fn success_exposes_only_the_value() {
        let result: TodoItemResult<Payload> = Ok(Payload("done"));

        assert!(!result.is_err());
        assert!(result.as_ref().err().is_none());
        assert_eq!(result.ok(), Some(Payload("done")));
    }

    #[rstest]
    fn failure_exposes_only_the_error() {
        let error = ApplicationError::duplicate("Id", "abc");
        let result: TodoItemResult<Payload> = Err(error.clone());

        assert!(result.is_err());
        assert!(result.as_ref().ok().is_none());
        let observed = result.err().expect("error branch");
        assert_eq!(observed, error);
        assert_eq!(observed.reason(), ErrorReason::Duplicate);
    }
}
