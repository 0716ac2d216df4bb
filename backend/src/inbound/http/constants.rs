//! Fixed strings used in problem responses.

/// Media type of every error body.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

pub mod titles {
    pub const NOT_FOUND: &str = "The specified resource was not found.";
    pub const VALIDATION_ERROR: &str = "One or more validation errors has occured.";
    pub const INTERNAL_SERVER_ERROR: &str = "An error occurred.";
}

pub mod details {
    pub const ID_MISMATCH: &str = "The 'id' in the path does not match the item 'id'";
    pub const ID_DOES_NOT_EXIST: &str = "The 'id' provided does not exist.";
    pub const PROPERTY_DUPLICATE: &str = "The provided property is a duplicate.";
    pub const SEE_ERRORS: &str = "See the errors property for details.";
    pub const ERROR_PROCESSING_REQUEST: &str = "An error occurred processing your request.";
}

/// RFC 7231 section links used as the problem `type`.
pub mod types {
    pub const BAD_REQUEST: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";
    pub const NOT_FOUND: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.4";
    pub const INTERNAL_SERVER_ERROR: &str = "https://tools.ietf.org/html/rfc7231#section-6.6.1";
}
