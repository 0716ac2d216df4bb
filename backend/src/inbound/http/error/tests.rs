//! Tests for problem-details rendering.

use actix_web::body::to_bytes;
use actix_web::http::header::CONTENT_TYPE;
use rstest::rstest;
use uuid::Uuid;

use super::*;

async fn render(response: HttpResponse) -> (StatusCode, String, ProblemDetails) {
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("read problem body");
    let problem = serde_json::from_slice(&bytes).expect("problem json");
    (status, content_type, problem)
}

#[rstest]
#[case::duplicate(
    ApplicationError::duplicate("Description", "Buy milk"),
    StatusCode::BAD_REQUEST,
    "The provided property is a duplicate."
)]
#[case::validation(
    ApplicationError::validation("Id", "'Id' must not be empty."),
    StatusCode::BAD_REQUEST,
    "See the errors property for details."
)]
#[actix_web::test]
async fn field_errors_are_carried_into_400_bodies(
    #[case] error: ApplicationError,
    #[case] expected_status: StatusCode,
    #[case] expected_detail: &str,
) {
    let (status, content_type, problem) = render(application_error_response(&error)).await;

    assert_eq!(status, expected_status);
    assert_eq!(content_type, "application/problem+json");
    assert_eq!(problem.title, "One or more validation errors has occured.");
    assert_eq!(problem.problem_type, types::BAD_REQUEST);
    assert_eq!(problem.status, 400);
    assert_eq!(problem.detail, expected_detail);
    assert_eq!(&problem.errors, error.errors());
}

#[actix_web::test]
async fn not_found_has_fixed_title_and_no_field_errors() {
    let error = ApplicationError::not_found("Id", Uuid::new_v4().to_string());
    let (status, _, problem) = render(application_error_response(&error)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem.title, "The specified resource was not found.");
    assert_eq!(problem.detail, "The 'id' provided does not exist.");
    assert_eq!(problem.problem_type, types::NOT_FOUND);
    assert!(problem.errors.is_empty());
}

#[actix_web::test]
async fn id_mismatch_is_a_validation_problem_without_field_errors() {
    let (status, _, problem) = render(id_mismatch_response()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        problem.detail,
        "The 'id' in the path does not match the item 'id'"
    );
    assert!(problem.errors.is_empty());
}

#[rstest]
#[case::development(RuntimeEnvironment::Development, "todo item repository query failed: boom")]
#[case::production(RuntimeEnvironment::Production, "An error occurred processing your request.")]
#[actix_web::test]
async fn internal_errors_redact_outside_development(
    #[case] environment: RuntimeEnvironment,
    #[case] expected_detail: &str,
) {
    let error = InternalServerError::new(TodoItemsRepositoryError::query("boom"), environment);
    assert_eq!(ResponseError::status_code(&error), StatusCode::INTERNAL_SERVER_ERROR);

    let (status, content_type, problem) = render(error.error_response()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type, "application/problem+json");
    assert_eq!(problem.title, "An error occurred.");
    assert_eq!(problem.problem_type, types::INTERNAL_SERVER_ERROR);
    assert_eq!(problem.detail, expected_detail);
}

#[actix_web::test]
async fn problem_quotes_the_trace_id_in_scope() {
    let trace_id: TraceId = "3d5e7f3c-6c8e-4f0e-8a7e-5d0c2b1a9f44"
        .parse()
        .expect("valid UUID");

    let problem = TraceId::scope(trace_id, async { ProblemDetails::not_found() }).await;

    assert_eq!(
        problem.trace_id.as_deref(),
        Some("3d5e7f3c-6c8e-4f0e-8a7e-5d0c2b1a9f44")
    );
}

#[rstest]
fn serialised_shape_uses_camel_case_and_type_key() {
    let problem = ProblemDetails::validation(FieldErrors::from([(
        "Id".to_owned(),
        vec!["bad".to_owned()],
    )]));
    let value = serde_json::to_value(&problem).expect("serialise problem");

    assert_eq!(value["type"], types::BAD_REQUEST);
    assert_eq!(value["errors"]["Id"][0], "bad");
    assert!(value.get("traceId").is_some());
    assert!(value.get("problem_type").is_none());
}
