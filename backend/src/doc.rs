//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the todo item and health endpoints together with the
//! problem-details schema. Debug builds serve it through Swagger UI.

use utoipa::OpenApi;

use crate::inbound::http::error::ProblemDetails;
use crate::inbound::http::health::{HealthEntry, HealthReport, HealthStatus};
use crate::inbound::http::todo_items::TodoItemBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo list API",
        description = "Create, read and update todo items, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todo_items::get_todo_items,
        crate::inbound::http::todo_items::get_todo_item,
        crate::inbound::http::todo_items::post_todo_item,
        crate::inbound::http::todo_items::put_todo_item,
        crate::inbound::http::health::live,
        crate::inbound::http::health::readiness,
    ),
    components(schemas(TodoItemBody, ProblemDetails, HealthReport, HealthEntry, HealthStatus)),
    tags(
        (name = "todo-items", description = "Todo item operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case::collection("/api/TodoItems")]
    #[case::item("/api/TodoItems/{id}")]
    #[case::liveness("/health")]
    #[case::readiness("/health/dependency")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn todo_item_schema_uses_wire_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("TodoItemBody").expect("TodoItemBody schema");

        assert_object_schema_has_field(schema, "id");
        assert_object_schema_has_field(schema, "description");
        assert_object_schema_has_field(schema, "isCompleted");
    }

    #[rstest]
    fn problem_schema_carries_type_and_trace_id() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("ProblemDetails").expect("ProblemDetails schema");

        assert_object_schema_has_field(schema, "type");
        assert_object_schema_has_field(schema, "traceId");
        assert_object_schema_has_field(schema, "errors");
    }
}
