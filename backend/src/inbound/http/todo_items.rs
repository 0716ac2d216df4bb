//! Todo item HTTP handlers.
//!
//! ```text
//! GET  /api/TodoItems
//! GET  /api/TodoItems/{id}
//! POST /api/TodoItems
//! PUT  /api/TodoItems/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::todo_items::{
    CreateTodoItemCommand, GetTodoItemQuery, GetTodoItemsQuery, UpdateTodoItemCommand,
};
use crate::domain::{TodoItem, TodoItemId};
use crate::inbound::http::error::{
    ApiResult, ProblemDetails, application_error_response, id_mismatch_response,
    json_error_handler, path_error_handler,
};
use crate::inbound::http::state::HttpState;

/// Base path of the collection.
pub const TODO_ITEMS_PATH: &str = "/api/TodoItems";

/// Wire shape of a todo item, used for request and response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemBody {
    pub id: Uuid,
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl From<TodoItem> for TodoItemBody {
    fn from(item: TodoItem) -> Self {
        Self {
            id: *item.id().as_uuid(),
            is_completed: item.is_completed(),
            description: item.description().to_owned(),
        }
    }
}

/// List outstanding todo items.
#[utoipa::path(
    get,
    path = "/api/TodoItems",
    responses(
        (status = 200, description = "Incomplete todo items", body = [TodoItemBody]),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    ),
    tags = ["todo-items"],
    operation_id = "getTodoItems"
)]
#[get("")]
pub async fn get_todo_items(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    info!("getting all todo items");
    let outcome = state
        .handlers
        .get_many
        .handle(GetTodoItemsQuery)
        .await
        .map_err(|err| state.internal_error(err))?;

    Ok(match outcome {
        Ok(response) => {
            let body: Vec<TodoItemBody> = response.items.into_iter().map(Into::into).collect();
            info!(count = body.len(), "returning todo items");
            HttpResponse::Ok().json(body)
        }
        Err(error) => application_error_response(&error),
    })
}

/// Fetch one todo item.
#[utoipa::path(
    get,
    path = "/api/TodoItems/{id}",
    params(("id" = Uuid, Path, description = "Todo item identifier")),
    responses(
        (status = 200, description = "Todo item", body = TodoItemBody),
        (status = 400, description = "Invalid identifier", body = ProblemDetails),
        (status = 404, description = "No such todo item", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    ),
    tags = ["todo-items"],
    operation_id = "getTodoItem"
)]
#[get("/{id}")]
pub async fn get_todo_item(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let id = TodoItemId::from_uuid(path.into_inner());
    info!(%id, "getting todo item");

    let outcome = state
        .handlers
        .get_one
        .handle(GetTodoItemQuery { id })
        .await
        .map_err(|err| state.internal_error(err))?;

    Ok(match outcome {
        Ok(response) => HttpResponse::Ok().json(TodoItemBody::from(response.item)),
        Err(error) => application_error_response(&error),
    })
}

/// Replace a todo item's description and completion state.
#[utoipa::path(
    put,
    path = "/api/TodoItems/{id}",
    params(("id" = Uuid, Path, description = "Todo item identifier")),
    request_body = TodoItemBody,
    responses(
        (status = 204, description = "Todo item updated"),
        (status = 400, description = "Invalid request or id mismatch", body = ProblemDetails),
        (status = 404, description = "No such todo item", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    ),
    tags = ["todo-items"],
    operation_id = "putTodoItem"
)]
#[put("/{id}")]
pub async fn put_todo_item(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<TodoItemBody>,
) -> ApiResult<HttpResponse> {
    let path_id = path.into_inner();
    let body = payload.into_inner();
    if path_id != body.id {
        return Ok(id_mismatch_response());
    }

    let id = TodoItemId::from_uuid(body.id);
    info!(%id, "updating todo item");
    let outcome = state
        .handlers
        .update
        .handle(UpdateTodoItemCommand {
            id,
            description: body.description,
            is_completed: body.is_completed,
        })
        .await
        .map_err(|err| state.internal_error(err))?;

    Ok(match outcome {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(error) => application_error_response(&error),
    })
}

/// Create a todo item with a caller-chosen id.
#[utoipa::path(
    post,
    path = "/api/TodoItems",
    request_body = TodoItemBody,
    responses(
        (status = 201, description = "Todo item created", body = TodoItemBody,
            headers(("Location" = String, description = "URL of the new item"))),
        (status = 400, description = "Invalid or duplicate todo item", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    ),
    tags = ["todo-items"],
    operation_id = "postTodoItem"
)]
#[post("")]
pub async fn post_todo_item(
    state: web::Data<HttpState>,
    payload: web::Json<TodoItemBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let id = TodoItemId::from_uuid(body.id);
    info!(%id, "creating todo item");

    let outcome = state
        .handlers
        .create
        .handle(CreateTodoItemCommand {
            id,
            description: body.description,
            is_completed: body.is_completed,
        })
        .await
        .map_err(|err| state.internal_error(err))?;

    Ok(match outcome {
        Ok(response) => {
            let created = TodoItemBody::from(response.item);
            info!(id = %created.id, "returning created todo item");
            HttpResponse::Created()
                .insert_header((header::LOCATION, format!("{TODO_ITEMS_PATH}/{}", created.id)))
                .json(created)
        }
        Err(error) => application_error_response(&error),
    })
}

/// Register the todo item routes under [`TODO_ITEMS_PATH`].
///
/// Body and path extraction failures are rendered as validation problems.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(TODO_ITEMS_PATH)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(get_todo_items)
            .service(post_todo_item)
            .service(get_todo_item)
            .service(put_todo_item),
    );
}

#[cfg(test)]
#[path = "todo_items_tests.rs"]
mod tests;
