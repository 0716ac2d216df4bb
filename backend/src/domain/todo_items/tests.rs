//! Tests for the todo item use cases and their validation wiring.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    MockTodoItemsReadRepository, MockTodoItemsWriteRepository, TodoItemsRepositoryError,
};
use crate::domain::{ApplicationError, ErrorReason, TodoItem, TodoItemId};

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[fixture]
fn clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

fn stored_item(id: TodoItemId, description: &str, is_completed: bool) -> TodoItem {
    let earlier = fixture_timestamp() - chrono::Duration::hours(1);
    TodoItem::new(id, description, is_completed, earlier, earlier)
}

fn create_command(description: &str) -> CreateTodoItemCommand {
    CreateTodoItemCommand {
        id: TodoItemId::random(),
        description: description.to_owned(),
        is_completed: false,
    }
}

fn untouched_writer() -> MockTodoItemsWriteRepository {
    let mut writer = MockTodoItemsWriteRepository::new();
    writer.expect_create().times(0);
    writer.expect_update().times(0);
    writer
}

#[rstest]
#[tokio::test]
async fn create_persists_new_item_with_clock_timestamps(clock: Arc<dyn Clock>) {
    let command = create_command("Buy milk");
    let expected_id = command.id;

    let mut reader = MockTodoItemsReadRepository::new();
    reader.expect_find_by_id().times(1).return_once(|_| Ok(false));
    reader
        .expect_find_by_description()
        .withf(|description| description == "Buy milk")
        .times(1)
        .return_once(|_| Ok(false));

    let mut writer = MockTodoItemsWriteRepository::new();
    writer
        .expect_create()
        .times(1)
        .returning(|item| Ok(item));

    let handler = CreateTodoItemHandler::new(Arc::new(reader), Arc::new(writer), clock);
    let response = handler
        .handle(command)
        .await
        .expect("repository healthy")
        .expect("item created");

    assert_eq!(response.item.id(), expected_id);
    assert_eq!(response.item.description(), "Buy milk");
    assert!(!response.item.is_completed());
    assert_eq!(response.item.created_at(), fixture_timestamp());
    assert_eq!(response.item.modified_at(), fixture_timestamp());
}

#[rstest]
#[tokio::test]
async fn create_rejects_duplicate_id_without_writing(clock: Arc<dyn Clock>) {
    let command = create_command("Buy milk");
    let id = command.id;

    let mut reader = MockTodoItemsReadRepository::new();
    reader.expect_find_by_id().times(1).return_once(|_| Ok(true));
    reader.expect_find_by_description().times(0);

    let handler = CreateTodoItemHandler::new(Arc::new(reader), Arc::new(untouched_writer()), clock);
    let error = handler
        .handle(command)
        .await
        .expect("repository healthy")
        .expect_err("duplicate id");

    assert_eq!(error, ApplicationError::duplicate("Id", id.to_string()));
}

#[rstest]
#[tokio::test]
async fn create_rejects_duplicate_trimmed_description_without_writing(clock: Arc<dyn Clock>) {
    let command = create_command("  Buy milk  ");

    let mut reader = MockTodoItemsReadRepository::new();
    reader.expect_find_by_id().times(1).return_once(|_| Ok(false));
    reader
        .expect_find_by_description()
        .withf(|description| description == "Buy milk")
        .times(1)
        .return_once(|_| Ok(true));

    let handler = CreateTodoItemHandler::new(Arc::new(reader), Arc::new(untouched_writer()), clock);
    let error = handler
        .handle(command)
        .await
        .expect("repository healthy")
        .expect_err("duplicate description");

    assert_eq!(error, ApplicationError::duplicate("Description", "Buy milk"));
}

#[rstest]
#[tokio::test]
async fn create_propagates_repository_faults(clock: Arc<dyn Clock>) {
    let mut reader = MockTodoItemsReadRepository::new();
    reader
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(TodoItemsRepositoryError::connection("refused")));

    let handler = CreateTodoItemHandler::new(Arc::new(reader), Arc::new(untouched_writer()), clock);
    let fault = handler
        .handle(create_command("Buy milk"))
        .await
        .expect_err("infrastructure fault");

    assert_eq!(fault, TodoItemsRepositoryError::connection("refused"));
}

#[rstest]
#[tokio::test]
async fn update_reports_missing_item_without_writing(clock: Arc<dyn Clock>) {
    let id = TodoItemId::random();
    let mut reader = MockTodoItemsReadRepository::new();
    reader.expect_get_by_id().times(1).return_once(|_| Ok(None));

    let handler = UpdateTodoItemHandler::new(Arc::new(reader), Arc::new(untouched_writer()), clock);
    let error = handler
        .handle(UpdateTodoItemCommand {
            id,
            description: "Test".to_owned(),
            is_completed: false,
        })
        .await
        .expect("repository healthy")
        .expect_err("missing item");

    assert_eq!(error.reason(), ErrorReason::NotFound);
    assert_eq!(error.errors()["Id"], vec![id.to_string()]);
}

#[rstest]
#[case::complete(false, true)]
#[case::reopen(true, false)]
#[case::stays_open(false, false)]
#[tokio::test]
async fn update_applies_requested_state(
    clock: Arc<dyn Clock>,
    #[case] stored_completed: bool,
    #[case] requested_completed: bool,
) {
    let id = TodoItemId::random();
    let stored = stored_item(id, "Old text", stored_completed);
    let created_at = stored.created_at();

    let mut reader = MockTodoItemsReadRepository::new();
    reader
        .expect_get_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));

    let mut writer = MockTodoItemsWriteRepository::new();
    writer
        .expect_update()
        .withf(move |item| {
            item.id() == id
                && item.description() == "New text"
                && item.is_completed() == requested_completed
                && item.created_at() == created_at
                && item.modified_at() == fixture_timestamp()
        })
        .times(1)
        .returning(|_| Ok(()));

    let handler = UpdateTodoItemHandler::new(Arc::new(reader), Arc::new(writer), clock);
    let response = handler
        .handle(UpdateTodoItemCommand {
            id,
            description: "New text".to_owned(),
            is_completed: requested_completed,
        })
        .await
        .expect("repository healthy");

    assert_eq!(response, Ok(UpdateTodoItemResponse));
}

#[rstest]
#[tokio::test]
async fn get_one_returns_stored_item() {
    let id = TodoItemId::random();
    let stored = stored_item(id, "Buy milk", true);
    let expected = stored.clone();

    let mut reader = MockTodoItemsReadRepository::new();
    reader
        .expect_get_by_id()
        .withf(move |candidate| *candidate == id)
        .times(1)
        .return_once(move |_| Ok(Some(stored)));

    let handler = GetTodoItemHandler::new(Arc::new(reader));
    let response = handler
        .handle(GetTodoItemQuery { id })
        .await
        .expect("repository healthy")
        .expect("item found");

    assert_eq!(response.item, expected);
}

#[rstest]
#[tokio::test]
async fn get_one_reports_missing_item() {
    let id = TodoItemId::random();
    let mut reader = MockTodoItemsReadRepository::new();
    reader.expect_get_by_id().times(1).return_once(|_| Ok(None));

    let handler = GetTodoItemHandler::new(Arc::new(reader));
    let error = handler
        .handle(GetTodoItemQuery { id })
        .await
        .expect("repository healthy")
        .expect_err("missing item");

    assert_eq!(error, ApplicationError::not_found("Id", id.to_string()));
}

#[rstest]
#[tokio::test]
async fn get_many_returns_what_the_repository_lists() {
    let open = vec![
        stored_item(TodoItemId::random(), "Buy milk", false),
        stored_item(TodoItemId::random(), "Walk dog", false),
    ];
    let expected = open.clone();

    let mut reader = MockTodoItemsReadRepository::new();
    reader.expect_get_all().times(1).return_once(move || Ok(open));

    let handler = GetTodoItemsHandler::new(Arc::new(reader));
    let response = handler
        .handle(GetTodoItemsQuery)
        .await
        .expect("repository healthy")
        .expect("listing succeeds");

    assert_eq!(response.items, expected);
    assert!(response.items.iter().all(|item| !item.is_completed()));
}

#[rstest]
#[tokio::test]
async fn wired_create_rejects_invalid_command_before_repositories(clock: Arc<dyn Clock>) {
    let mut reader = MockTodoItemsReadRepository::new();
    reader.expect_find_by_id().times(0);
    reader.expect_find_by_description().times(0);

    let handlers = TodoItemHandlers::new(Arc::new(reader), Arc::new(untouched_writer()), clock);
    let error = handlers
        .create
        .handle(CreateTodoItemCommand {
            id: TodoItemId::from_uuid(Uuid::nil()),
            description: "   ".to_owned(),
            is_completed: false,
        })
        .await
        .expect("repository healthy")
        .expect_err("invalid command");

    assert_eq!(error.reason(), ErrorReason::Validation);
    assert_eq!(error.errors()["Id"], vec!["'Id' must not be empty.".to_owned()]);
    assert_eq!(
        error.errors()["Description"],
        vec!["'Description' must not be empty.".to_owned()]
    );
}

#[rstest]
#[tokio::test]
async fn wired_get_one_rejects_nil_id(clock: Arc<dyn Clock>) {
    let mut reader = MockTodoItemsReadRepository::new();
    reader.expect_get_by_id().times(0);

    let handlers = TodoItemHandlers::new(Arc::new(reader), Arc::new(untouched_writer()), clock);
    let error = handlers
        .get_one
        .handle(GetTodoItemQuery {
            id: TodoItemId::from_uuid(Uuid::nil()),
        })
        .await
        .expect("repository healthy")
        .expect_err("nil id");

    assert_eq!(error.reason(), ErrorReason::Validation);
    assert_eq!(error.errors().len(), 1);
}

#[rstest]
#[tokio::test]
async fn wired_get_many_has_no_validation_stage(clock: Arc<dyn Clock>) {
    let mut reader = MockTodoItemsReadRepository::new();
    reader.expect_get_all().times(1).return_once(|| Ok(Vec::new()));

    let handlers = TodoItemHandlers::new(Arc::new(reader), Arc::new(untouched_writer()), clock);
    let response = handlers
        .get_many
        .handle(GetTodoItemsQuery)
        .await
        .expect("repository healthy")
        .expect("listing succeeds");

    assert!(response.items.is_empty());
}
