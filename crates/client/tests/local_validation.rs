//! Integration tests for the fail-fast validation layer.
//!
//! Each call here must be rejected locally, before the client touches
//! the network; the configured host does not exist, so any request that
//! slipped through would surface as a network error instead of the
//! expected validation error.

use assert_matches::assert_matches;

use habitica_client::{ApiError, GroupMembersQuery, HabiticaApi, HabiticaConfig};
use habitica_core::model::{Direction, Task, TaskType};
use habitica_core::CoreError;

fn api() -> HabiticaApi {
    let config = HabiticaConfig::authenticated(
        "9716b404-5107-4fc5-8d30-4a2a62e0b3bf",
        "0ca5a44c-3e57-4a39-be4f-7595923a5f27",
    )
    .with_base_url("http://unroutable.invalid");
    HabiticaApi::new(config).expect("config is valid")
}

#[tokio::test]
async fn empty_task_id_fails_before_the_network() {
    let err = api().score_task("  ", Direction::Up).await.unwrap_err();
    assert_matches!(err, ApiError::Core(CoreError::Validation(msg)) if msg.contains("task id"));
}

#[tokio::test]
async fn create_task_without_type_fails_before_the_network() {
    let task = Task {
        text: Some("Water the plants".to_string()),
        ..Task::default()
    };
    let err = api().create_task(&task).await.unwrap_err();
    assert_matches!(err, ApiError::Core(CoreError::Validation(_)));
}

#[tokio::test]
async fn create_task_with_unknown_type_fails_before_the_network() {
    let task = Task {
        text: Some("Water the plants".to_string()),
        kind: Some(TaskType::Other("questline".to_string())),
        ..Task::default()
    };
    let err = api().create_task(&task).await.unwrap_err();
    assert_matches!(err, ApiError::Core(CoreError::Validation(_)));
}

#[tokio::test]
async fn empty_tag_name_fails_before_the_network() {
    let err = api().create_tag("").await.unwrap_err();
    assert_matches!(err, ApiError::Core(CoreError::Validation(_)));
}

#[tokio::test]
async fn zero_point_bulk_allocation_fails_before_the_network() {
    let err = api()
        .allocate_bulk_stat_points(0, 0, 0, 0)
        .await
        .unwrap_err();
    assert_matches!(err, ApiError::Core(CoreError::Validation(_)));
}

#[tokio::test]
async fn out_of_range_member_limit_fails_before_the_network() {
    let query = GroupMembersQuery {
        limit: Some(61),
        ..GroupMembersQuery::default()
    };
    let err = api().get_group_members(None, query).await.unwrap_err();
    assert_matches!(err, ApiError::Core(CoreError::Validation(_)));
}

#[tokio::test]
async fn empty_quest_key_fails_before_the_network() {
    let err = api().invite_to_quest(None, "").await.unwrap_err();
    assert_matches!(err, ApiError::Core(CoreError::Validation(_)));
}
