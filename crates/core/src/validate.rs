//! Argument validation, applied before any network round trip.
//!
//! Each function returns [`CoreError::Validation`] with a message naming
//! the rejected argument, so clearly invalid input fails fast.

use uuid::Uuid;

use crate::error::CoreError;
use crate::model::{Task, TaskType};

/// Maximum `limit` accepted by the group-members endpoint.
pub const PAGE_LIMIT: u32 = 60;

/// Validate that credentials are supplied both-or-neither.
pub fn validate_credentials(
    api_user: Option<&str>,
    api_key: Option<&str>,
) -> Result<(), CoreError> {
    match (api_user, api_key) {
        (Some(_), None) | (None, Some(_)) => Err(CoreError::Validation(
            "'api_user' and 'api_key' must be provided together".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Validate an `x-client` header value: the first 36 characters must be
/// the maintainer's user id in UUID format.
pub fn validate_x_client(x_client: &str) -> Result<(), CoreError> {
    let id = x_client.get(..36).unwrap_or(x_client);
    if id.parse::<Uuid>().is_err() {
        return Err(CoreError::Validation(format!(
            "x-client must start with a UUID-format user id, got: '{x_client}'"
        )));
    }
    Ok(())
}

/// Validate that an identifier (task id or alias, quest key) is non-empty.
pub fn validate_identifier(name: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Validate a tag name.
pub fn validate_tag_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Tag name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a task payload for creation: it needs text and a concrete
/// task type.
pub fn validate_task_for_create(task: &Task) -> Result<(), CoreError> {
    match task.text.as_deref() {
        Some(text) if !text.trim().is_empty() => {}
        _ => {
            return Err(CoreError::Validation(
                "Task text must not be empty".to_string(),
            ))
        }
    }
    match &task.kind {
        Some(TaskType::Other(raw)) => Err(CoreError::Validation(format!(
            "Task type must be habit, daily, todo or reward, got: '{raw}'"
        ))),
        Some(_) => Ok(()),
        None => Err(CoreError::Validation(
            "Task type must be set on creation".to_string(),
        )),
    }
}

/// Validate a bulk stat allocation: no negative counts, at least one
/// point overall.
pub fn validate_bulk_allocation(
    int_points: i32,
    str_points: i32,
    con_points: i32,
    per_points: i32,
) -> Result<(), CoreError> {
    let points = [int_points, str_points, con_points, per_points];
    if points.iter().any(|p| *p < 0) {
        return Err(CoreError::Validation(
            "Stat point counts must not be negative".to_string(),
        ));
    }
    if points.iter().sum::<i32>() == 0 {
        return Err(CoreError::Validation(
            "At least one stat point must be allocated".to_string(),
        ));
    }
    Ok(())
}

/// Validate the page size for group member listing.
pub fn validate_page_limit(limit: u32) -> Result<(), CoreError> {
    if limit < 1 || limit > PAGE_LIMIT {
        return Err(CoreError::Validation(format!(
            "The 'limit' parameter must be between 1 and {PAGE_LIMIT}, got {limit}"
        )));
    }
    Ok(())
}
