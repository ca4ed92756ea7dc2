//! Tag records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A label attachable to any number of tasks. Tasks reference tags by id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    /// Set when the tag was created by joining a challenge.
    pub challenge: Option<bool>,
    pub group: Option<String>,
}
