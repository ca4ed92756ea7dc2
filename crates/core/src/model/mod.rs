//! Typed mirrors of the Habitica v3 API JSON shapes.
//!
//! Every endpoint wraps its payload in a common envelope
//! (`{"success": ..., "data": ..., ...}`), modeled by [`ApiResponse`].
//! Records are permissive on decode: unknown server fields are ignored
//! and optional fields default, so new server-side content never breaks
//! deserialization. Enumerated wire values carry an explicit fallback
//! variant holding the raw string (see [`task::TaskType`]).

mod datetime;
mod misc;
mod tag;
mod task;
mod user;

pub use misc::{
    ClassSystemData, GroupMember, ItemDrop, LoginData, QuestData, QuestProgress,
    QuestScoreProgress, ScoreData, ScoreExtras,
};
pub use tag::Tag;
pub use task::{
    Attribute, ChallengeBroken, ChecklistItem, Direction, Frequency, HistoryEntry, Language,
    Reminder, Repeat, Skill, Task, TaskChallenge, TaskData, TaskFilter, TaskGroup, TaskPriority,
    TaskType,
};
pub use user::{
    AuthTimestamps, EquippedGear, GearItems, HabiticaClass, HairPreferences, LocalAuth, PartyQuest,
    StatBuffs, StatTraining, TasksOrder, User, UserAuth, UserItems, UserParty, UserPreferences,
    UserProfile, UserStats,
};

pub use datetime::parse_js_datetime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The envelope every Habitica v3 endpoint wraps its payload in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub user_v: Option<i64>,
    #[serde(default)]
    pub app_version: Option<String>,
}

/// A pending user notification delivered alongside any response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub seen: bool,
}

/// The body Habitica sends for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    pub message: String,
}
