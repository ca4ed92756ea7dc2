//! Payloads for login, scoring, class management, quests and groups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{UserItems, UserPreferences, UserProfile, UserStats};

/// Credentials returned by a successful local login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub id: Uuid,
    pub api_token: String,
    pub new_user: bool,
    pub username: String,
}

/// Quest progress contributed by a single task score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestScoreProgress {
    pub progress_delta: Option<f64>,
    pub collection: Option<i32>,
}

/// An item drop awarded by a task score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemDrop {
    pub target: Option<String>,
    pub can_drop: Option<bool>,
    pub value: Option<i32>,
    pub key: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub dialog: Option<String>,
}

/// Transient side effects of a score: quest damage and drops.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreExtras {
    pub quest: QuestScoreProgress,
    pub drop: ItemDrop,
}

/// The result of scoring a task: the updated stats plus the score delta
/// and any transient quest/drop side effects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreData {
    #[serde(flatten)]
    pub stats: UserStats,
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(rename = "_tmp", default)]
    pub extras: ScoreExtras,
}

/// The sections returned after changing or disabling class.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSystemData {
    pub preferences: UserPreferences,
    pub flags: serde_json::Value,
    pub items: UserItems,
    pub stats: UserStats,
}

/// Collection progress within a group quest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestProgress {
    pub hp: Option<f64>,
    pub up: Option<f64>,
    pub down: Option<f64>,
    pub collect: HashMap<String, i64>,
    pub collected_items: Option<i32>,
}

/// Quest state for a party or group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestData {
    pub key: Option<String>,
    pub active: Option<bool>,
    pub leader: Option<Uuid>,
    pub progress: QuestProgress,
    /// Member id to invitation state: accepted, rejected (`false`) or
    /// pending (`null`).
    pub members: HashMap<Uuid, Option<bool>>,
}

/// Public fields of a party or group member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: Uuid,
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub stats: Option<UserStats>,
}
