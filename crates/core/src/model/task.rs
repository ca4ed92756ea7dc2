//! Task records and the enums shared by task endpoints.
//!
//! [`Task`] is the request payload: every field is optional and `None`
//! fields are omitted from the wire, so the same type serves create and
//! partial update. [`TaskData`] is the full server-side record.
//!
//! Wire enums are closed variant sets with an `Other(String)` fallback
//! carrying the raw server value, so newly released content decodes
//! without being misclassified and round-trips unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::datetime;

/// The four task kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Habit,
    Daily,
    Todo,
    Reward,
    /// A kind this client version does not know about.
    #[serde(untagged)]
    Other(String),
}

/// Character attributes a task can train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "con")]
    Constitution,
    #[serde(rename = "per")]
    Perception,
}

impl Attribute {
    /// The wire name of the attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Strength => "str",
            Attribute::Intelligence => "int",
            Attribute::Constitution => "con",
            Attribute::Perception => "per",
        }
    }
}

/// Recurrence frequency for dailies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    #[serde(untagged)]
    Other(String),
}

/// Task difficulty. Wire values are the floats 0.1, 1, 1.5 and 2; any
/// other number decodes to [`TaskPriority::Other`] and serializes back
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskPriority {
    Trivial,
    Easy,
    Medium,
    Hard,
    Other(f64),
}

impl TaskPriority {
    /// The wire value of this difficulty.
    pub fn value(self) -> f64 {
        match self {
            TaskPriority::Trivial => 0.1,
            TaskPriority::Easy => 1.0,
            TaskPriority::Medium => 1.5,
            TaskPriority::Hard => 2.0,
            TaskPriority::Other(v) => v,
        }
    }

    fn from_value(value: f64) -> Self {
        match value {
            v if v == 0.1 => TaskPriority::Trivial,
            v if v == 1.0 => TaskPriority::Easy,
            v if v == 1.5 => TaskPriority::Medium,
            v if v == 2.0 => TaskPriority::Hard,
            v => TaskPriority::Other(v),
        }
    }
}

impl Serialize for TaskPriority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for TaskPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(TaskPriority::from_value)
    }
}

/// Task selection for [`get_tasks`] requests.
///
/// [`get_tasks`]: https://habitica.com/apidoc/#api-Task-GetUserTasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskFilter {
    Habits,
    Dailys,
    Todos,
    Rewards,
    CompletedTodos,
}

impl TaskFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskFilter::Habits => "habits",
            TaskFilter::Dailys => "dailys",
            TaskFilter::Todos => "todos",
            TaskFilter::Rewards => "rewards",
            TaskFilter::CompletedTodos => "completedTodos",
        }
    }
}

/// Direction to score a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Content localization for `get_content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Bg,
    Cs,
    Da,
    De,
    En,
    EnPirate,
    EnGb,
    Es,
    Es419,
    Fr,
    He,
    Hu,
    Id,
    It,
    Ja,
    Nl,
    Pl,
    Pt,
    PtBr,
    Ro,
    Ru,
    Sk,
    Sr,
    Sv,
    Uk,
    Zh,
    ZhTw,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Bg => "bg",
            Language::Cs => "cs",
            Language::Da => "da",
            Language::De => "de",
            Language::En => "en",
            Language::EnPirate => "en@pirate",
            Language::EnGb => "en_GB",
            Language::Es => "es",
            Language::Es419 => "es_419",
            Language::Fr => "fr",
            Language::He => "he",
            Language::Hu => "hu",
            Language::Id => "id",
            Language::It => "it",
            Language::Ja => "ja",
            Language::Nl => "nl",
            Language::Pl => "pl",
            Language::Pt => "pt",
            Language::PtBr => "pt_BR",
            Language::Ro => "ro",
            Language::Ru => "ru",
            Language::Sk => "sk",
            Language::Sr => "sr",
            Language::Sv => "sv",
            Language::Uk => "uk",
            Language::Zh => "zh",
            Language::ZhTw => "zh_TW",
        }
    }
}

/// Skills (spells) castable via `cast_skill`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    // Mage
    BurstOfFlames,
    EtherealSurge,
    Earthquake,
    ChillingFrost,
    // Warrior
    BrutalSmash,
    DefensiveStance,
    ValorousPresence,
    IntimidatingGaze,
    // Rogue
    Pickpocket,
    Backstab,
    ToolsOfTheTrade,
    Stealth,
    // Healer
    HealingLight,
    ProtectiveAura,
    SearingBrightness,
    Blessing,
    // Transformation buffs
    Snowball,
    SpookySparkles,
    Seafoam,
    ShinySeed,
    // Debuff potions
    Salt,
    OpaquePotion,
    Sand,
    PetalFreePotion,
}

impl Skill {
    /// The spell key used in the cast URL.
    pub fn as_str(self) -> &'static str {
        match self {
            Skill::BurstOfFlames => "fireball",
            Skill::EtherealSurge => "mpheal",
            Skill::Earthquake => "earth",
            Skill::ChillingFrost => "frost",
            Skill::BrutalSmash => "smash",
            Skill::DefensiveStance => "defensiveStance",
            Skill::ValorousPresence => "valorousPresence",
            Skill::IntimidatingGaze => "intimidate",
            Skill::Pickpocket => "pickPocket",
            Skill::Backstab => "backStab",
            Skill::ToolsOfTheTrade => "toolsOfTrade",
            Skill::Stealth => "stealth",
            Skill::HealingLight => "heal",
            Skill::ProtectiveAura => "protectAura",
            Skill::SearingBrightness => "brightness",
            Skill::Blessing => "healAll",
            Skill::Snowball => "snowball",
            Skill::SpookySparkles => "spookySparkles",
            Skill::Seafoam => "seafoam",
            Skill::ShinySeed => "shinySeed",
            Skill::Salt => "salt",
            Skill::OpaquePotion => "opaquePotion",
            Skill::Sand => "sand",
            Skill::PetalFreePotion => "petalFreePotion",
        }
    }
}

/// One checklist entry on a daily or to-do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

/// A reminder attached to a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

/// Weekday repeat flags for weekly dailies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repeat {
    pub m: bool,
    pub t: bool,
    pub w: bool,
    pub th: bool,
    pub f: bool,
    pub s: bool,
    pub su: bool,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat {
            m: true,
            t: true,
            w: true,
            th: false,
            f: false,
            s: false,
            su: false,
        }
    }
}

/// Why a challenge task was detached from its challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeBroken {
    ChallengeDeleted,
    TaskDeleted,
    Unsubscribed,
    ChallengeClosed,
    ChallengeTaskNotFound,
    #[serde(untagged)]
    Other(String),
}

/// Challenge linkage on a task.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskChallenge {
    pub id: Option<Uuid>,
    pub task_id: Option<Uuid>,
    pub short_name: Option<String>,
    pub broken: Option<ChallengeBroken>,
    pub winner: Option<String>,
}

/// Group-plan linkage on a task.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskGroup {
    pub id: Option<Uuid>,
    pub task_id: Option<Uuid>,
    pub assigned_users: Option<Vec<Uuid>>,
    pub assigning_username: Option<String>,
    pub manager_notes: Option<String>,
}

/// One entry in a task's score history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// May arrive as ISO-8601 or epoch milliseconds.
    #[serde(deserialize_with = "datetime::deserialize_flexible")]
    pub date: DateTime<Utc>,
    pub value: f64,
    #[serde(default)]
    pub scored_up: Option<i32>,
    #[serde(default)]
    pub scored_down: Option<i32>,
    #[serde(default)]
    pub is_due: Option<bool>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// A task payload for create and update requests.
///
/// `None` fields are omitted from the wire, so a sparse value expresses
/// a partial update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<Reminder>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<ChecklistItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_checklist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_up: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_down: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub every_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repeat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_of_month: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks_of_month: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// A task as stored server-side, with server-assigned fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskData {
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: Option<TaskType>,
    pub text: Option<String>,
    pub notes: Option<String>,
    pub alias: Option<String>,
    pub tags: Vec<Uuid>,
    pub value: Option<f64>,
    pub priority: Option<TaskPriority>,
    pub attribute: Option<Attribute>,
    pub by_habitica: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub date: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
    pub up: Option<bool>,
    pub down: Option<bool>,
    pub counter_up: Option<i32>,
    pub counter_down: Option<i32>,
    pub frequency: Option<Frequency>,
    pub every_x: Option<i32>,
    pub streak: Option<i32>,
    pub reminders: Vec<Reminder>,
    pub days_of_month: Vec<u32>,
    pub weeks_of_month: Vec<u32>,
    pub history: Vec<HistoryEntry>,
    /// Upcoming due dates; entries the server sends in an unparseable
    /// legacy format are dropped rather than failing the decode.
    #[serde(deserialize_with = "datetime::deserialize_flexible_list")]
    pub next_due: Vec<DateTime<Utc>>,
    pub yester_daily: Option<bool>,
    pub completed: Option<bool>,
    pub collapse_checklist: bool,
    pub checklist: Vec<ChecklistItem>,
    pub is_due: Option<bool>,
    pub repeat: Repeat,
    pub challenge: TaskChallenge,
    pub group: TaskGroup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_type_decodes_known_values() {
        let kind: TaskType = serde_json::from_str(r#""daily""#).unwrap();
        assert_eq!(kind, TaskType::Daily);
    }

    #[test]
    fn task_type_falls_back_on_unknown_value() {
        let kind: TaskType = serde_json::from_str(r#""questline""#).unwrap();
        assert_eq!(kind, TaskType::Other("questline".to_string()));
        // the raw string round-trips unchanged
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""questline""#);
    }

    #[test]
    fn priority_decodes_wire_floats() {
        let p: TaskPriority = serde_json::from_str("0.1").unwrap();
        assert_eq!(p, TaskPriority::Trivial);
        let p: TaskPriority = serde_json::from_str("2.0").unwrap();
        assert_eq!(p, TaskPriority::Hard);
        let p: TaskPriority = serde_json::from_str("0.5").unwrap();
        assert_eq!(p, TaskPriority::Other(0.5));
    }

    #[test]
    fn priority_serializes_wire_floats() {
        assert_eq!(serde_json::to_string(&TaskPriority::Trivial).unwrap(), "0.1");
        assert_eq!(serde_json::to_string(&TaskPriority::Easy).unwrap(), "1.0");
    }

    #[test]
    fn sparse_task_omits_unset_fields() {
        let task = Task {
            text: Some("Feed the dragon".to_string()),
            kind: Some(TaskType::Todo),
            ..Task::default()
        };
        let json = serde_json::to_value(&task).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["text"], "Feed the dragon");
        assert_eq!(json["type"], "todo");
    }

    #[test]
    fn task_data_tolerates_unknown_fields() {
        let json = r#"{
            "id": "a9f14bb3-f70a-4029-a5a1-62332e269582",
            "type": "habit",
            "text": "Practice",
            "newServerField": {"nested": true}
        }"#;
        let task: TaskData = serde_json::from_str(json).unwrap();
        assert_eq!(task.kind, Some(TaskType::Habit));
        assert_eq!(task.text.as_deref(), Some("Practice"));
    }

    #[test]
    fn checklist_item_requires_text() {
        let json = r#"{"id": "a9f14bb3-f70a-4029-a5a1-62332e269582", "completed": false}"#;
        let err = serde_json::from_str::<ChecklistItem>(json).unwrap_err();
        assert!(err.to_string().contains("text"), "error was: {err}");
    }

    #[test]
    fn next_due_drops_unparseable_entries() {
        let json = r#"{
            "nextDue": [
                "2024-05-06T00:00:00.000Z",
                "Mon May 06 2024 00:00:00 GMT+0200",
                "not a date"
            ]
        }"#;
        let task: TaskData = serde_json::from_str(json).unwrap();
        assert_eq!(task.next_due.len(), 2);
    }

    #[test]
    fn repeat_defaults_match_server_template() {
        let repeat = Repeat::default();
        assert!(repeat.m && repeat.t && repeat.w);
        assert!(!repeat.th && !repeat.f && !repeat.s && !repeat.su);
    }

    #[test]
    fn challenge_broken_falls_back_on_unknown_reason() {
        let broken: ChallengeBroken = serde_json::from_str(r#""CHALLENGE_ARCHIVED""#).unwrap();
        assert_eq!(broken, ChallengeBroken::Other("CHALLENGE_ARCHIVED".to_string()));
    }

    #[test]
    fn task_round_trips() {
        let task = Task {
            text: Some("Stretch".to_string()),
            kind: Some(TaskType::Daily),
            priority: Some(TaskPriority::Medium),
            frequency: Some(Frequency::Weekly),
            repeat: Some(Repeat::default()),
            streak: Some(4),
            ..Task::default()
        };
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
