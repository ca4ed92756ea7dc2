//! The user record and its nested sections.
//!
//! The server-side user document is large and keeps growing; this mirror
//! declares the sections the library works with (stats, preferences,
//! inventory, auth, party, tags, task order) and ignores the rest. Every
//! section is `#[serde(default)]` so partial projections fetched via
//! `userFields` decode into the same type.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tag::Tag;
use crate::avatar::{Avatar, AvatarBuffs, AvatarGear, AvatarItems, AvatarPreferences, AvatarStats};

/// Player classes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabiticaClass {
    #[default]
    Warrior,
    Rogue,
    Mage,
    Healer,
    /// A class string this client version does not know about.
    #[serde(untagged)]
    Other(String),
}

impl HabiticaClass {
    pub fn as_str(&self) -> &str {
        match self {
            HabiticaClass::Warrior => "warrior",
            HabiticaClass::Rogue => "rogue",
            HabiticaClass::Mage => "mage",
            HabiticaClass::Healer => "healer",
            HabiticaClass::Other(raw) => raw,
        }
    }
}

/// Public profile fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: Option<String>,
    pub blurb: Option<String>,
    pub image_url: Option<String>,
}

/// Active stat buffs, including the visual transformation buffs that
/// change how the avatar renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatBuffs {
    #[serde(rename = "str")]
    pub strength: Option<f64>,
    #[serde(rename = "int")]
    pub intelligence: Option<f64>,
    pub con: Option<f64>,
    pub per: Option<f64>,
    pub stealth: Option<i32>,
    pub streaks: Option<bool>,
    pub seafoam: Option<bool>,
    pub shiny_seed: Option<bool>,
    pub snowball: Option<bool>,
    pub spooky_sparkles: Option<bool>,
}

/// Stat points gained from level-ups, pending allocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatTraining {
    #[serde(rename = "str")]
    pub strength: Option<f64>,
    #[serde(rename = "int")]
    pub intelligence: Option<f64>,
    pub con: Option<f64>,
    pub per: Option<f64>,
}

/// The stats block: health, mana, experience, gold, level, class and
/// allocated attribute points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserStats {
    pub hp: Option<f64>,
    pub mp: Option<f64>,
    pub exp: Option<f64>,
    pub gp: Option<f64>,
    pub lvl: Option<i32>,
    #[serde(rename = "class")]
    pub class: HabiticaClass,
    pub points: Option<i32>,
    #[serde(rename = "str")]
    pub strength: Option<i32>,
    #[serde(rename = "int")]
    pub intelligence: Option<i32>,
    pub con: Option<i32>,
    pub per: Option<i32>,
    pub to_next_level: Option<i32>,
    pub max_health: Option<i32>,
    #[serde(rename = "maxMP")]
    pub max_mp: Option<i32>,
    pub buffs: StatBuffs,
    pub training: StatTraining,
}

/// Hair styling: numeric style indices plus a color name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HairPreferences {
    pub color: Option<String>,
    pub base: Option<i32>,
    pub bangs: Option<i32>,
    pub beard: Option<i32>,
    pub mustache: Option<i32>,
    pub flower: Option<i32>,
}

/// Cosmetic and behavioral preferences.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    pub hair: HairPreferences,
    pub day_start: Option<i32>,
    /// Body size, `"slim"` or `"broad"`; selects the armor sprite sheet.
    pub size: Option<String>,
    pub skin: Option<String>,
    pub shirt: Option<String>,
    pub chair: Option<String>,
    pub background: Option<String>,
    pub costume: Option<bool>,
    pub sleep: Option<bool>,
    pub timezone_offset: Option<i32>,
    pub allocation_mode: Option<String>,
    pub automatic_allocation: Option<bool>,
    pub disable_classes: Option<bool>,
    pub language: Option<String>,
}

/// Gear equipped per slot. `None` means the slot is empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EquippedGear {
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub head: Option<String>,
    pub shield: Option<String>,
    pub back: Option<String>,
    pub head_accessory: Option<String>,
    pub eyewear: Option<String>,
    pub body: Option<String>,
}

/// The battle-gear and costume slot sets plus owned gear.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GearItems {
    pub equipped: EquippedGear,
    pub costume: EquippedGear,
    pub owned: HashMap<String, bool>,
}

/// The inventory block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserItems {
    pub gear: GearItems,
    pub current_mount: Option<String>,
    pub current_pet: Option<String>,
    pub pets: HashMap<String, i32>,
    pub mounts: HashMap<String, bool>,
    pub eggs: HashMap<String, i32>,
    pub food: HashMap<String, i32>,
    pub hatching_potions: HashMap<String, i32>,
    pub quests: HashMap<String, i32>,
}

/// Local (username/password) identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalAuth {
    pub email: Option<String>,
    pub username: Option<String>,
    #[serde(rename = "lowerCaseUsername")]
    pub lowercase_username: Option<String>,
    pub has_password: Option<bool>,
}

/// Account lifecycle timestamps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthTimestamps {
    pub created: Option<DateTime<Utc>>,
    pub loggedin: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

/// Authentication section of the user document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAuth {
    pub local: LocalAuth,
    pub timestamps: AuthTimestamps,
}

/// Quest state within the user's party.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartyQuest {
    pub key: Option<String>,
    #[serde(rename = "RSVPNeeded")]
    pub rsvp_needed: Option<bool>,
    pub completed: Option<String>,
}

/// Party membership.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserParty {
    #[serde(rename = "_id")]
    pub id: Option<Uuid>,
    pub quest: PartyQuest,
    pub order: Option<String>,
    pub order_ascending: Option<String>,
}

/// Per-kind task display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksOrder {
    pub habits: Vec<Uuid>,
    pub dailys: Vec<Uuid>,
    pub todos: Vec<Uuid>,
    pub rewards: Vec<Uuid>,
}

/// An immutable snapshot of the authenticated user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: Option<Uuid>,
    pub profile: UserProfile,
    pub stats: UserStats,
    pub preferences: UserPreferences,
    pub items: UserItems,
    pub auth: UserAuth,
    pub party: UserParty,
    pub tags: Vec<Tag>,
    pub tasks_order: TasksOrder,
    pub balance: Option<f64>,
    pub login_incentives: Option<i32>,
    pub needs_cron: Option<bool>,
    pub last_cron: Option<DateTime<Utc>>,
}

impl User {
    /// Extract the equipped-items and cosmetic state needed to render
    /// this user's avatar.
    pub fn avatar(&self) -> Avatar {
        Avatar {
            items: AvatarItems {
                gear: AvatarGear {
                    equipped: self.items.gear.equipped.clone(),
                    costume: self.items.gear.costume.clone(),
                },
                current_mount: self.items.current_mount.clone(),
                current_pet: self.items.current_pet.clone(),
            },
            preferences: AvatarPreferences {
                hair: self.preferences.hair.clone(),
                size: self.preferences.size.clone(),
                skin: self.preferences.skin.clone(),
                shirt: self.preferences.shirt.clone(),
                chair: self.preferences.chair.clone(),
                costume: self.preferences.costume,
                sleep: self.preferences.sleep,
                background: self.preferences.background.clone(),
            },
            stats: AvatarStats {
                buffs: AvatarBuffs {
                    seafoam: self.stats.buffs.seafoam.unwrap_or(false),
                    shiny_seed: self.stats.buffs.shiny_seed.unwrap_or(false),
                    snowball: self.stats.buffs.snowball.unwrap_or(false),
                    spooky_sparkles: self.stats.buffs.spooky_sparkles.unwrap_or(false),
                },
                class: self.stats.class.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_partial_user_projection() {
        // the shape returned by `userFields=stats,items.currentPet`
        let json = r#"{
            "stats": {"hp": 42.5, "lvl": 18, "class": "rogue"},
            "items": {"currentPet": "Dragon-Red"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.stats.hp, Some(42.5));
        assert_eq!(user.stats.class, HabiticaClass::Rogue);
        assert_eq!(user.items.current_pet.as_deref(), Some("Dragon-Red"));
        assert!(user.id.is_none());
    }

    #[test]
    fn unknown_class_is_preserved() {
        let json = r#"{"stats": {"class": "necromancer"}}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(
            user.stats.class,
            HabiticaClass::Other("necromancer".to_string())
        );
        let round = serde_json::to_value(&user.stats).unwrap();
        assert_eq!(round["class"], "necromancer");
    }

    #[test]
    fn user_round_trips() {
        let json = r#"{
            "id": "fce49b9c-b58a-4d1e-a0f7-e10bfa6d9b19",
            "profile": {"name": "Ironweed"},
            "stats": {"hp": 50.0, "mp": 32.0, "lvl": 7, "class": "healer",
                      "buffs": {"str": 2.0, "seafoam": false}},
            "preferences": {"skin": "915533", "size": "slim",
                            "hair": {"color": "red", "bangs": 2}},
            "items": {
                "gear": {"equipped": {"armor": "armor_warrior_2"}},
                "currentMount": "Aether-Invisible",
                "pets": {"Dragon-Red": 10}
            },
            "balance": 1.25,
            "needsCron": false
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&encoded).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn avatar_extraction_carries_styles() {
        let json = r#"{
            "preferences": {"skin": "915533", "sleep": true,
                            "hair": {"color": "black", "base": 3}},
            "items": {"gear": {"equipped": {"weapon": "weapon_warrior_1"}},
                      "currentPet": "Fox-Base"},
            "stats": {"class": "warrior", "buffs": {"snowball": true}}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        let avatar = user.avatar();
        assert_eq!(avatar.preferences.skin.as_deref(), Some("915533"));
        assert_eq!(avatar.preferences.sleep, Some(true));
        assert_eq!(
            avatar.items.gear.equipped.weapon.as_deref(),
            Some("weapon_warrior_1")
        );
        assert!(avatar.stats.buffs.snowball);
    }
}
