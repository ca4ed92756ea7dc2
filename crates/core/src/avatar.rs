//! Avatar state and the layer resolver.
//!
//! [`resolve`] turns a user's equipped-items and cosmetic state into an
//! ordered list of sprite layers, back to front. Layer order and anchors
//! are encoded in static render sequences rather than scattered
//! conditionals, so adding a slot is a data change.
//!
//! Resolution never fails: an empty slot or hidden layer contributes
//! nothing, and an equipped item the resolver does not recognize is
//! skipped with an [`AssetWarning`] so rendering degrades instead of
//! aborting.

use serde::{Deserialize, Serialize};

use crate::model::{EquippedGear, HabiticaClass, HairPreferences};

/// Canvas width of a composed avatar in pixels.
pub const AVATAR_WIDTH: u32 = 141;
/// Canvas height of a composed avatar in pixels.
pub const AVATAR_HEIGHT: u32 = 147;

/// Horizontal anchor of the body sprite stack.
const BODY_X: i64 = 24;
/// Vertical offset applied to the body stack when the user is not
/// mounted; mounted avatars sit at the top of the canvas.
const UNMOUNTED_OFFSET_Y: i64 = 24;
/// Anchor of mount body and head sprites.
const MOUNT_ANCHOR: (i64, i64) = (24, 18);
/// Anchor of the chair sprite.
const CHAIR_ANCHOR: (i64, i64) = (24, 0);
/// Anchor of the pet sprite.
const PET_ANCHOR: (i64, i64) = (0, 48);

/// 2019 Kickstarter backer gear does not follow the sprite naming
/// convention; these ids map to their actual asset names.
const BACKER_ONLY_GEAR: &[(&str, &str)] = &[
    ("armor_special_ks2019", "BackerOnly-Equip-MythicGryphonArmor.gif"),
    ("eyewear_special_ks2019", "BackerOnly-Equip-MythicGryphonVisor.gif"),
    ("head_special_ks2019", "BackerOnly-Equip-MythicGryphonHelm.gif"),
    ("shield_special_ks2019", "BackerOnly-Equip-MythicGryphonShield.gif"),
    ("weapon_special_ks2019", "BackerOnly-Equip-MythicGryphonGlaive.gif"),
];

/// The eight gear slots, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearSlot {
    Weapon,
    Armor,
    Head,
    Shield,
    Back,
    HeadAccessory,
    Eyewear,
    Body,
}

impl GearSlot {
    /// The wire name of the slot, which is also the prefix every
    /// conventionally-named item id in the slot starts with.
    pub fn as_str(self) -> &'static str {
        match self {
            GearSlot::Weapon => "weapon",
            GearSlot::Armor => "armor",
            GearSlot::Head => "head",
            GearSlot::Shield => "shield",
            GearSlot::Back => "back",
            GearSlot::HeadAccessory => "headAccessory",
            GearSlot::Eyewear => "eyewear",
            GearSlot::Body => "body",
        }
    }
}

impl EquippedGear {
    /// The item equipped in `slot`, if any.
    pub fn slot(&self, slot: GearSlot) -> Option<&str> {
        let item = match slot {
            GearSlot::Weapon => &self.weapon,
            GearSlot::Armor => &self.armor,
            GearSlot::Head => &self.head,
            GearSlot::Shield => &self.shield,
            GearSlot::Back => &self.back,
            GearSlot::HeadAccessory => &self.head_accessory,
            GearSlot::Eyewear => &self.eyewear,
            GearSlot::Body => &self.body,
        };
        item.as_deref().filter(|s| !s.is_empty())
    }
}

/// Hair sprite groups, painted in this order within the hair pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HairPart {
    Bangs,
    Base,
    Mustache,
    Beard,
}

impl HairPart {
    fn as_str(self) -> &'static str {
        match self {
            HairPart::Bangs => "bangs",
            HairPart::Base => "base",
            HairPart::Mustache => "mustache",
            HairPart::Beard => "beard",
        }
    }

    fn style(self, hair: &HairPreferences) -> Option<i32> {
        let style = match self {
            HairPart::Bangs => hair.bangs,
            HairPart::Base => hair.base,
            HairPart::Mustache => hair.mustache,
            HairPart::Beard => hair.beard,
        };
        style.filter(|s| *s != 0)
    }
}

/// One step in a render sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayerStep {
    Background,
    MountBody,
    Chair,
    Gear(GearSlot),
    Skin,
    Shirt,
    HeadBase,
    Hair(HairPart),
    HairFlower,
    BuffGhost,
    BuffSnowball,
    BuffFloral,
    BuffSeafoam,
    Zzz,
    MountHead,
    Pet,
}

/// Paint order for a regular avatar, back to front.
const RENDER_SEQUENCE: &[LayerStep] = &[
    LayerStep::Background,
    LayerStep::MountBody,
    LayerStep::Chair,
    LayerStep::Gear(GearSlot::Back),
    LayerStep::Skin,
    LayerStep::Shirt,
    LayerStep::HeadBase,
    LayerStep::Gear(GearSlot::Armor),
    LayerStep::Hair(HairPart::Bangs),
    LayerStep::Hair(HairPart::Base),
    LayerStep::Hair(HairPart::Mustache),
    LayerStep::Hair(HairPart::Beard),
    LayerStep::Gear(GearSlot::Body),
    LayerStep::Gear(GearSlot::Eyewear),
    LayerStep::Gear(GearSlot::Head),
    LayerStep::Gear(GearSlot::HeadAccessory),
    LayerStep::HairFlower,
    LayerStep::Gear(GearSlot::Shield),
    LayerStep::Gear(GearSlot::Weapon),
    LayerStep::Zzz,
    LayerStep::MountHead,
    LayerStep::Pet,
];

/// Paint order while a transformation buff is active: the buff sprite
/// replaces the entire body and gear stack.
const BUFF_SEQUENCE: &[LayerStep] = &[
    LayerStep::Background,
    LayerStep::MountBody,
    LayerStep::BuffGhost,
    LayerStep::BuffSnowball,
    LayerStep::BuffFloral,
    LayerStep::BuffSeafoam,
    LayerStep::HairFlower,
    LayerStep::Zzz,
    LayerStep::MountHead,
    LayerStep::Pet,
];

/// Equipped gear sets relevant to rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarGear {
    pub equipped: EquippedGear,
    pub costume: EquippedGear,
}

/// Inventory state relevant to rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarItems {
    pub gear: AvatarGear,
    pub current_mount: Option<String>,
    pub current_pet: Option<String>,
}

/// Cosmetic preferences relevant to rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarPreferences {
    pub hair: HairPreferences,
    pub size: Option<String>,
    pub skin: Option<String>,
    pub shirt: Option<String>,
    pub chair: Option<String>,
    pub costume: Option<bool>,
    pub sleep: Option<bool>,
    pub background: Option<String>,
}

/// Transformation buffs that replace the avatar's appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarBuffs {
    pub seafoam: bool,
    pub shiny_seed: bool,
    pub snowball: bool,
    pub spooky_sparkles: bool,
}

impl AvatarBuffs {
    /// Whether any transformation buff is active.
    pub fn any(self) -> bool {
        self.seafoam || self.shiny_seed || self.snowball || self.spooky_sparkles
    }
}

/// Stats relevant to rendering: buffs and the class (which selects the
/// transformation sprites).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarStats {
    pub buffs: AvatarBuffs,
    #[serde(rename = "class")]
    pub class: HabiticaClass,
}

/// The minimal state needed to render an avatar, extractable from a full
/// user snapshot via [`User::avatar`](crate::model::User::avatar).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Avatar {
    pub items: AvatarItems,
    pub preferences: AvatarPreferences,
    pub stats: AvatarStats,
}

/// One sprite layer: the sprite name (extension-less unless the asset is
/// off-convention) and the canvas position of its top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarLayer {
    pub sprite: String,
    pub x: i64,
    pub y: i64,
}

/// A non-fatal problem encountered while resolving or compositing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetWarning {
    /// An equipped item id did not match any known naming convention.
    #[error("Unrecognized {slot} item '{item}' skipped")]
    UnknownItem { slot: &'static str, item: String },

    /// A sprite could not be fetched; its layer was skipped.
    #[error("Failed to fetch sprite '{sprite}': {reason}")]
    FetchFailed { sprite: String, reason: String },

    /// Fetched sprite bytes were not a decodable image.
    #[error("Sprite '{sprite}' is not a decodable image: {reason}")]
    DecodeFailed { sprite: String, reason: String },
}

/// The ordered layers for one avatar plus any warnings produced while
/// resolving them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAvatar {
    /// Sprite layers, back to front.
    pub layers: Vec<AvatarLayer>,
    pub warnings: Vec<AssetWarning>,
}

/// Resolve the ordered sprite layers for an avatar.
pub fn resolve(avatar: &Avatar) -> ResolvedAvatar {
    let sequence = if avatar.stats.buffs.any() {
        BUFF_SEQUENCE
    } else {
        RENDER_SEQUENCE
    };

    let mut resolver = Resolver {
        avatar,
        body_y: if avatar.items.current_mount.is_some() {
            0
        } else {
            UNMOUNTED_OFFSET_Y
        },
        layers: Vec::new(),
        warnings: Vec::new(),
    };
    for step in sequence {
        resolver.push_step(*step);
    }

    ResolvedAvatar {
        layers: resolver.layers,
        warnings: resolver.warnings,
    }
}

struct Resolver<'a> {
    avatar: &'a Avatar,
    body_y: i64,
    layers: Vec<AvatarLayer>,
    warnings: Vec<AssetWarning>,
}

impl Resolver<'_> {
    fn push_step(&mut self, step: LayerStep) {
        let prefs = &self.avatar.preferences;
        let items = &self.avatar.items;
        let buffs = self.avatar.stats.buffs;

        match step {
            LayerStep::Background => {
                if let Some(bg) = non_empty(prefs.background.as_deref()) {
                    self.push(format!("background_{bg}"), 0, 0);
                }
            }
            LayerStep::MountBody => {
                if let Some(mount) = non_empty(items.current_mount.as_deref()) {
                    self.push(format!("Mount_Body_{mount}"), MOUNT_ANCHOR.0, MOUNT_ANCHOR.1);
                }
            }
            LayerStep::MountHead => {
                if let Some(mount) = non_empty(items.current_mount.as_deref()) {
                    self.push(format!("Mount_Head_{mount}"), MOUNT_ANCHOR.0, MOUNT_ANCHOR.1);
                }
            }
            LayerStep::Chair => {
                if let Some(chair) = non_empty(prefs.chair.as_deref()) {
                    if chair != "none" {
                        self.push(format!("chair_{chair}"), CHAIR_ANCHOR.0, CHAIR_ANCHOR.1);
                    }
                }
            }
            LayerStep::Gear(slot) => {
                if let Some(sprite) = self.gear_sprite(slot) {
                    self.push_body(sprite);
                }
            }
            LayerStep::Skin => {
                if let Some(skin) = non_empty(prefs.skin.as_deref()) {
                    let sleep = if prefs.sleep.unwrap_or(false) {
                        "_sleep"
                    } else {
                        ""
                    };
                    self.push_body(format!("skin_{skin}{sleep}"));
                }
            }
            LayerStep::Shirt => {
                if let Some(shirt) = non_empty(prefs.shirt.as_deref()) {
                    let size = self.size();
                    self.push_body(format!("{size}_shirt_{shirt}"));
                }
            }
            LayerStep::HeadBase => {
                self.push_body("head_0".to_string());
            }
            LayerStep::Hair(part) => {
                let hair = &prefs.hair;
                if let (Some(style), Some(color)) =
                    (part.style(hair), non_empty(hair.color.as_deref()))
                {
                    self.push_body(format!("hair_{}_{style}_{color}", part.as_str()));
                }
            }
            LayerStep::HairFlower => {
                if let Some(flower) = prefs.hair.flower.filter(|f| *f != 0) {
                    self.push_body(format!("hair_flower_{flower}"));
                }
            }
            LayerStep::BuffGhost => {
                if buffs.spooky_sparkles {
                    self.push_body("ghost".to_string());
                }
            }
            LayerStep::BuffSnowball => {
                if buffs.snowball {
                    let class = self.avatar.stats.class.as_str().to_string();
                    self.push_body(format!("avatar_snowball_{class}"));
                }
            }
            LayerStep::BuffFloral => {
                if buffs.shiny_seed {
                    let class = self.avatar.stats.class.as_str().to_string();
                    self.push_body(format!("avatar_floral_{class}"));
                }
            }
            LayerStep::BuffSeafoam => {
                if buffs.seafoam {
                    self.push_body("seafoam_star".to_string());
                }
            }
            LayerStep::Zzz => {
                if prefs.sleep.unwrap_or(false) {
                    self.push_body("zzz".to_string());
                }
            }
            LayerStep::Pet => {
                if let Some(pet) = non_empty(items.current_pet.as_deref()) {
                    self.push(format!("Pet-{pet}"), PET_ANCHOR.0, PET_ANCHOR.1);
                }
            }
        }
    }

    /// Resolve the sprite for a gear slot, honoring the costume toggle,
    /// base-item suppression, backer gear and the armor size prefix.
    fn gear_sprite(&mut self, slot: GearSlot) -> Option<String> {
        let gear = &self.avatar.items.gear;
        let set = if self.avatar.preferences.costume.unwrap_or(false) {
            &gear.costume
        } else {
            &gear.equipped
        };
        let item = set.slot(slot)?;

        // Base items are invisible placeholders, not sprites.
        if item == format!("{}_base_0", slot.as_str()) {
            return None;
        }

        if let Some((_, asset)) = BACKER_ONLY_GEAR.iter().find(|(id, _)| *id == item) {
            return Some((*asset).to_string());
        }

        if !item.starts_with(&format!("{}_", slot.as_str())) {
            tracing::warn!(slot = slot.as_str(), item, "skipping unrecognized gear item");
            self.warnings.push(AssetWarning::UnknownItem {
                slot: slot.as_str(),
                item: item.to_string(),
            });
            return None;
        }

        if slot == GearSlot::Armor {
            return Some(format!("{}_{item}", self.size()));
        }
        Some(item.to_string())
    }

    fn size(&self) -> &str {
        non_empty(self.avatar.preferences.size.as_deref()).unwrap_or("slim")
    }

    fn push(&mut self, sprite: String, x: i64, y: i64) {
        self.layers.push(AvatarLayer { sprite, x, y });
    }

    fn push_body(&mut self, sprite: String) {
        self.push(sprite, BODY_X, self.body_y);
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
