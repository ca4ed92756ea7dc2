//! Integration tests for the avatar compositor.
//!
//! Drives the renderer through a deterministic in-memory sprite store,
//! verifying layering, graceful degradation on per-sprite failures, and
//! atomic saves.

use std::collections::{HashMap, HashSet};
use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, Rgba, RgbaImage};

use habitica_avatar::{AssetWarning, Avatar, AvatarRenderer, SpriteStore, StoreError};
use habitica_core::avatar::{AVATAR_HEIGHT, AVATAR_WIDTH};

/// Deterministic sprite store: named solid-color sprites, plus names
/// that fail to fetch and names that return garbage bytes.
#[derive(Default)]
struct FakeStore {
    sprites: HashMap<String, Vec<u8>>,
    unreachable: HashSet<String>,
    corrupt: HashSet<String>,
}

impl FakeStore {
    fn with_sprite(mut self, name: &str, width: u32, height: u32, color: [u8; 4]) -> Self {
        self.sprites.insert(name.to_string(), solid_png(width, height, color));
        self
    }

    fn with_unreachable(mut self, name: &str) -> Self {
        self.unreachable.insert(name.to_string());
        self
    }

    fn with_corrupt(mut self, name: &str) -> Self {
        self.corrupt.insert(name.to_string());
        self
    }
}

#[async_trait]
impl SpriteStore for FakeStore {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        if self.unreachable.contains(name) {
            return Err(StoreError::Request {
                name: name.to_string(),
                reason: "connection timed out".to_string(),
            });
        }
        if self.corrupt.contains(name) {
            return Ok(b"not an image".to_vec());
        }
        self.sprites.get(name).cloned().ok_or(StoreError::Status {
            name: name.to_string(),
            status: 404,
        })
    }
}

fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("png encoding");
    buffer.into_inner()
}

const BLUE: [u8; 4] = [0, 0, 255, 255];
const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

fn dressed_avatar() -> Avatar {
    let mut avatar = Avatar::default();
    avatar.preferences.background = Some("violet".to_string());
    avatar.items.gear.equipped.armor = Some("armor_warrior_2".to_string());
    avatar.items.current_pet = Some("Dragon-Red".to_string());
    avatar
}

fn dressed_store() -> FakeStore {
    FakeStore::default()
        .with_sprite("background_violet", AVATAR_WIDTH, AVATAR_HEIGHT, BLUE)
        .with_sprite("head_0", 8, 8, [10, 10, 10, 255])
        .with_sprite("slim_armor_warrior_2", 90, 90, RED)
        .with_sprite("Pet-Dragon-Red", 16, 16, GREEN)
}

#[tokio::test]
async fn layers_land_on_their_anchors() {
    let renderer = AvatarRenderer::new(dressed_store());
    let composed = renderer.render(&dressed_avatar()).await;

    assert!(composed.warnings.is_empty());
    assert_eq!(composed.image.dimensions(), (AVATAR_WIDTH, AVATAR_HEIGHT));

    // background fills the canvas edge
    assert_eq!(composed.image.get_pixel(140, 0).0, BLUE);
    // armor sits on the body anchor (24, 24), painted over the head base
    assert_eq!(composed.image.get_pixel(24, 24).0, RED);
    assert_eq!(composed.image.get_pixel(40, 40).0, RED);
    // pet overlays the bottom-left corner at (0, 48)
    assert_eq!(composed.image.get_pixel(0, 48).0, GREEN);
    assert_eq!(composed.image.get_pixel(0, 47).0, BLUE);
}

#[tokio::test]
async fn one_failed_fetch_keeps_the_other_layers() {
    let store = dressed_store().with_unreachable("slim_armor_warrior_2");
    let renderer = AvatarRenderer::new(store);
    let composed = renderer.render(&dressed_avatar()).await;

    // exactly one warning, naming the failed sprite
    assert_eq!(composed.warnings.len(), 1);
    assert!(matches!(
        &composed.warnings[0],
        AssetWarning::FetchFailed { sprite, .. } if sprite == "slim_armor_warrior_2"
    ));

    // the remaining layers are present
    assert_eq!(composed.image.get_pixel(140, 0).0, BLUE);
    assert_eq!(composed.image.get_pixel(0, 48).0, GREEN);
    // the failed armor layer is not: the background shows through
    assert_eq!(composed.image.get_pixel(40, 40).0, BLUE);
}

#[tokio::test]
async fn corrupt_sprite_bytes_degrade_to_a_warning() {
    let store = dressed_store().with_corrupt("Pet-Dragon-Red");
    let renderer = AvatarRenderer::new(store);
    let composed = renderer.render(&dressed_avatar()).await;

    assert_eq!(composed.warnings.len(), 1);
    assert!(matches!(
        &composed.warnings[0],
        AssetWarning::DecodeFailed { sprite, .. } if sprite == "Pet-Dragon-Red"
    ));
    assert_eq!(composed.image.get_pixel(0, 48).0, BLUE);
}

#[tokio::test]
async fn unknown_gear_id_still_produces_an_image() {
    let mut avatar = dressed_avatar();
    avatar.items.gear.equipped.body = Some("mystery_item_42".to_string());
    let renderer = AvatarRenderer::new(dressed_store());
    let composed = renderer.render(&avatar).await;

    assert_eq!(composed.warnings.len(), 1);
    assert!(matches!(
        &composed.warnings[0],
        AssetWarning::UnknownItem { slot: "body", item } if item == "mystery_item_42"
    ));
    // composition still yields a non-empty image
    assert!(composed.image.pixels().any(|p| p.0[3] != 0));
}

#[tokio::test]
async fn alpha_transparency_lets_lower_layers_show() {
    let store = FakeStore::default()
        .with_sprite("background_violet", AVATAR_WIDTH, AVATAR_HEIGHT, BLUE)
        // fully transparent head sprite
        .with_sprite("head_0", 8, 8, [0, 0, 0, 0]);
    let mut avatar = Avatar::default();
    avatar.preferences.background = Some("violet".to_string());

    let composed = AvatarRenderer::new(store).render(&avatar).await;
    assert!(composed.warnings.is_empty());
    assert_eq!(composed.image.get_pixel(25, 25).0, BLUE);
}

#[tokio::test]
async fn encode_produces_a_decodable_png() {
    let renderer = AvatarRenderer::new(dressed_store());
    let composed = renderer.render(&dressed_avatar()).await;

    let bytes = composed.to_png().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.to_rgba8().dimensions(), (AVATAR_WIDTH, AVATAR_HEIGHT));
}

#[tokio::test]
async fn save_writes_a_decodable_file_and_no_leftovers() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("avatar.png");

    let renderer = AvatarRenderer::new(dressed_store());
    let composed = renderer.render(&dressed_avatar()).await;
    composed.save(&target).await.unwrap();

    let decoded = image::open(&target).unwrap();
    assert_eq!(decoded.to_rgba8().dimensions(), (AVATAR_WIDTH, AVATAR_HEIGHT));

    // the temp file was renamed into place, not left beside the target
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn save_into_missing_directory_leaves_no_destination_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing").join("avatar.png");

    let renderer = AvatarRenderer::new(dressed_store());
    let composed = renderer.render(&dressed_avatar()).await;
    let result = composed.save(&target).await;

    assert!(result.is_err());
    assert!(!target.exists());
}
