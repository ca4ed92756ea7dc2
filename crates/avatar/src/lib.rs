//! Avatar compositing for Habitica users.
//!
//! Turns a user's equipped-items and cosmetic state into a single
//! layered image: the layer list comes from the pure resolver in
//! `habitica_core`, sprite bytes come from a pluggable [`SpriteStore`]
//! (the default fetches from the Habitica CDN through a bounded cache),
//! and [`AvatarRenderer`] overlays the layers back-to-front. Individual
//! sprite failures degrade to warnings instead of aborting the
//! composition.

pub mod error;
pub mod renderer;
pub mod store;

pub use error::AvatarError;
pub use renderer::{AvatarRenderer, ComposedAvatar};
pub use store::{RemoteSprites, SpriteCache, SpriteStore, StoreError, DEFAULT_ASSETS_URL};

pub use habitica_core::avatar::{Avatar, AssetWarning};
