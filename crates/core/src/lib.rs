//! Core types for the Habitica API client.
//!
//! Provides the typed data model mirroring the Habitica v3 JSON shapes,
//! the error taxonomy shared across the workspace, argument validation
//! helpers, and the pure avatar layer resolver that turns a user's
//! equipped-items state into an ordered list of sprite layers.

pub mod avatar;
pub mod error;
pub mod model;
pub mod validate;

pub use avatar::{resolve, AssetWarning, Avatar, AvatarLayer, ResolvedAvatar};
pub use error::CoreError;
