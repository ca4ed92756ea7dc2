//! Avatar compositing.
//!
//! [`AvatarRenderer`] drives the pipeline: resolve the layer list for an
//! avatar, prefetch all sprites concurrently through the store, then
//! overlay them back-to-front onto the canvas. A layer whose sprite
//! cannot be fetched or decoded is skipped and recorded as a warning;
//! the composition itself never fails.

use std::io::{Cursor, Write};
use std::path::Path;

use futures::future;
use image::{imageops, ImageFormat, RgbaImage};

use habitica_core::avatar::{resolve, AssetWarning, Avatar, AVATAR_HEIGHT, AVATAR_WIDTH};

use crate::error::AvatarError;
use crate::store::{RemoteSprites, SpriteStore};

/// Composes avatars from sprites served by a [`SpriteStore`].
pub struct AvatarRenderer<S = RemoteSprites> {
    store: S,
}

impl AvatarRenderer<RemoteSprites> {
    /// Renderer against the production asset CDN.
    pub fn remote() -> Self {
        AvatarRenderer::new(RemoteSprites::new())
    }
}

impl<S: SpriteStore> AvatarRenderer<S> {
    pub fn new(store: S) -> Self {
        AvatarRenderer { store }
    }

    /// Compose the avatar image.
    ///
    /// Sprites are fetched concurrently, then layered sequentially in
    /// resolver order onto a transparent 141x147 canvas. Each sprite's
    /// top-left corner lands on its layer anchor; anything reaching past
    /// the canvas edge is clipped. The result carries the best-effort
    /// image together with all accumulated warnings; callers decide
    /// whether a partial avatar is acceptable.
    pub async fn render(&self, avatar: &Avatar) -> ComposedAvatar {
        let resolved = resolve(avatar);
        let mut warnings = resolved.warnings;

        let fetches = resolved
            .layers
            .iter()
            .map(|layer| self.store.fetch(&layer.sprite));
        let fetched = future::join_all(fetches).await;

        let mut canvas = RgbaImage::new(AVATAR_WIDTH, AVATAR_HEIGHT);
        for (layer, bytes) in resolved.layers.iter().zip(fetched) {
            match bytes {
                Ok(bytes) => match image::load_from_memory(&bytes) {
                    Ok(sprite) => {
                        imageops::overlay(&mut canvas, &sprite.to_rgba8(), layer.x, layer.y);
                    }
                    Err(e) => {
                        tracing::warn!(sprite = %layer.sprite, error = %e, "skipping undecodable sprite");
                        warnings.push(AssetWarning::DecodeFailed {
                            sprite: layer.sprite.clone(),
                            reason: e.to_string(),
                        });
                    }
                },
                Err(e) => {
                    tracing::warn!(sprite = %layer.sprite, error = %e, "skipping unfetchable sprite");
                    warnings.push(AssetWarning::FetchFailed {
                        sprite: layer.sprite.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        ComposedAvatar {
            image: canvas,
            warnings,
        }
    }
}

/// A composed avatar: the layered image plus every warning accumulated
/// while resolving and compositing it.
pub struct ComposedAvatar {
    pub image: RgbaImage,
    pub warnings: Vec<AssetWarning>,
}

impl ComposedAvatar {
    /// Encode the image into an in-memory buffer.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, AvatarError> {
        let mut buffer = Cursor::new(Vec::new());
        self.image.write_to(&mut buffer, format)?;
        Ok(buffer.into_inner())
    }

    /// Encode the image as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, AvatarError> {
        self.encode(ImageFormat::Png)
    }

    /// Write the image to `path` atomically.
    ///
    /// The format is inferred from the extension (PNG when the
    /// extension is missing or unknown). The image is encoded into a
    /// temporary file in the destination directory and renamed into
    /// place, so an interrupted or cancelled save never leaves a
    /// partial file at the destination.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), AvatarError> {
        let path = path.as_ref().to_owned();
        let format = ImageFormat::from_path(&path).unwrap_or(ImageFormat::Png);
        let image = self.image.clone();

        tokio::task::spawn_blocking(move || -> Result<(), AvatarError> {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
            image.write_to(tmp.as_file_mut(), format)?;
            tmp.as_file_mut().flush()?;
            tmp.persist(&path).map_err(|e| AvatarError::Io(e.error))?;
            Ok(())
        })
        .await
        .map_err(|e| AvatarError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?
    }
}
