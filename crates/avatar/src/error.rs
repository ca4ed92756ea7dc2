/// Fatal errors from avatar encoding and saving.
///
/// Per-layer problems (a sprite that fails to fetch or decode) are not
/// errors; they surface as [`AssetWarning`](crate::AssetWarning) values
/// on the composed result.
#[derive(Debug, thiserror::Error)]
pub enum AvatarError {
    /// Encoding the composed image failed.
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the composed image to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
