use sheetpack_assets::{AtlasError, DecodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpriteError {
    /// The source could not be read or decoded. Passed through as reported by the decoder.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Atlas(#[from] AtlasError),
}

impl SpriteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SpriteError::Atlas(AtlasError::SpriteNotFound(_)))
    }
}
