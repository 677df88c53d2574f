use std::{io, path::PathBuf};

use sheetpack_geometry::Size;
use thiserror::Error;

/// Failure to turn source bytes into an [`Image`](crate::Image).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid png: {0}")]
    Png(#[from] lodepng::Error),

    #[error("image has no pixels")]
    EmptyImage,

    #[error("expected {expected} pixels for a {}x{} image, got {actual}", size.w, size.h)]
    PixelCount {
        size: Size<u32>,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AtlasError {
    #[error("the atlas has no canvas yet, the first image must bootstrap it")]
    NotBootstrapped,

    #[error("the atlas canvas already exists")]
    AlreadyBootstrapped,

    #[error("sprite not found: {0}")]
    SpriteNotFound(String),
}
