pub use error::{AtlasError, DecodeError};
pub use image::Image;

pub mod atlas;
pub mod manifest;
pub mod png;

mod error;
mod image;
