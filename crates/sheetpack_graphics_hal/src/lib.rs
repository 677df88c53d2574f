use texture::{PixelFormat, Texture};

pub use sheetpack_geometry::*;

pub mod sub_texture;
pub mod texture;

/// A rendering backend able to turn pixel data into something it can draw.
///
/// Handles are expected to be cheap to clone, every texture keeps a clone
/// of the graphics context it was created with.
pub trait Graphics
where
    Self: Sized + Clone + 'static,
{
    type PixelFormat: From<PixelFormat>;
    type Texture: Texture<Self, PixelFormat = Self::PixelFormat>;

    fn new_texture(
        &self,
        format: impl Into<Self::PixelFormat>,
        size: impl Into<Size<u32>>,
        bytes: Option<&[u8]>,
    ) -> Self::Texture {
        Self::Texture::new(self.clone(), format.into(), size.into(), bytes)
    }
}
