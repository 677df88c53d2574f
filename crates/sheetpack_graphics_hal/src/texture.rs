use crate::{Graphics, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Alpha,
    Lumi,
    Lumia,
    Rgb,
    Rgba,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub fn stride(self) -> usize {
        match self {
            PixelFormat::Alpha => 1,
            PixelFormat::Lumi => 1,
            PixelFormat::Lumia => 2,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

pub trait Texture<G: Graphics> {
    type PixelFormat: From<PixelFormat>;

    /// Creates a texture of `size`. When `bytes` are given, their length must
    /// match the size and the stride of `format`.
    fn new(graphics: G, format: G::PixelFormat, size: Size<u32>, bytes: Option<&[u8]>) -> Self;

    fn size(&self) -> Size<u32>;
}
