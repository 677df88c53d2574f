use derive_more::Constructor;
use sheetpack_geometry::{Rect, Size};

pub use builder::AtlasBuilder;
pub use registry::SpriteRegistry;

mod builder;
mod registry;

/// A named region of the atlas holding one of the loaded images.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Sprite {
    pub name: String,
    /// Location of the sprite on the atlas, in pixels
    pub bounds: Rect<u32>,
}

impl Sprite {
    pub fn size(&self) -> Size<u32> {
        self.bounds.size()
    }
}
