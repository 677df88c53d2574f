use std::{cell::Cell, rc::Rc};

use derive_more::Deref;
use sheetpack_graphics_hal::{texture::PixelFormat, Graphics};

pub use texture::SoftTexture;

mod texture;

/// Graphics backend that keeps textures in main memory.
///
/// It has no window and draws nothing, which makes it suitable for headless
/// tools and tests that need to inspect what would have been uploaded.
#[derive(Deref, Clone, Default)]
pub struct Soft(pub Rc<SoftContext>);

#[derive(Default)]
pub struct SoftContext {
    textures_created: Cell<usize>,
}

impl SoftContext {
    /// Number of textures created with this context so far.
    pub fn textures_created(&self) -> usize {
        self.textures_created.get()
    }

    fn on_texture_created(&self) {
        self.textures_created.set(self.textures_created.get() + 1);
    }
}

impl Soft {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graphics for Soft {
    type PixelFormat = PixelFormat;
    type Texture = SoftTexture;
}
