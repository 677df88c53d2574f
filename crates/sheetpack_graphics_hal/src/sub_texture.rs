use std::{fmt, rc::Rc};

use crate::{texture::Texture, Graphics, Rect, Size};

/// A region of a shared texture, used to draw a single sprite out of an atlas.
pub struct SubTexture<G: Graphics> {
    pub texture: Rc<G::Texture>,
    /// Rectangle in pixels with (0; 0) representing the top-left corner of the texture
    pub region: Rect<u32>,
}

impl<G: Graphics> SubTexture<G> {
    pub fn new(texture: Rc<G::Texture>, region: Rect<u32>) -> Self {
        assert!(
            Rect::from(texture.size()).encloses(&region),
            "region {region} does not fit a texture of {:?}",
            texture.size()
        );

        Self { texture, region }
    }

    /// Size of the region in pixels.
    pub fn size(&self) -> Size<u32> {
        self.region.size()
    }

    pub fn in_texture_space(&self) -> Rect<f32> {
        self.region.in_texture_space(self.texture.size())
    }
}

impl<G: Graphics> Clone for SubTexture<G> {
    fn clone(&self) -> Self {
        Self {
            texture: self.texture.clone(),
            region: self.region,
        }
    }
}

impl<G: Graphics> fmt::Debug for SubTexture<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubTexture")
            .field("texture_size", &self.texture.size())
            .field("region", &self.region)
            .finish()
    }
}
