use std::cell::{Ref, RefCell};

use log::trace;
use sheetpack_graphics_hal::{
    texture::{PixelFormat, Texture},
    Point, Rect, Size,
};

use crate::Soft;

pub struct SoftTexture {
    format: PixelFormat,
    size: Size<u32>,
    bytes: RefCell<Vec<u8>>,
}

impl SoftTexture {
    /// Raw texture contents, rows from top to bottom.
    pub fn bytes(&self) -> Ref<'_, Vec<u8>> {
        self.bytes.borrow()
    }

    /// Bytes of a single pixel, or `None` if it lies outside of the texture.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec<u8>> {
        if !Rect::from(self.size).contains(Point::new(x, y)) {
            return None;
        }

        let stride = self.format.stride();
        let offset = (y as usize * self.size.w as usize + x as usize) * stride;
        Some(self.bytes.borrow()[offset..offset + stride].to_vec())
    }
}

impl Texture<Soft> for SoftTexture {
    type PixelFormat = PixelFormat;

    fn new(ctx: Soft, format: PixelFormat, size: Size<u32>, bytes: Option<&[u8]>) -> Self {
        let len = size.w as usize * size.h as usize * format.stride();
        let bytes = match bytes {
            Some(bytes) => {
                assert_eq!(bytes.len(), len);
                bytes.to_vec()
            }
            None => vec![0; len],
        };

        ctx.on_texture_created();
        trace!("Created a {:?} texture of {}x{}", format, size.w, size.h);

        Self {
            format,
            size,
            bytes: RefCell::new(bytes),
        }
    }

    fn size(&self) -> Size<u32> {
        self.size
    }
}
