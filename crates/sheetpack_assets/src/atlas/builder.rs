use log::trace;
use rgb::RGBA8;
use sheetpack_geometry::{Point, Rect, Size};

use crate::{AtlasError, Image};

/// Grows a single canvas by stacking images on top of each other.
///
/// Every image is placed at the left edge, directly below the previous one,
/// so pixels that were already placed never move. Each append reallocates
/// the canvas and copies everything placed so far, which is fine for building
/// an atlas once at load time but not for frequent updates.
#[derive(Debug, Clone, Default)]
pub struct AtlasBuilder {
    canvas: Option<Image>,
    next_offset_y: u32,
    /// Colour of the pixels not covered by any image
    fill: RGBA8,
}

impl AtlasBuilder {
    pub fn new(fill: RGBA8) -> Self {
        Self {
            canvas: None,
            next_offset_y: 0,
            fill,
        }
    }

    /// The rectangle an image occupies once placed at `offset_y`.
    pub fn compute_bounds(image: &Image, offset_y: u32) -> Rect<u32> {
        Rect::at(Point::new(0, offset_y), image.size())
    }

    pub fn canvas(&self) -> Option<&Image> {
        self.canvas.as_ref()
    }

    /// Current canvas size, zero before the first image.
    pub fn size(&self) -> Size<u32> {
        self.canvas
            .as_ref()
            .map(Image::size)
            .unwrap_or_default()
    }

    /// Vertical offset the next image will be placed at.
    pub fn next_offset_y(&self) -> u32 {
        self.next_offset_y
    }

    pub fn is_empty(&self) -> bool {
        self.canvas.is_none()
    }

    /// Places an image, starting a new canvas if there is none yet.
    pub fn push(&mut self, image: Image) -> Rect<u32> {
        let bounds = Self::compute_bounds(&image, self.next_offset_y);

        match self.canvas.as_mut() {
            Some(canvas) => Self::merge(canvas, &image, self.fill),
            None => self.canvas = Some(image),
        }

        self.next_offset_y = bounds.max.y;
        bounds
    }

    /// Makes `image` the canvas. Only valid while there is no canvas yet.
    pub fn bootstrap(&mut self, image: Image) -> Result<Rect<u32>, AtlasError> {
        if self.canvas.is_some() {
            return Err(AtlasError::AlreadyBootstrapped);
        }

        Ok(self.push(image))
    }

    /// Places `image` below the current canvas. Only valid once the canvas exists.
    pub fn append(&mut self, image: Image) -> Result<Rect<u32>, AtlasError> {
        if self.canvas.is_none() {
            return Err(AtlasError::NotBootstrapped);
        }

        Ok(self.push(image))
    }

    fn merge(canvas: &mut Image, image: &Image, fill: RGBA8) {
        let old = canvas.size();
        let size = Size::new(old.w.max(image.width()), old.h + image.height());

        let mut merged = Image::new(size, fill);
        merged.blit(canvas, Point::new(0, 0));
        merged.blit(image, Point::new(0, old.h));

        trace!(
            "Merged a {}x{} image, canvas grew from {}x{} to {}x{}",
            image.width(),
            image.height(),
            old.w,
            old.h,
            size.w,
            size.h
        );

        *canvas = merged;
    }
}
