use rgb::{ComponentBytes, RGBA8};
use sheetpack_geometry::{Point, Rect, Size};

use crate::DecodeError;

/// An RGBA pixel grid, stored row by row starting from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    size: Size<u32>,
    pixels: Vec<RGBA8>,
}

impl Image {
    /// A blank image with every pixel set to `fill`.
    pub fn new(size: Size<u32>, fill: RGBA8) -> Self {
        Self {
            size,
            pixels: vec![fill; size.w as usize * size.h as usize],
        }
    }

    pub fn from_pixels(size: Size<u32>, pixels: Vec<RGBA8>) -> Result<Self, DecodeError> {
        if size.w == 0 || size.h == 0 {
            return Err(DecodeError::EmptyImage);
        }

        let expected = size.w as usize * size.h as usize;
        if pixels.len() != expected {
            return Err(DecodeError::PixelCount {
                size,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self { size, pixels })
    }

    #[inline]
    pub fn size(&self) -> Size<u32> {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.w
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.h
    }

    #[inline]
    pub fn bounds(&self) -> Rect<u32> {
        Rect::from(self.size)
    }

    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    /// Pixel data as tightly packed RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<RGBA8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Sets a pixel, returning `false` if it lies outside of the image.
    pub fn put(&mut self, x: u32, y: u32, color: RGBA8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Copies every pixel of `src` into this image, with the top-left corner of `src` at `at`.
    ///
    /// Panics if `src` does not fit.
    pub fn blit(&mut self, src: &Image, at: Point<u32>) {
        let target = Rect::at(at, src.size);
        assert!(
            self.bounds().encloses(&target),
            "{target} does not fit into a {}x{} image",
            self.size.w,
            self.size.h
        );

        let src_row = src.size.w as usize;
        for (y, row) in src.pixels.chunks_exact(src_row).enumerate() {
            let start = (at.y as usize + y) * self.size.w as usize + at.x as usize;
            self.pixels[start..start + src_row].copy_from_slice(row);
        }
    }

    /// Copies a region of this image, or returns `None` if `rect` does not fit.
    pub fn sub_image(&self, rect: Rect<u32>) -> Option<Image> {
        if rect.is_empty() || !self.bounds().encloses(&rect) {
            return None;
        }

        let pixels = (rect.min.y..rect.max.y)
            .flat_map(|y| {
                let start = y as usize * self.size.w as usize;
                &self.pixels[start + rect.min.x as usize..start + rect.max.x as usize]
            })
            .copied()
            .collect();

        Some(Self {
            size: rect.size(),
            pixels,
        })
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.size.w && y < self.size.h {
            Some(y as usize * self.size.w as usize + x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> Image {
        let pixels = (0..h)
            .flat_map(|y| (0..w).map(move |x| RGBA8::new(x as u8, y as u8, 7, 255)))
            .collect();
        Image::from_pixels(Size::new(w, h), pixels).unwrap()
    }

    #[test]
    fn test_from_pixels_validates() {
        assert!(matches!(
            Image::from_pixels(Size::new(0, 4), vec![]),
            Err(DecodeError::EmptyImage)
        ));
        assert!(matches!(
            Image::from_pixels(Size::new(2, 2), vec![RGBA8::default(); 3]),
            Err(DecodeError::PixelCount {
                expected: 4,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_get_put() {
        let mut image = Image::new(Size::new(3, 2), RGBA8::default());

        assert!(image.put(2, 1, RGBA8::new(1, 2, 3, 4)));
        assert!(!image.put(3, 1, RGBA8::new(1, 2, 3, 4)));
        assert_eq!(image.get(2, 1), Some(RGBA8::new(1, 2, 3, 4)));
        assert_eq!(image.get(0, 2), None);
        assert_eq!(image.as_bytes().len(), 3 * 2 * 4);
        assert_eq!(&image.as_bytes()[20..24], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_blit_and_sub_image() {
        let src = gradient(2, 3);
        let mut dst = Image::new(Size::new(4, 5), RGBA8::default());

        dst.blit(&src, Point::new(1, 2));

        assert_eq!(dst.get(0, 2), Some(RGBA8::default()));
        assert_eq!(dst.get(1, 2), src.get(0, 0));
        assert_eq!(dst.get(2, 4), src.get(1, 2));
        assert_eq!(dst.sub_image(Rect::from((1, 2, 3, 5))), Some(src));
        assert_eq!(dst.sub_image(Rect::from((1, 2, 3, 6))), None);
        assert_eq!(dst.sub_image(Rect::from((1, 2, 1, 5))), None);
    }

    #[test]
    #[should_panic]
    fn test_blit_out_of_bounds() {
        let mut dst = Image::new(Size::new(2, 2), RGBA8::default());
        dst.blit(&gradient(2, 2), Point::new(1, 0));
    }
}
