use std::{
    fmt::{self, Display},
    ops::{Add, Sub},
};

use derive_more::Constructor;

#[derive(Constructor, Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> From<(T, T)> for Size<T> {
    fn from((w, h): (T, T)) -> Self {
        Self::new(w, h)
    }
}

#[derive(Constructor, Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

/// Axis aligned rectangle defined by two corners.
///
/// The rectangle is half-open on both axes: `min` is the first pixel inside it,
/// `max` is the first pixel past it. A rectangle with `min == max` on any axis is empty.
#[derive(Constructor, Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl<T> From<(T, T, T, T)> for Rect<T> {
    fn from((min_x, min_y, max_x, max_y): (T, T, T, T)) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }
}

impl<T: Copy + Sub<Output = T>> Rect<T> {
    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Size<T> {
        Size::new(self.width(), self.height())
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    /// A rectangle of `size` with its top-left corner at `offset`.
    pub fn at(offset: Point<T>, size: Size<T>) -> Self {
        Self::new(offset, Point::new(offset.x + size.w, offset.y + size.h))
    }
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn contains(&self, point: Point<T>) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
    }

    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// True if `other` lies entirely inside this rectangle.
    pub fn encloses(&self, other: &Rect<T>) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }
}

impl<T: Default> From<Size<T>> for Rect<T> {
    fn from(value: Size<T>) -> Self {
        Self::new(Point::default(), Point::new(value.w, value.h))
    }
}

impl Rect<u32> {
    /// Converts a rectangle in pixels into texture space, where (0; 0) is the top-left
    /// corner of the texture and (1; 1) is its bottom-right corner.
    pub fn in_texture_space(&self, texture_size: Size<u32>) -> Rect<f32> {
        let w = texture_size.w as f32;
        let h = texture_size.h as f32;

        Rect::new(
            Point::new(self.min.x as f32 / w, self.min.y as f32 / h),
            Point::new(self.max.x as f32 / w, self.max.y as f32 / h),
        )
    }
}

impl<T: Display> Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
