//! Plain geometry values exchanged with styleable elements.

use core::ops::Add;

/// A 2D vector in pixels, used for positions, sizes, origins, and scales.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The smaller of the two components.
    #[inline]
    pub fn min_component(self) -> f32 {
        self.x.min(self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// An axis-aligned rectangle in local element coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl FloatRect {
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub const fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Smallest rectangle containing every point, or an empty rectangle at the
    /// origin when there are none.
    pub fn enclosing(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let (min, max) = points
            .iter()
            .fold((*first, *first), |(min, max), point| {
                (
                    Vec2::new(min.x.min(point.x), min.y.min(point.y)),
                    Vec2::new(max.x.max(point.x), max.y.max(point.y)),
                )
            });
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}
