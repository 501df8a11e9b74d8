use css_color::Rgba;

use super::shape::{Paint, Transform, forward_paint, forward_transform};
use crate::capability::Styleable;
use crate::geometry::{FloatRect, Vec2};

/// Axis-aligned rectangle with an explicit size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RectangleShape {
    transform: Transform,
    paint: Paint,
    size: Vec2,
}

impl RectangleShape {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Outline thickness last applied.
    #[inline]
    pub const fn outline_thickness(&self) -> f32 {
        self.paint.outline_thickness
    }
}

impl Styleable for RectangleShape {
    forward_transform!();
    forward_paint!();

    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn bounds(&self) -> FloatRect {
        FloatRect::new(0.0, 0.0, self.size.x, self.size.y)
    }

    fn type_name(&self) -> &'static str {
        "RectangleShape"
    }
}
