use css_color::Rgba;

use super::shape::{Paint, Transform, forward_paint, forward_transform};
use crate::capability::Styleable;
use crate::geometry::{FloatRect, Vec2};

/// Circle described by its radius. Its size is the enclosing square.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircleShape {
    transform: Transform,
    paint: Paint,
    radius: f32,
}

impl CircleShape {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    #[inline]
    pub const fn radius(&self) -> f32 {
        self.radius
    }
}

impl Styleable for CircleShape {
    forward_transform!();
    forward_paint!();

    fn size(&self) -> Vec2 {
        let diameter = self.radius * 2.0;
        Vec2::new(diameter, diameter)
    }

    /// The circle fits inside the requested box: radius = min(w, h) / 2.
    fn set_size(&mut self, size: Vec2) {
        self.radius = size.min_component() / 2.0;
    }

    fn bounds(&self) -> FloatRect {
        let diameter = self.radius * 2.0;
        FloatRect::new(0.0, 0.0, diameter, diameter)
    }

    fn type_name(&self) -> &'static str {
        "CircleShape"
    }
}
