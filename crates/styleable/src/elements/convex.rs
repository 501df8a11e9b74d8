use css_color::Rgba;

use super::shape::{Paint, Transform, forward_paint, forward_transform};
use crate::capability::Styleable;
use crate::geometry::{FloatRect, Vec2};

/// Convex polygon over a list of local points.
///
/// The polygon is resized through its scale: `size` is the local bounding box
/// times the scale, and `set_size` picks the scale that reaches the request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvexShape {
    transform: Transform,
    paint: Paint,
    points: Vec<Vec2>,
}

impl ConvexShape {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

impl Styleable for ConvexShape {
    forward_transform!();
    forward_paint!();

    fn size(&self) -> Vec2 {
        let local = self.bounds().size();
        Vec2::new(local.x * self.transform.scale.x, local.y * self.transform.scale.y)
    }

    fn set_size(&mut self, size: Vec2) {
        let local = self.bounds().size();
        if local.x > 0.0 {
            self.transform.scale.x = size.x / local.x;
        }
        if local.y > 0.0 {
            self.transform.scale.y = size.y / local.y;
        }
    }

    fn bounds(&self) -> FloatRect {
        FloatRect::enclosing(&self.points)
    }

    fn type_name(&self) -> &'static str {
        "ConvexShape"
    }
}
