use css_color::Rgba;

use crate::geometry::Vec2;

/// Position, origin, scale, and rotation shared by every element kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Transform {
    pub position: Vec2,
    pub origin: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

/// Fill and outline paint of filled shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Paint {
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: Rgba::WHITE,
            outline: Rgba::WHITE,
            outline_thickness: 0.0,
        }
    }
}

/// Forward the transform half of `Styleable` to `self.transform`. Callers
/// import `Vec2`.
macro_rules! forward_transform {
    () => {
        fn position(&self) -> Vec2 {
            self.transform.position
        }

        fn set_position(&mut self, position: Vec2) {
            self.transform.position = position;
        }

        fn origin(&self) -> Vec2 {
            self.transform.origin
        }

        fn set_origin(&mut self, origin: Vec2) {
            self.transform.origin = origin;
        }

        fn scale(&self) -> Vec2 {
            self.transform.scale
        }

        fn set_scale(&mut self, scale: Vec2) {
            self.transform.scale = scale;
        }

        fn rotation(&self) -> f32 {
            self.transform.rotation
        }

        fn set_rotation(&mut self, degrees: f32) {
            self.transform.rotation = degrees;
        }
    };
}

/// Forward fill and outline operations to `self.paint`. Callers import `Rgba`.
macro_rules! forward_paint {
    () => {
        fn fill_color(&self) -> Rgba {
            self.paint.fill
        }

        fn set_fill_color(&mut self, color: Rgba) {
            self.paint.fill = color;
        }

        fn outline_color(&self) -> Rgba {
            self.paint.outline
        }

        fn set_outline_color(&mut self, color: Rgba) {
            self.paint.outline = color;
        }

        fn set_outline_thickness(&mut self, thickness: f32) {
            self.paint.outline_thickness = thickness;
        }
    };
}

pub(crate) use {forward_paint, forward_transform};
