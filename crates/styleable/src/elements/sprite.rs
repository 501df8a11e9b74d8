use css_color::Rgba;

use super::shape::{Transform, forward_transform};
use crate::capability::Styleable;
use crate::geometry::{FloatRect, Vec2};

/// Textured image. Resizing rescales the texture; the tint is its fill color
/// and it has no outline.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteElement {
    transform: Transform,
    texture_size: Vec2,
    tint: Rgba,
}

impl SpriteElement {
    pub fn new(texture_size: Vec2) -> Self {
        Self {
            transform: Transform::default(),
            texture_size,
            tint: Rgba::WHITE,
        }
    }
}

impl Styleable for SpriteElement {
    forward_transform!();

    fn size(&self) -> Vec2 {
        Vec2::new(
            self.texture_size.x * self.transform.scale.x,
            self.texture_size.y * self.transform.scale.y,
        )
    }

    fn set_size(&mut self, size: Vec2) {
        if self.texture_size.x > 0.0 {
            self.transform.scale.x = size.x / self.texture_size.x;
        }
        if self.texture_size.y > 0.0 {
            self.transform.scale.y = size.y / self.texture_size.y;
        }
    }

    fn bounds(&self) -> FloatRect {
        FloatRect::new(0.0, 0.0, self.texture_size.x, self.texture_size.y)
    }

    fn fill_color(&self) -> Rgba {
        self.tint
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.tint = color;
    }

    fn outline_color(&self) -> Rgba {
        Rgba::TRANSPARENT
    }

    fn set_outline_color(&mut self, _color: Rgba) {}

    fn set_outline_thickness(&mut self, _thickness: f32) {}

    fn is_sprite(&self) -> bool {
        true
    }

    fn type_name(&self) -> &'static str {
        "SpriteElement"
    }
}
