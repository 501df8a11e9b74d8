//! The capability set every styleable element exposes to the styling core.

use css_color::Rgba;
use core::fmt::Debug;

use crate::geometry::{FloatRect, Vec2};
use crate::text_style::TextStyle;

/// Geometry, color, and text operations over one visual element.
///
/// Implement this for each element kind. Text-only operations and `set_size`
/// default to no-ops so a kind only overrides what it supports; text elements,
/// for instance, are sized through their character size instead.
pub trait Styleable: Debug {
    /// Top-left position in the parent frame.
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);

    /// Displace the element by `delta`.
    fn move_by(&mut self, delta: Vec2) {
        let position = self.position();
        self.set_position(position + delta);
    }

    fn origin(&self) -> Vec2;

    fn set_origin(&mut self, origin: Vec2);

    fn scale(&self) -> Vec2;

    fn set_scale(&mut self, scale: Vec2);

    /// Absolute rotation in degrees.
    fn rotation(&self) -> f32;

    fn set_rotation(&mut self, degrees: f32);

    /// Visual bounding size of the element.
    fn size(&self) -> Vec2;

    /// Resize the element. No-op for kinds without an intrinsic size.
    fn set_size(&mut self, _size: Vec2) {}

    /// Local bounds of the element.
    fn bounds(&self) -> FloatRect;

    fn fill_color(&self) -> Rgba;

    fn set_fill_color(&mut self, color: Rgba);

    fn outline_color(&self) -> Rgba;

    fn set_outline_color(&mut self, color: Rgba);

    fn set_outline_thickness(&mut self, thickness: f32);

    fn set_character_size(&mut self, _size: u32) {}

    fn set_letter_spacing(&mut self, _factor: f32) {}

    fn set_line_spacing(&mut self, _factor: f32) {}

    fn set_text_style(&mut self, _style: TextStyle) {}

    /// True for text elements, whose `color` is their fill.
    fn is_text(&self) -> bool {
        false
    }

    /// True for image/sprite elements.
    fn is_sprite(&self) -> bool {
        false
    }

    /// Human-readable kind name used in logs.
    fn type_name(&self) -> &'static str;
}
