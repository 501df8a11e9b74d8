//! Box model: padding and margin resolved for one styled element.
//!
//! Padding insets the element's children; margin offsets the element itself
//! when it is positioned. Borders are drawn as the element outline and take no
//! part in layout here.

#![forbid(unsafe_code)]

use css_values_units::{FourSides, Viewport, parse_four_sides, resolve_length};
use styleable::Vec2;

/// Resolved padding and margin, all in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxModel {
    pub padding: FourSides,
    pub margin: FourSides,
}

/// Origin and size of an element's content box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentBox {
    pub origin: Vec2,
    pub size: Vec2,
}

impl BoxModel {
    /// Offset from an element's top-left corner to its content box.
    #[inline]
    pub const fn padding_offset(&self) -> Vec2 {
        Vec2::new(self.padding.left, self.padding.top)
    }

    /// Size left for content once padding is removed from `outer`.
    #[inline]
    pub fn inner_size(&self, outer: Vec2) -> Vec2 {
        Vec2::new(
            outer.x - self.padding.left - self.padding.right,
            outer.y - self.padding.top - self.padding.bottom,
        )
    }

    /// Content box of an element at `position` with outer size `size`.
    pub fn content_box(&self, position: Vec2, size: Vec2) -> ContentBox {
        ContentBox {
            origin: position + self.padding_offset(),
            size: self.inner_size(size),
        }
    }

    /// Apply a `padding*` or `margin*` declaration.
    ///
    /// Shorthands resolve every side against the parent width and overwrite all
    /// four sides; longhands overwrite one side, with top/bottom resolved
    /// against the parent height and left/right against the parent width.
    /// Returns `false` for any other property.
    pub fn apply_declaration(
        &mut self,
        property: &str,
        value: &str,
        parent_size: Vec2,
        viewport: Viewport,
    ) -> bool {
        let horizontal = || resolve_length(value, parent_size.x, viewport);
        let vertical = || resolve_length(value, parent_size.y, viewport);
        match property {
            "padding" => self.padding = parse_four_sides(value, parent_size.x, viewport),
            "padding-top" => self.padding.top = vertical(),
            "padding-right" => self.padding.right = horizontal(),
            "padding-bottom" => self.padding.bottom = vertical(),
            "padding-left" => self.padding.left = horizontal(),
            "margin" => self.margin = parse_four_sides(value, parent_size.x, viewport),
            "margin-top" => self.margin.top = vertical(),
            "margin-right" => self.margin.right = horizontal(),
            "margin-bottom" => self.margin.bottom = vertical(),
            "margin-left" => self.margin.left = horizontal(),
            _ => return false,
        }
        true
    }
}
