use css_color::Rgba;

use super::shape::{Paint, Transform, forward_paint, forward_transform};
use crate::capability::Styleable;
use crate::geometry::{FloatRect, Vec2};
use crate::text_style::TextStyle;

/// Average glyph advance as a fraction of the character size.
const GLYPH_ADVANCE: f32 = 0.6;

/// Text run with approximate metrics.
///
/// Without a font the extent is estimated: the width is the longest line's
/// character count times `character_size * 0.6 * letter_spacing`, the height
/// is the line count times `character_size * line_spacing`. Text is sized by
/// its character size, so `set_size` is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    transform: Transform,
    paint: Paint,
    string: String,
    character_size: u32,
    letter_spacing: f32,
    line_spacing: f32,
    style: TextStyle,
}

impl TextElement {
    pub const DEFAULT_CHARACTER_SIZE: u32 = 30;

    pub fn new(string: impl Into<String>) -> Self {
        Self {
            transform: Transform::default(),
            paint: Paint::default(),
            string: string.into(),
            character_size: Self::DEFAULT_CHARACTER_SIZE,
            letter_spacing: 1.0,
            line_spacing: 1.0,
            style: TextStyle::empty(),
        }
    }

    #[inline]
    pub fn string(&self) -> &str {
        &self.string
    }

    #[inline]
    pub const fn character_size(&self) -> u32 {
        self.character_size
    }

    #[inline]
    pub const fn letter_spacing(&self) -> f32 {
        self.letter_spacing
    }

    #[inline]
    pub const fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    #[inline]
    pub const fn style(&self) -> TextStyle {
        self.style
    }

    fn extent(&self) -> Vec2 {
        let longest = self
            .string
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = self.string.lines().count();
        let size = self.character_size as f32;
        Vec2::new(
            longest as f32 * size * GLYPH_ADVANCE * self.letter_spacing,
            line_count as f32 * size * self.line_spacing,
        )
    }
}

impl Styleable for TextElement {
    forward_transform!();
    forward_paint!();

    fn size(&self) -> Vec2 {
        self.extent()
    }

    fn bounds(&self) -> FloatRect {
        let extent = self.extent();
        FloatRect::new(0.0, 0.0, extent.x, extent.y)
    }

    fn set_character_size(&mut self, size: u32) {
        self.character_size = size;
    }

    fn set_letter_spacing(&mut self, factor: f32) {
        self.letter_spacing = factor;
    }

    fn set_line_spacing(&mut self, factor: f32) {
        self.line_spacing = factor;
    }

    fn set_text_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    fn is_text(&self) -> bool {
        true
    }

    fn type_name(&self) -> &'static str {
        "TextElement"
    }
}
