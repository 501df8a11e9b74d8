//! CSS colors: hex, `rgb()`/`rgba()`, and named colors into 8-bit RGBA.
//!
//! Parsing never fails: anything unrecognised resolves to opaque white.

#![forbid(unsafe_code)]

use csscolorparser::Color;
use css_values_units::{extract_integers, to_lower, trim};
use log::debug;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Copy of this color with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }
}

/// Parse a color value.
///
/// - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`; any other hex length is white.
/// - `rgb(...)` / `rgba(...)`: integer runs map to R, G, B, A in order; missing
///   channels default to 0 (A to 255) and every channel is clamped to 0..=255.
/// - otherwise a name from the built-in table; unknown names are white.
pub fn parse_color(value: &str) -> Rgba {
    let trimmed = trim(value);
    if trimmed.starts_with('#') {
        return parse_hex(trimmed).unwrap_or_else(|| {
            debug!(target: "css::color", "invalid hex color {trimmed:?}, using white");
            Rgba::WHITE
        });
    }
    let lower = to_lower(trimmed);
    if lower.starts_with("rgb") {
        return parse_rgb_function(&lower);
    }
    named_color(&lower).unwrap_or_else(|| {
        debug!(target: "css::color", "unknown color {trimmed:?}, using white");
        Rgba::WHITE
    })
}

/// Decode a `#`-prefixed hex color. Shorthand forms double each nibble.
fn parse_hex(text: &str) -> Option<Rgba> {
    let digits = text.strip_prefix('#')?;
    if !digits.chars().all(|character| character.is_ascii_hexdigit()) {
        return None;
    }
    let parsed: Color = text.parse().ok()?;
    let [red, green, blue, alpha] = parsed.to_rgba8();
    Some(Rgba::new(red, green, blue, alpha))
}

/// Positional integer extraction for `rgb()`/`rgba()`.
fn parse_rgb_function(value: &str) -> Rgba {
    let channels = extract_integers(value);
    let channel = |index: usize, default: u8| {
        channels.get(index).map_or(default, |&component| {
            u8::try_from(component.clamp(0, 255)).unwrap_or(u8::MAX)
        })
    };
    Rgba::new(channel(0, 0), channel(1, 0), channel(2, 0), channel(3, 255))
}

/// Built-in named color table (lowercase keys).
fn named_color(name: &str) -> Option<Rgba> {
    let color = match name {
        "transparent" => Rgba::TRANSPARENT,
        "black" => Rgba::BLACK,
        "white" => Rgba::WHITE,
        "red" => Rgba::opaque(255, 0, 0),
        "green" => Rgba::opaque(0, 255, 0),
        "blue" => Rgba::opaque(0, 0, 255),
        "yellow" => Rgba::opaque(255, 255, 0),
        "magenta" => Rgba::opaque(255, 0, 255),
        "cyan" => Rgba::opaque(0, 255, 255),
        "gray" | "grey" => Rgba::opaque(128, 128, 128),
        "darkgray" => Rgba::opaque(64, 64, 64),
        "lightgray" => Rgba::opaque(211, 211, 211),
        "orange" => Rgba::opaque(255, 165, 0),
        "darkorange" => Rgba::opaque(255, 140, 0),
        "pink" => Rgba::opaque(255, 192, 203),
        "hotpink" => Rgba::opaque(255, 105, 180),
        "purple" => Rgba::opaque(128, 0, 128),
        "violet" => Rgba::opaque(238, 130, 238),
        "indigo" => Rgba::opaque(75, 0, 130),
        "brown" => Rgba::opaque(165, 42, 42),
        "lime" => Rgba::opaque(50, 205, 50),
        "navy" => Rgba::opaque(0, 0, 128),
        "teal" => Rgba::opaque(0, 128, 128),
        "silver" => Rgba::opaque(192, 192, 192),
        "gold" => Rgba::opaque(255, 215, 0),
        "coral" => Rgba::opaque(255, 127, 80),
        "salmon" => Rgba::opaque(250, 128, 114),
        "crimson" => Rgba::opaque(220, 20, 60),
        "turquoise" => Rgba::opaque(64, 224, 208),
        "skyblue" => Rgba::opaque(135, 206, 235),
        "steelblue" => Rgba::opaque(70, 130, 180),
        "chocolate" => Rgba::opaque(210, 105, 30),
        "tomato" => Rgba::opaque(255, 99, 71),
        "orchid" => Rgba::opaque(218, 112, 214),
        "plum" => Rgba::opaque(221, 160, 221),
        "khaki" => Rgba::opaque(240, 230, 140),
        "beige" => Rgba::opaque(245, 245, 220),
        "ivory" => Rgba::opaque(255, 255, 240),
        "lavender" => Rgba::opaque(230, 230, 250),
        "linen" => Rgba::opaque(250, 240, 230),
        "mintcream" => Rgba::opaque(245, 255, 250),
        "snow" => Rgba::opaque(255, 250, 250),
        "wheat" => Rgba::opaque(245, 222, 179),
        _ => return None,
    };
    Some(color)
}
