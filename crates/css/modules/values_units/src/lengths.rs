//! Length resolution: `px`, `%`, `vw`, `vh`, pixel-equivalent units, `auto`,
//! and the four-side shorthand expansion used by `padding` and `margin`.

use crate::strings::{parse_number, tokenize, trim};

/// Units stripped before numeric parsing. All of them are treated as pixels;
/// there are no font metrics to scale `em`/`rem`/`pt` by. `rem` precedes `em`
/// so the longer suffix wins.
const PIXEL_EQUIVALENT_UNITS: [&str; 5] = ["px", "rem", "em", "pt", "dp"];

/// Viewport metrics used to evaluate viewport-relative units and as the
/// containing block when no parent element is supplied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Resolved `top`/`right`/`bottom`/`left` values in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FourSides {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl FourSides {
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Return the number in front of a trailing `%`, if the value is a percentage.
pub fn percentage(value: &str) -> Option<f32> {
    trim(value).strip_suffix('%').map(parse_number)
}

/// Strip a trailing unit, ASCII case-insensitively.
fn strip_unit_suffix<'text>(text: &'text str, unit: &str) -> Option<&'text str> {
    let split_at = text.len().checked_sub(unit.len())?;
    let suffix = text.get(split_at..)?;
    if suffix.eq_ignore_ascii_case(unit) {
        text.get(..split_at)
    } else {
        None
    }
}

/// Resolve a length that needs no context (`px`, `em`, `rem`, `pt`, `dp`, or a
/// bare number). Unparsable numbers resolve to `0.0`.
pub fn parse_absolute(value: &str) -> f32 {
    let trimmed = trim(value);
    let numeric = PIXEL_EQUIVALENT_UNITS
        .iter()
        .find_map(|unit| strip_unit_suffix(trimmed, unit))
        .unwrap_or(trimmed);
    parse_number(numeric)
}

/// Resolve a length token to pixels.
///
/// - empty or `auto` → `0.0` (callers own `auto` semantics)
/// - `p%` → `reference * p / 100`
/// - `Nvw` / `Nvh` → percentage of the viewport width / height
/// - anything else → [`parse_absolute`]
pub fn resolve_length(value: &str, reference: f32, viewport: Viewport) -> f32 {
    let trimmed = trim(value);
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return 0.0;
    }
    if let Some(percent) = percentage(trimmed) {
        return reference * percent / 100.0;
    }
    if let Some(number) = strip_unit_suffix(trimmed, "vw") {
        return viewport.width * parse_number(number) / 100.0;
    }
    if let Some(number) = strip_unit_suffix(trimmed, "vh") {
        return viewport.height * parse_number(number) / 100.0;
    }
    parse_absolute(trimmed)
}

/// Expand a CSS four-side shorthand (`padding`, `margin`).
///
/// One token applies to all sides, two are `vertical horizontal`, three are
/// `top horizontal bottom`, four are `top right bottom left`. Extra tokens past
/// the fourth are ignored; no tokens resolve to all zeros. Every token is
/// resolved against the same `reference`.
pub fn parse_four_sides(value: &str, reference: f32, viewport: Viewport) -> FourSides {
    let tokens = tokenize(value);
    let resolved: Vec<f32> = tokens
        .iter()
        .take(4)
        .map(|token| resolve_length(token, reference, viewport))
        .collect();
    match *resolved.as_slice() {
        [all] => FourSides::uniform(all),
        [vertical, horizontal] => FourSides {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        },
        [top, horizontal, bottom] => FourSides {
            top,
            right: horizontal,
            bottom,
            left: horizontal,
        },
        [top, right, bottom, left] => FourSides {
            top,
            right,
            bottom,
            left,
        },
        _ => FourSides::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 720.0);

    fn approx(actual: f32, expected: f32) -> bool {
        (actual - expected).abs() < 0.001
    }

    #[test]
    fn auto_and_empty_resolve_to_zero() {
        assert!(approx(resolve_length("auto", 500.0, VIEWPORT), 0.0));
        assert!(approx(resolve_length("AUTO", 500.0, VIEWPORT), 0.0));
        assert!(approx(resolve_length("   ", 500.0, VIEWPORT), 0.0));
    }

    #[test]
    fn percentages_scale_the_reference_exactly() {
        for (percent, reference) in [(0.0f32, 640.0f32), (100.0, 640.0), (33.0, 917.0), (90.0, 800.0)] {
            let resolved = resolve_length(&format!("{percent}%"), reference, VIEWPORT);
            assert_eq!(resolved.to_bits(), (reference * percent / 100.0).to_bits());
        }
    }

    #[test]
    fn viewport_units_use_the_matching_axis() {
        assert!(approx(resolve_length("50vw", 10.0, VIEWPORT), 640.0));
        assert!(approx(resolve_length("10VH", 10.0, VIEWPORT), 72.0));
    }

    #[test]
    fn pixel_equivalent_units_are_stripped() {
        assert!(approx(resolve_length("24px", 0.0, VIEWPORT), 24.0));
        assert!(approx(resolve_length("2rem", 0.0, VIEWPORT), 2.0));
        assert!(approx(resolve_length("1.5em", 0.0, VIEWPORT), 1.5));
        assert!(approx(resolve_length("12pt", 0.0, VIEWPORT), 12.0));
        assert!(approx(resolve_length("8dp", 0.0, VIEWPORT), 8.0));
        assert!(approx(resolve_length("7", 0.0, VIEWPORT), 7.0));
        assert!(approx(resolve_length("wide", 0.0, VIEWPORT), 0.0));
    }

    #[test]
    fn four_sides_follow_css_shorthand_expansion() {
        let one = parse_four_sides("10px", 0.0, VIEWPORT);
        assert_eq!(one, FourSides::uniform(10.0));

        let two = parse_four_sides("10px 20px", 0.0, VIEWPORT);
        assert_eq!(
            two,
            FourSides {
                top: 10.0,
                right: 20.0,
                bottom: 10.0,
                left: 20.0
            }
        );

        let three = parse_four_sides("10px 20px 5px", 0.0, VIEWPORT);
        assert_eq!(
            three,
            FourSides {
                top: 10.0,
                right: 20.0,
                bottom: 5.0,
                left: 20.0
            }
        );

        let four = parse_four_sides("10px 20px 5px 15px", 0.0, VIEWPORT);
        assert_eq!(
            four,
            FourSides {
                top: 10.0,
                right: 20.0,
                bottom: 5.0,
                left: 15.0
            }
        );

        assert_eq!(parse_four_sides("", 0.0, VIEWPORT), FourSides::default());
    }

    #[test]
    fn four_sides_resolve_percentages_against_one_reference() {
        let sides = parse_four_sides("10% 5%", 200.0, VIEWPORT);
        assert!(approx(sides.top, 20.0));
        assert!(approx(sides.left, 10.0));
    }
}
