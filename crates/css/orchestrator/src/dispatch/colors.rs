//! Fill, outline, and opacity.

use css_color::parse_color;
use css_values_units::{parse_absolute, percentage, trim, try_parse_number};
use log::warn;

use crate::context::StyleContext;

pub(super) fn apply(context: &StyleContext, property: &str, value: &str) -> bool {
    let target = &context.target;
    match property {
        "background-color" | "fill" | "fill-color" | "tint" => {
            target.set_fill_color(parse_color(value));
        }
        // Text and images are painted with their fill; shapes take `color` as
        // their outline.
        "color" => {
            if target.is_text() || target.is_sprite() {
                target.set_fill_color(parse_color(value));
            } else {
                target.set_outline_color(parse_color(value));
            }
        }
        "border-color" | "outline-color" => target.set_outline_color(parse_color(value)),
        "border-width" => {
            target.set_outline_thickness(parse_absolute(value));
        }
        "opacity" => match opacity_alpha(value) {
            Some(alpha) => target.set_fill_color(target.fill_color().with_alpha(alpha)),
            None => warn!(target: "css::dispatch", "unparsable opacity {value:?}"),
        },
        _ => return false,
    }
    true
}

/// Alpha channel for an `opacity` value.
///
/// `p%` is a percentage of full alpha. Plain numbers up to 1 are fractions and
/// anything larger is taken as a 0-255 alpha already. The result is clamped.
fn opacity_alpha(value: &str) -> Option<u8> {
    let scaled = match percentage(value) {
        Some(percent) => percent / 100.0 * 255.0,
        None => {
            let number = try_parse_number(trim(value))?;
            if number <= 1.0 { number * 255.0 } else { number }
        }
    };
    Some(scaled.clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_forms() {
        assert_eq!(opacity_alpha("0.5"), Some(127));
        assert_eq!(opacity_alpha("1"), Some(255));
        assert_eq!(opacity_alpha("128"), Some(128));
        assert_eq!(opacity_alpha("50%"), Some(127));
        assert_eq!(opacity_alpha("-3"), Some(0));
        assert_eq!(opacity_alpha("900"), Some(255));
        assert_eq!(opacity_alpha("half"), None);
    }
}
