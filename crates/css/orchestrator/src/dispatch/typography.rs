//! Text attributes. Non-text elements ignore them.

use css_values_units::{parse_number, resolve_length};
use styleable::TextStyle;

use crate::context::StyleContext;

pub(super) fn apply(context: &StyleContext, property: &str, value: &str) -> bool {
    let target = &context.target;
    match property {
        "font-size" => {
            let size = resolve_length(value, context.parent_size.y, context.viewport);
            target.set_character_size(size.max(0.0) as u32);
        }
        "letter-spacing" => target.set_letter_spacing(parse_number(value)),
        "line-spacing" => target.set_line_spacing(parse_number(value)),
        "font-style" | "text-decoration" => target.set_text_style(TextStyle::from_value(value)),
        _ => return false,
    }
    true
}
