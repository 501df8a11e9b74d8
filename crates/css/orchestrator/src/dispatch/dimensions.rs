//! `width`, `height`, `size`, `radius`, and the `min-*`/`max-*` clamps.

use css_values_units::{resolve_length, to_lower, tokenize, trim};
use styleable::Vec2;

use crate::context::StyleContext;

pub(super) fn apply(context: &StyleContext, property: &str, value: &str) -> bool {
    let target = &context.target;
    let viewport = context.viewport;
    let horizontal = || resolve_length(value, context.parent_size.x, viewport);
    let vertical = || resolve_length(value, context.parent_size.y, viewport);
    let current = target.size();
    match property {
        "width" => target.set_size(Vec2::new(horizontal(), current.y)),
        "height" => target.set_size(Vec2::new(current.x, vertical())),
        "size" => match tokenize(value).as_slice() {
            [] => {}
            [uniform] => {
                let side = resolve_length(uniform, context.parent_min_side(), viewport);
                target.set_size(Vec2::new(side, side));
            }
            [width, height, ..] => target.set_size(Vec2::new(
                resolve_length(width, context.parent_size.x, viewport),
                resolve_length(height, context.parent_size.y, viewport),
            )),
        },
        "radius" => {
            let diameter = resolve_length(value, context.parent_min_side(), viewport) * 2.0;
            target.set_size(Vec2::new(diameter, diameter));
        }
        "min-width" => {
            let bound = horizontal();
            if current.x < bound {
                target.set_size(Vec2::new(bound, current.y));
            }
        }
        "min-height" => {
            let bound = vertical();
            if current.y < bound {
                target.set_size(Vec2::new(current.x, bound));
            }
        }
        "max-width" if !is_unbounded(value) => {
            let bound = horizontal();
            if current.x > bound {
                target.set_size(Vec2::new(bound, current.y));
            }
        }
        "max-height" if !is_unbounded(value) => {
            let bound = vertical();
            if current.y > bound {
                target.set_size(Vec2::new(current.x, bound));
            }
        }
        "max-width" | "max-height" => {}
        _ => return false,
    }
    true
}

/// `auto` and `none` impose no maximum.
fn is_unbounded(value: &str) -> bool {
    matches!(to_lower(trim(value)).as_str(), "auto" | "none")
}
