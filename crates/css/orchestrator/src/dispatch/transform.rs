//! `transform` plus the direct `rotation`, `scale*`, and `origin` setters.

use css_transforms::apply_transform;
use css_values_units::{parse_absolute, parse_number, tokenize};
use styleable::Vec2;

use crate::context::StyleContext;

pub(super) fn apply(context: &mut StyleContext, property: &str, value: &str) -> bool {
    let target = &context.target;
    match property {
        "transform" => apply_transform(target, value, &mut context.pending_translation),
        "rotation" => target.set_rotation(parse_number(value)),
        "scale" => match tokenize(value).as_slice() {
            [] => {}
            [uniform] => {
                let factor = parse_number(uniform);
                target.set_scale(Vec2::new(factor, factor));
            }
            [horizontal, vertical, ..] => {
                target.set_scale(Vec2::new(parse_number(horizontal), parse_number(vertical)));
            }
        },
        "scale-x" => target.set_scale(Vec2::new(parse_number(value), target.scale().y)),
        "scale-y" => target.set_scale(Vec2::new(target.scale().x, parse_number(value))),
        "origin" => {
            if let [horizontal, vertical, ..] = tokenize(value).as_slice() {
                target.set_origin(Vec2::new(parse_absolute(horizontal), parse_absolute(vertical)));
            }
        }
        _ => return false,
    }
    true
}
