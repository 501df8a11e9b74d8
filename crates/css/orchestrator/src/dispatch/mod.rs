//! Two-pass evaluation of declarations against a style context.
//!
//! Pass 1 applies intrinsic properties (size, color, text, transform, box
//! model, flex intent, position mode) in declaration order. Pass 2 applies
//! positional properties, which need the final size from pass 1. Pending
//! percentage translations are flushed last.

mod colors;
mod dimensions;
mod positional;
mod transform;
mod typography;

use css_style_attr::Declaration;
use log::{debug, warn};

use crate::context::StyleContext;

/// Apply `declarations` to `context.target`.
pub fn apply_declarations(context: &mut StyleContext, declarations: &[Declaration]) {
    for declaration in declarations {
        apply_intrinsic(context, &declaration.property, &declaration.value);
    }
    for declaration in declarations {
        positional::apply_positional(context, &declaration.property, &declaration.value);
    }
    context.pending_translation.flush(&context.target);
}

/// Pass 1 for a single declaration.
fn apply_intrinsic(context: &mut StyleContext, property: &str, value: &str) {
    if positional::is_positional(property) {
        return;
    }
    let handled = dimensions::apply(context, property, value)
        || colors::apply(context, property, value)
        || typography::apply(context, property, value)
        || transform::apply(context, property, value)
        || context.box_model.apply_declaration(
            property,
            value,
            context.parent_size,
            context.viewport,
        )
        || context.flex.apply_declaration(
            property,
            value,
            context.parent_size.x,
            context.viewport,
        )
        || positional::apply_mode(context, property, value);
    if handled {
        debug!(target: "css::dispatch", "{} <- {property}: {value}", context.target.type_name());
    } else {
        warn!(target: "css::dispatch", "ignoring unsupported property {property:?}");
    }
}
