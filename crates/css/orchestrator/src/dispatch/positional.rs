//! Position mode (pass 1) and insets and centering (pass 2).

use css_position::{Inset, PositionMode, ReferenceFrame};
use css_values_units::{to_lower, trim};
use log::trace;

use crate::context::StyleContext;

/// Record the `position` mode. Pass 1.
pub(super) fn apply_mode(context: &mut StyleContext, property: &str, value: &str) -> bool {
    if property != "position" {
        return false;
    }
    context.position_mode = PositionMode::from_value(value);
    true
}

/// Properties handled only in pass 2.
pub(super) fn is_positional(property: &str) -> bool {
    Inset::from_property(property).is_some()
}

/// Apply an inset or `position: center`. Pass 2.
///
/// The target's position and size are read afresh for every declaration, so
/// later insets see the effect of earlier ones.
pub(super) fn apply_positional(context: &StyleContext, property: &str, value: &str) {
    let frame = ReferenceFrame::select(
        context.position_mode,
        context.parent_position,
        context.parent_size,
        context.viewport,
    );
    let target = &context.target;
    if let Some(inset) = Inset::from_property(property) {
        let placed = inset.place(
            value,
            &frame,
            target.position(),
            target.size(),
            &context.box_model.margin,
            context.viewport,
        );
        trace!(target: "css::dispatch", "{property}: {value} places {} at {placed:?}", target.type_name());
        target.set_position(placed);
    } else if property == "position" && to_lower(trim(value)) == "center" {
        target.set_position(frame.center(target.size()));
    }
}
