//! Transforms: the `transform` property applied to a styleable element.
//!
//! Pixel translations, rotation, and scale take effect immediately.
//! `translateX(%)`/`translateY(%)` are measured against the element's final
//! size, which is only known once every other declaration has been applied,
//! so they are held in a [`PendingTranslation`] and flushed at the end.

#![forbid(unsafe_code)]

mod function;
mod scan;

pub use function::{Offset, TransformFunction};
pub use scan::{FunctionCall, scan_functions};

use log::debug;
use styleable::{StyleHandle, Vec2};

/// Percentage translations waiting for the element's final size.
///
/// Only the last `translateX(%)` and the last `translateY(%)` survive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendingTranslation {
    pub x_percent: Option<f32>,
    pub y_percent: Option<f32>,
}

impl PendingTranslation {
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x_percent.is_none() && self.y_percent.is_none()
    }

    /// Move `target` by the pending percentages of its current size and clear
    /// them, so a second flush does nothing.
    pub fn flush(&mut self, target: &StyleHandle) {
        if self.is_empty() {
            return;
        }
        let size = target.size();
        let delta = Vec2::new(
            self.x_percent.take().map_or(0.0, |percent| size.x * percent / 100.0),
            self.y_percent.take().map_or(0.0, |percent| size.y * percent / 100.0),
        );
        debug!(target: "css::transforms", "flushing percentage translation {delta:?} on {}", target.type_name());
        target.move_by(delta);
    }
}

/// Apply every recognized function of a `transform` value to `target`, in
/// order. Percentage `translateX`/`translateY` go to `pending` instead.
pub fn apply_transform(target: &StyleHandle, value: &str, pending: &mut PendingTranslation) {
    for call in scan_functions(value) {
        if let Some(function) = TransformFunction::from_call(&call) {
            apply_function(target, function, pending);
        }
    }
}

/// Apply one transform function.
pub fn apply_function(
    target: &StyleHandle,
    function: TransformFunction,
    pending: &mut PendingTranslation,
) {
    match function {
        TransformFunction::TranslateX(Offset::Percent(percent)) => pending.x_percent = Some(percent),
        TransformFunction::TranslateX(Offset::Pixels(pixels)) => {
            target.move_by(Vec2::new(pixels, 0.0));
        }
        TransformFunction::TranslateY(Offset::Percent(percent)) => pending.y_percent = Some(percent),
        TransformFunction::TranslateY(Offset::Pixels(pixels)) => {
            target.move_by(Vec2::new(0.0, pixels));
        }
        TransformFunction::Translate(horizontal, vertical) => {
            let size = target.size();
            target.move_by(Vec2::new(horizontal.resolve(size.x), vertical.resolve(size.y)));
        }
        TransformFunction::Rotate(degrees) => target.set_rotation(degrees),
        TransformFunction::Scale(horizontal, vertical) => {
            target.set_scale(Vec2::new(horizontal, vertical));
        }
        TransformFunction::ScaleX(horizontal) => {
            let current = target.scale();
            target.set_scale(Vec2::new(horizontal, current.y));
        }
        TransformFunction::ScaleY(vertical) => {
            let current = target.scale();
            target.set_scale(Vec2::new(current.x, vertical));
        }
    }
}
