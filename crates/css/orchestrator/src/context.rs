//! Per-call style context and the containing block it is resolved against.

use css_box::BoxModel;
use css_flexbox::FlexLayout;
use css_position::PositionMode;
use css_transforms::PendingTranslation;
use css_values_units::Viewport;
use log::trace;
use styleable::{StyleHandle, Vec2};

/// Everything one styling call resolves: the target, its containing block,
/// and the state declarations build up on the way.
///
/// A context lives for exactly one call and is discarded afterwards.
#[derive(Debug)]
pub struct StyleContext {
    pub target: StyleHandle,
    /// Size of the containing block; percentages resolve against it.
    pub parent_size: Vec2,
    /// Origin of the containing block.
    pub parent_position: Vec2,
    pub viewport: Viewport,
    pub box_model: BoxModel,
    pub flex: FlexLayout,
    pub position_mode: PositionMode,
    pub pending_translation: PendingTranslation,
}

impl StyleContext {
    /// Build a context for `target`.
    ///
    /// A parent supplies the containing block from its current size and
    /// position; without one the viewport at `(0, 0)` is the containing block.
    pub fn new(target: &StyleHandle, parent: Option<&StyleHandle>, viewport: Viewport) -> Self {
        let (parent_size, parent_position) = parent.map_or_else(
            || (Vec2::new(viewport.width, viewport.height), Vec2::ZERO),
            |element| (element.size(), element.position()),
        );
        trace!(
            target: "css::context",
            "context for {}: containing block {parent_position:?} {parent_size:?}",
            target.type_name()
        );
        Self {
            target: target.clone(),
            parent_size,
            parent_position,
            viewport,
            box_model: BoxModel::default(),
            flex: FlexLayout::default(),
            position_mode: PositionMode::default(),
            pending_translation: PendingTranslation::default(),
        }
    }

    /// Shorter side of the containing block, the reference for one-value
    /// `size` and `radius`.
    #[inline]
    pub fn parent_min_side(&self) -> f32 {
        self.parent_size.min_component()
    }
}
