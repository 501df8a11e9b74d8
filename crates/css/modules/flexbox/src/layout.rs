//! Placing children inside a styled container.

use css_box::{BoxModel, ContentBox};
use log::{debug, trace};
use styleable::{StyleHandle, Vec2};

use crate::container::{AlignItems, FlexLayout};
use crate::distribution::{cross_offset, justify_params, remaining_space};

/// Lay out `children` inside `container`.
///
/// With flex enabled the children are distributed along the main axis of the
/// container's content box in one pass, in list order, without wrapping.
/// Otherwise each child's current position is taken as local to the content
/// box and translated into the container's frame.
pub fn layout_children(
    container: &StyleHandle,
    model: &BoxModel,
    flex: &FlexLayout,
    children: &[StyleHandle],
) {
    if children.is_empty() {
        return;
    }
    let content = model.content_box(container.position(), container.size());
    if flex.enabled {
        distribute(&content, flex, children);
    } else {
        offset_into_content_box(content.origin, children);
    }
}

fn offset_into_content_box(origin: Vec2, children: &[StyleHandle]) {
    for child in children {
        child.move_by(origin);
        trace!(target: "css::flexbox", "offset {} to {:?}", child.type_name(), child.position());
    }
}

/// Per-axis view of a content box.
struct Axes {
    column: bool,
}

impl Axes {
    #[inline]
    const fn main(&self, vector: Vec2) -> f32 {
        if self.column { vector.y } else { vector.x }
    }

    #[inline]
    const fn cross(&self, vector: Vec2) -> f32 {
        if self.column { vector.x } else { vector.y }
    }

    #[inline]
    const fn point(&self, main: f32, cross: f32) -> Vec2 {
        if self.column {
            Vec2::new(cross, main)
        } else {
            Vec2::new(main, cross)
        }
    }
}

fn distribute(content: &ContentBox, flex: &FlexLayout, children: &[StyleHandle]) {
    let axes = Axes {
        column: flex.direction.is_column(),
    };
    let extents: Vec<f32> = children.iter().map(|child| axes.main(child.size())).collect();
    let available = axes.main(content.size);
    let remaining = remaining_space(available, &extents, flex.gap);
    let (leading, between) = justify_params(flex.justify, remaining, children.len());
    debug!(
        target: "css::flexbox",
        "distributing {} children: available={available:.3} remaining={remaining:.3} leading={leading:.3} between={between:.3} gap={:.3} {:?}/{:?}",
        children.len(),
        flex.gap,
        flex.justify,
        flex.align
    );

    let cross_start = axes.cross(content.origin);
    let cross_available = axes.cross(content.size);
    let mut cursor = axes.main(content.origin) + leading;
    for child in children {
        if flex.align == AlignItems::Stretch {
            let size = child.size();
            child.set_size(axes.point(axes.main(size), cross_available));
        }
        // Re-read: stretching may change the main extent as well.
        let size = child.size();
        let cross = cross_offset(flex.align, cross_start, cross_available, axes.cross(size));
        let position = axes.point(cursor, cross);
        child.set_position(position);
        trace!(target: "css::flexbox", "placed {} at {position:?} size {size:?}", child.type_name());
        cursor += axes.main(size) + flex.gap + between;
    }
}
