//! Main-axis justification and cross-axis placement arithmetic.

use crate::container::{AlignItems, JustifyContent};

/// Leading offset and extra between-item spacing for `justify`.
///
/// `remaining` is the free main-axis space once child extents and gaps are
/// subtracted; it may be negative when children overflow, in which case the
/// offsets follow it without clamping.
pub fn justify_params(justify: JustifyContent, remaining: f32, item_count: usize) -> (f32, f32) {
    let count = item_count as f32;
    match justify {
        JustifyContent::Start => (0.0, 0.0),
        JustifyContent::End => (remaining, 0.0),
        JustifyContent::Center => (remaining / 2.0, 0.0),
        JustifyContent::SpaceBetween => {
            let between = if item_count > 1 { remaining / (count - 1.0) } else { 0.0 };
            (0.0, between)
        }
        JustifyContent::SpaceAround => {
            let between = if item_count > 0 { remaining / count } else { 0.0 };
            (between / 2.0, between)
        }
        JustifyContent::SpaceEvenly => {
            let between = if item_count > 0 { remaining / (count + 1.0) } else { 0.0 };
            (between, between)
        }
    }
}

/// Free main-axis space: `available - Σ extents - gap × (n - 1)`.
pub fn remaining_space(available: f32, extents: &[f32], gap: f32) -> f32 {
    let total: f32 = extents.iter().sum();
    let gaps = gap * extents.len().saturating_sub(1) as f32;
    available - total - gaps
}

/// Cross-axis coordinate of a child with cross extent `extent` inside the
/// span starting at `start` with length `available`. `Stretch` children start
/// at the near edge.
pub fn cross_offset(align: AlignItems, start: f32, available: f32, extent: f32) -> f32 {
    match align {
        AlignItems::Start | AlignItems::Stretch => start,
        AlignItems::End => start + available - extent,
        AlignItems::Center => start + (available - extent) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_pair(actual: (f32, f32), expected: (f32, f32)) {
        assert!((actual.0 - expected.0).abs() < 0.001, "{actual:?} != {expected:?}");
        assert!((actual.1 - expected.1).abs() < 0.001, "{actual:?} != {expected:?}");
    }

    #[test]
    fn justify_table() {
        assert_pair(justify_params(JustifyContent::Start, 60.0, 3), (0.0, 0.0));
        assert_pair(justify_params(JustifyContent::End, 60.0, 3), (60.0, 0.0));
        assert_pair(justify_params(JustifyContent::Center, 60.0, 3), (30.0, 0.0));
        assert_pair(justify_params(JustifyContent::SpaceBetween, 60.0, 3), (0.0, 30.0));
        assert_pair(justify_params(JustifyContent::SpaceAround, 60.0, 3), (10.0, 20.0));
        assert_pair(justify_params(JustifyContent::SpaceEvenly, 60.0, 3), (15.0, 15.0));
    }

    #[test]
    fn degenerate_counts_do_not_divide_by_zero() {
        assert_pair(justify_params(JustifyContent::SpaceBetween, 60.0, 1), (0.0, 0.0));
        assert_pair(justify_params(JustifyContent::SpaceAround, 60.0, 0), (0.0, 0.0));
    }

    #[test]
    fn remaining_subtracts_gaps_between_items_only() {
        assert!((remaining_space(300.0, &[50.0, 50.0, 50.0], 10.0) - 130.0).abs() < 0.001);
        assert!((remaining_space(100.0, &[150.0], 10.0) + 50.0).abs() < 0.001);
    }

    #[test]
    fn cross_offsets() {
        assert!((cross_offset(AlignItems::End, 10.0, 100.0, 30.0) - 80.0).abs() < 0.001);
        assert!((cross_offset(AlignItems::Center, 10.0, 100.0, 30.0) - 45.0).abs() < 0.001);
        assert!((cross_offset(AlignItems::Stretch, 10.0, 100.0, 30.0) - 10.0).abs() < 0.001);
    }
}
