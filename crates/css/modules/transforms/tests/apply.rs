#![cfg(test)]

use css_transforms::{PendingTranslation, apply_transform};
use styleable::{RectangleShape, StyleHandle, Vec2};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rectangle(width: f32, height: f32) -> StyleHandle {
    StyleHandle::new(RectangleShape::new(Vec2::new(width, height)))
}

#[test]
fn pixel_translations_move_immediately() {
    init_logging();
    let target = rectangle(10.0, 10.0);
    let mut pending = PendingTranslation::default();
    apply_transform(&target, "translateX(5px) translateY(-3px)", &mut pending);
    assert_eq!(target.position(), Vec2::new(5.0, -3.0));
    assert!(pending.is_empty());
}

#[test]
/// Percentage translations are measured against the size at flush time.
///
/// # Panics
/// Panics if the offset uses the size at parse time or is applied twice.
fn percentage_translation_waits_for_final_size() {
    init_logging();
    let target = rectangle(10.0, 10.0);
    let mut pending = PendingTranslation::default();
    apply_transform(&target, "translateX(10%) translateX(-50%)", &mut pending);
    assert_eq!(target.position(), Vec2::ZERO);
    assert_eq!(pending.x_percent, Some(-50.0));

    target.set_size(Vec2::new(200.0, 40.0));
    pending.flush(&target);
    assert_eq!(target.position(), Vec2::new(-100.0, 0.0));

    pending.flush(&target);
    assert_eq!(target.position(), Vec2::new(-100.0, 0.0));
}

#[test]
fn translate_percentages_use_current_size() {
    init_logging();
    let target = rectangle(40.0, 20.0);
    let mut pending = PendingTranslation::default();
    apply_transform(&target, "translate(50%, 10px)", &mut pending);
    assert_eq!(target.position(), Vec2::new(20.0, 10.0));
    assert!(pending.is_empty());
}

#[test]
fn rotation_overwrites_and_single_axis_scale_keeps_other_axis() {
    init_logging();
    let target = rectangle(10.0, 10.0);
    let mut pending = PendingTranslation::default();
    apply_transform(&target, "rotate(30deg) rotate(45deg) scale(2) scaleY(3)", &mut pending);
    assert!((target.rotation() - 45.0).abs() < 0.001);
    assert_eq!(target.scale(), Vec2::new(2.0, 3.0));
}

#[test]
fn unknown_functions_and_truncation_are_fail_soft() {
    init_logging();
    let target = rectangle(10.0, 10.0);
    let mut pending = PendingTranslation::default();
    apply_transform(&target, "skew(10deg) translateX(4px) rotate(90", &mut pending);
    assert_eq!(target.position(), Vec2::new(4.0, 0.0));
    assert!(target.rotation().abs() < 0.001);
}
