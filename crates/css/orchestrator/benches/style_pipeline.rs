//! End-to-end styling throughput: parse, both passes, flush, and flex layout.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use css_orchestrator::{StylerConfig, Stylist};
use styleable::{CircleShape, RectangleShape, StyleHandle, TextElement, Vec2};

const CARD_RULES: [&str; 8] = [
    "width: 90%",
    "height: 40%",
    "position: center",
    "background-color: #1e1e2e",
    "border-color: rgba(137, 180, 250, 200)",
    "border-width: 2px",
    "opacity: 0.95",
    "transform: translateY(-10%) rotate(2deg)",
];

const ROW_RULES: [&str; 7] = [
    "size: 100% 64px",
    "bottom: 0",
    "padding: 8px 16px",
    "display: flex",
    "gap: 12px",
    "justify-content: space-between",
    "align-items: center",
];

fn toolbar_children() -> Vec<StyleHandle> {
    (0..12u16)
        .map(|index| match index % 3 {
            0 => StyleHandle::new(RectangleShape::new(Vec2::new(32.0, 32.0))),
            1 => StyleHandle::new(CircleShape::new(14.0)),
            _ => StyleHandle::new(TextElement::new("label")),
        })
        .collect()
}

fn bench_style_pipeline(criterion: &mut Criterion) {
    let Ok(stylist) = Stylist::new(&StylerConfig::from_env()) else {
        return;
    };
    let parent = StyleHandle::new(RectangleShape::new(Vec2::new(1000.0, 800.0)));

    criterion.bench_function("style_single_card", |bencher| {
        let card = StyleHandle::new(RectangleShape::new(Vec2::new(10.0, 10.0)));
        bencher.iter(|| {
            stylist.style_in(&card, black_box(&CARD_RULES), &parent);
            black_box(card.position());
        });
    });

    criterion.bench_function("style_flex_row_12_children", |bencher| {
        let row = StyleHandle::new(RectangleShape::new(Vec2::ZERO));
        let children = toolbar_children();
        bencher.iter(|| {
            stylist.style_children(&row, black_box(&ROW_RULES), &children);
            black_box(children.len());
        });
    });
}

criterion_group!(style_benches, bench_style_pipeline);
criterion_main!(style_benches);
