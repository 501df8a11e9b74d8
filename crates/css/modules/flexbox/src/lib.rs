//! Flex layout: single-line distribution of child elements along a row or
//! column, with `justify-content`, `align-items`, and a uniform `gap`.
//!
//! No wrapping, no per-child grow/shrink, and no reflow: children keep the
//! sizes they were styled with (except under `align-items: stretch`) and may
//! overflow the container.

#![forbid(unsafe_code)]

mod container;
mod distribution;
mod layout;

pub use container::{AlignItems, FlexDirection, FlexLayout, JustifyContent};
pub use distribution::{cross_offset, justify_params, remaining_space};
pub use layout::layout_children;
