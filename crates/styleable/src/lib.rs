//! Styleable elements: the capability set the styling core drives, shared
//! handles to elements, and headless element kinds.

#![forbid(unsafe_code)]

pub mod capability;
pub mod elements;
pub mod geometry;
pub mod handle;
pub mod text_style;

pub use capability::Styleable;
pub use elements::{CircleShape, ConvexShape, RectangleShape, SpriteElement, TextElement};
pub use geometry::{FloatRect, Vec2};
pub use handle::StyleHandle;
pub use text_style::TextStyle;
