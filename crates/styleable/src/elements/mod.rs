//! Headless element kinds.
//!
//! In-memory implementations of [`Styleable`](crate::Styleable) with the size
//! semantics of their rendered counterparts, so the styling core can run
//! without a graphics surface.

mod circle;
mod convex;
mod rectangle;
mod shape;
mod sprite;
mod text;

pub use circle::CircleShape;
pub use convex::ConvexShape;
pub use rectangle::RectangleShape;
pub use sprite::SpriteElement;
pub use text::TextElement;
