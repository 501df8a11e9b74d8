//! Positioned placement: `position` modes, the reference frame insets are
//! measured in, and the `left`/`right`/`top`/`bottom` placement rules.

#![forbid(unsafe_code)]

use css_values_units::{FourSides, Viewport, resolve_length, to_lower, trim};
use styleable::Vec2;

/// How an element is positioned relative to its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionMode {
    /// Flow: placed by the parent's layout or by explicit insets.
    #[default]
    Default,
    /// Insets measured from the containing block.
    Relative,
    /// Insets measured from the viewport origin.
    Absolute,
    /// Centered in the containing block.
    Center,
}

impl PositionMode {
    /// Parse a `position` value; unknown values are `Default`.
    pub fn from_value(value: &str) -> Self {
        match to_lower(trim(value)).as_str() {
            "absolute" => Self::Absolute,
            "relative" => Self::Relative,
            "center" => Self::Center,
            _ => Self::Default,
        }
    }
}

/// Box that insets and centering are measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReferenceFrame {
    pub origin: Vec2,
    pub size: Vec2,
}

impl ReferenceFrame {
    /// The viewport at `(0, 0)` for absolute elements, the containing block
    /// otherwise.
    pub fn select(
        mode: PositionMode,
        containing_origin: Vec2,
        containing_size: Vec2,
        viewport: Viewport,
    ) -> Self {
        if mode == PositionMode::Absolute {
            Self {
                origin: Vec2::ZERO,
                size: Vec2::new(viewport.width, viewport.height),
            }
        } else {
            Self {
                origin: containing_origin,
                size: containing_size,
            }
        }
    }

    /// Top-left position that centers an element of `element_size` on both axes.
    pub fn center(&self, element_size: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + (self.size.x - element_size.x) / 2.0,
            self.origin.y + (self.size.y - element_size.y) / 2.0,
        )
    }
}

/// One of the four inset properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Inset {
    Left,
    Right,
    Top,
    Bottom,
}

impl Inset {
    /// Map a canonical property name; `x` and `y` are aliases of `left` and `top`.
    pub fn from_property(property: &str) -> Option<Self> {
        match property {
            "left" | "x" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" | "y" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    /// New element position after applying this inset.
    ///
    /// `left`/`top` place the near edge at `origin + offset + margin`;
    /// `right`/`bottom` place the far edge `offset + margin` inside the frame's
    /// far edge. Percentages resolve against the frame size on the inset's axis.
    /// The other axis keeps its current coordinate.
    pub fn place(
        self,
        value: &str,
        frame: &ReferenceFrame,
        position: Vec2,
        element_size: Vec2,
        margin: &FourSides,
        viewport: Viewport,
    ) -> Vec2 {
        match self {
            Self::Left => {
                let offset = resolve_length(value, frame.size.x, viewport);
                Vec2::new(frame.origin.x + offset + margin.left, position.y)
            }
            Self::Right => {
                let offset = resolve_length(value, frame.size.x, viewport);
                Vec2::new(
                    frame.origin.x + frame.size.x - offset - element_size.x - margin.right,
                    position.y,
                )
            }
            Self::Top => {
                let offset = resolve_length(value, frame.size.y, viewport);
                Vec2::new(position.x, frame.origin.y + offset + margin.top)
            }
            Self::Bottom => {
                let offset = resolve_length(value, frame.size.y, viewport);
                Vec2::new(
                    position.x,
                    frame.origin.y + frame.size.y - offset - element_size.y - margin.bottom,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 720.0);

    fn parent_frame() -> ReferenceFrame {
        ReferenceFrame::select(
            PositionMode::Relative,
            Vec2::new(100.0, 50.0),
            Vec2::new(400.0, 300.0),
            VIEWPORT,
        )
    }

    #[test]
    fn modes_parse_with_default_fallback() {
        assert_eq!(PositionMode::from_value("absolute"), PositionMode::Absolute);
        assert_eq!(PositionMode::from_value(" Center "), PositionMode::Center);
        assert_eq!(PositionMode::from_value("sticky"), PositionMode::Default);
    }

    #[test]
    fn absolute_frame_is_the_viewport() {
        let frame = ReferenceFrame::select(
            PositionMode::Absolute,
            Vec2::new(100.0, 50.0),
            Vec2::new(400.0, 300.0),
            VIEWPORT,
        );
        assert_eq!(frame.origin, Vec2::ZERO);
        assert_eq!(frame.size, Vec2::new(1280.0, 720.0));
    }

    #[test]
    fn near_edges_add_offset_and_margin() {
        let margin = FourSides::uniform(5.0);
        let placed = Inset::Left.place(
            "10%",
            &parent_frame(),
            Vec2::new(0.0, 7.0),
            Vec2::new(20.0, 20.0),
            &margin,
            VIEWPORT,
        );
        assert_eq!(placed, Vec2::new(145.0, 7.0));
    }

    #[test]
    fn far_edges_subtract_size_and_margin() {
        let margin = FourSides {
            bottom: 4.0,
            ..FourSides::default()
        };
        let placed = Inset::Bottom.place(
            "10px",
            &parent_frame(),
            Vec2::new(3.0, 0.0),
            Vec2::new(20.0, 30.0),
            &margin,
            VIEWPORT,
        );
        assert_eq!(placed, Vec2::new(3.0, 50.0 + 300.0 - 10.0 - 30.0 - 4.0));
    }

    #[test]
    fn center_ignores_margins() {
        assert_eq!(
            parent_frame().center(Vec2::new(100.0, 100.0)),
            Vec2::new(250.0, 150.0)
        );
        assert_eq!(Inset::from_property("y"), Some(Inset::Top));
        assert_eq!(Inset::from_property("inset"), None);
    }
}
