//! Flex container properties and the layout intent they build up.

use css_values_units::{Viewport, resolve_length, to_lower, trim};

/// Main axis of a flex container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    /// `column` and `column-reverse` select the column axis; anything else is a
    /// row. Reversal is not supported.
    pub fn from_value(value: &str) -> Self {
        match to_lower(trim(value)).as_str() {
            "column" | "column-reverse" => Self::Column,
            _ => Self::Row,
        }
    }

    #[inline]
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column)
    }
}

/// Main-axis distribution.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    /// Unrecognized values are `Start`.
    pub fn from_value(value: &str) -> Self {
        match to_lower(trim(value)).as_str() {
            "flex-end" | "end" => Self::End,
            "center" => Self::Center,
            "space-between" => Self::SpaceBetween,
            "space-around" => Self::SpaceAround,
            "space-evenly" => Self::SpaceEvenly,
            _ => Self::Start,
        }
    }
}

/// Cross-axis alignment, applied to each child on its own.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignItems {
    #[default]
    Start,
    End,
    Center,
    Stretch,
}

impl AlignItems {
    /// Unrecognized values are `Start`.
    pub fn from_value(value: &str) -> Self {
        match to_lower(trim(value)).as_str() {
            "flex-end" | "end" => Self::End,
            "center" => Self::Center,
            "stretch" => Self::Stretch,
            _ => Self::Start,
        }
    }
}

/// How an element lays out the children handed to it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexLayout {
    /// `display: flex` or `display: grid`; otherwise children are only
    /// translated into the element's content box.
    pub enabled: bool,
    pub direction: FlexDirection,
    /// Space between adjacent children along the main axis, in pixels.
    pub gap: f32,
    pub justify: JustifyContent,
    pub align: AlignItems,
}

impl FlexLayout {
    /// Apply a container declaration. Gaps resolve against the parent width.
    /// Returns `false` for properties that are not flex container properties.
    pub fn apply_declaration(
        &mut self,
        property: &str,
        value: &str,
        parent_width: f32,
        viewport: Viewport,
    ) -> bool {
        match property {
            "display" => {
                self.enabled = matches!(to_lower(trim(value)).as_str(), "flex" | "grid");
            }
            "flex-direction" => self.direction = FlexDirection::from_value(value),
            "gap" | "row-gap" | "column-gap" => {
                self.gap = resolve_length(value, parent_width, viewport);
            }
            "justify-content" => self.justify = JustifyContent::from_value(value),
            "align-items" => self.align = AlignItems::from_value(value),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 500.0);

    #[test]
    fn keywords_accept_both_spellings() {
        assert_eq!(JustifyContent::from_value("flex-end"), JustifyContent::End);
        assert_eq!(JustifyContent::from_value("end"), JustifyContent::End);
        assert_eq!(JustifyContent::from_value("flex-start"), JustifyContent::Start);
        assert_eq!(JustifyContent::from_value("stretch"), JustifyContent::Start);
        assert_eq!(AlignItems::from_value("end"), AlignItems::End);
        assert_eq!(AlignItems::from_value("baseline"), AlignItems::Start);
    }

    #[test]
    fn display_toggles_and_direction_defaults_to_row() {
        let mut flex = FlexLayout::default();
        assert!(flex.apply_declaration("display", "grid", 0.0, VIEWPORT));
        assert!(flex.enabled);
        flex.apply_declaration("display", "block", 0.0, VIEWPORT);
        assert!(!flex.enabled);
        flex.apply_declaration("flex-direction", "column-reverse", 0.0, VIEWPORT);
        assert!(flex.direction.is_column());
        flex.apply_declaration("flex-direction", "row-reverse", 0.0, VIEWPORT);
        assert_eq!(flex.direction, FlexDirection::Row);
    }

    #[test]
    fn every_gap_spelling_sets_the_single_gap() {
        let mut flex = FlexLayout::default();
        flex.apply_declaration("row-gap", "10%", 300.0, VIEWPORT);
        assert!((flex.gap - 30.0).abs() < 0.001);
        flex.apply_declaration("column-gap", "2vw", 300.0, VIEWPORT);
        assert!((flex.gap - 20.0).abs() < 0.001);
        assert!(!flex.apply_declaration("width", "10px", 300.0, VIEWPORT));
    }
}
