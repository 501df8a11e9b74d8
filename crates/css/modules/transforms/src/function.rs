//! Recognized transform functions.

use css_values_units::{parse_absolute, parse_number, percentage, split_arguments, trim};
use log::warn;

use crate::scan::FunctionCall;

/// A translation component: a fraction of the element's size or pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// Percentage of the element's extent on the same axis.
    Percent(f32),
    Pixels(f32),
}

impl Offset {
    pub fn parse(argument: &str) -> Self {
        percentage(argument).map_or_else(|| Self::Pixels(parse_absolute(argument)), Self::Percent)
    }

    /// Pixels for an element whose extent on this axis is `extent`.
    #[inline]
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Self::Percent(percent) => extent * percent / 100.0,
            Self::Pixels(pixels) => pixels,
        }
    }
}

/// A parsed transform function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformFunction {
    TranslateX(Offset),
    TranslateY(Offset),
    /// `translate(x[, y])`; a missing `y` is zero.
    Translate(Offset, Offset),
    /// Absolute rotation in degrees.
    Rotate(f32),
    Scale(f32, f32),
    ScaleX(f32),
    ScaleY(f32),
}

impl TransformFunction {
    /// Interpret a scanned call. Unknown names and missing arguments yield
    /// `None`.
    pub fn from_call(call: &FunctionCall) -> Option<Self> {
        let arguments = call.arguments.as_str();
        let parsed = match call.name.as_str() {
            "translatex" => required(arguments).map(|argument| Self::TranslateX(Offset::parse(argument))),
            "translatey" => required(arguments).map(|argument| Self::TranslateY(Offset::parse(argument))),
            "translate" => match split_arguments(arguments).as_slice() {
                [] => None,
                [horizontal] => Some(Self::Translate(Offset::parse(horizontal), Offset::Pixels(0.0))),
                [horizontal, vertical, ..] => Some(Self::Translate(
                    Offset::parse(horizontal),
                    Offset::parse(vertical),
                )),
            },
            "rotate" => required(arguments).map(|argument| Self::Rotate(parse_number(argument))),
            "scale" => match split_arguments(arguments).as_slice() {
                [] => None,
                [uniform] => {
                    let factor = parse_number(uniform);
                    Some(Self::Scale(factor, factor))
                }
                [horizontal, vertical, ..] => {
                    Some(Self::Scale(parse_number(horizontal), parse_number(vertical)))
                }
            },
            "scalex" => required(arguments).map(|argument| Self::ScaleX(parse_number(argument))),
            "scaley" => required(arguments).map(|argument| Self::ScaleY(parse_number(argument))),
            other => {
                warn!(target: "css::transforms", "unknown transform function {other:?}");
                return None;
            }
        };
        if parsed.is_none() {
            warn!(target: "css::transforms", "{}() needs an argument", call.name);
        }
        parsed
    }
}

fn required(arguments: &str) -> Option<&str> {
    let argument = trim(arguments);
    (!argument.is_empty()).then_some(argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str, arguments: &str) -> Option<TransformFunction> {
        TransformFunction::from_call(&FunctionCall {
            name: name.to_owned(),
            arguments: arguments.to_owned(),
        })
    }

    #[test]
    fn translations_keep_percentages_symbolic() {
        assert_eq!(
            parse("translatex", "-50%"),
            Some(TransformFunction::TranslateX(Offset::Percent(-50.0)))
        );
        assert_eq!(
            parse("translate", "10px,50%"),
            Some(TransformFunction::Translate(Offset::Pixels(10.0), Offset::Percent(50.0)))
        );
        assert_eq!(
            parse("translate", "7px"),
            Some(TransformFunction::Translate(Offset::Pixels(7.0), Offset::Pixels(0.0)))
        );
    }

    #[test]
    fn scale_defaults_second_factor() {
        assert_eq!(parse("scale", "1.5"), Some(TransformFunction::Scale(1.5, 1.5)));
        assert_eq!(parse("scale", "2 3"), Some(TransformFunction::Scale(2.0, 3.0)));
        assert_eq!(parse("rotate", "90deg"), Some(TransformFunction::Rotate(90.0)));
    }

    #[test]
    fn unknown_or_empty_calls_are_skipped() {
        assert_eq!(parse("skew", "10deg"), None);
        assert_eq!(parse("scale", ""), None);
        assert_eq!(parse("rotate", " "), None);
    }
}
