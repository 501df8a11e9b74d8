//! CSS values and units for the styling pipeline: string primitives and
//! length resolution against a containing block and the viewport.
//!
//! Resolution is lenient throughout. A value that cannot be read resolves to
//! zero instead of failing, so a single bad rule never aborts a styling call.

#![forbid(unsafe_code)]

pub mod lengths;
pub mod strings;

pub use lengths::{
    FourSides, Viewport, parse_absolute, parse_four_sides, percentage, resolve_length,
};
pub use strings::{
    extract_integers, parse_number, split_arguments, to_lower, tokenize, trim, try_parse_number,
};
