//! Splitting a `transform` value into `name(arguments)` calls.

use css_values_units::{to_lower, trim};
use log::warn;

/// One `name(arguments)` occurrence, name lowercased, both trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// Scan left to right for `name(arguments)` calls.
///
/// Each call ends at the first `)` after its `(`, so nested parentheses are
/// not supported. An unclosed call stops the scan; calls before it are kept.
pub fn scan_functions(value: &str) -> Vec<FunctionCall> {
    let mut calls = Vec::new();
    let mut rest = value;
    while let Some(open) = rest.find('(') {
        let Some(close_offset) = rest.get(open + 1..).and_then(|tail| tail.find(')')) else {
            warn!(target: "css::transforms", "unclosed transform function in {value:?}, ignoring the rest");
            return calls;
        };
        let close = open + 1 + close_offset;
        let name = rest.get(..open).map_or(String::new(), |name| to_lower(trim(name)));
        let arguments = rest.get(open + 1..close).map_or("", trim).to_owned();
        calls.push(FunctionCall { name, arguments });
        rest = rest.get(close + 1..).unwrap_or("");
    }
    if !trim(rest).is_empty() {
        warn!(target: "css::transforms", "trailing text {rest:?} in transform {value:?}");
    }
    calls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, arguments: &str) -> FunctionCall {
        FunctionCall {
            name: name.to_owned(),
            arguments: arguments.to_owned(),
        }
    }

    #[test]
    fn calls_in_order_with_lowercase_names() {
        assert_eq!(
            scan_functions("translateX( 10px ) Rotate(45deg)scale(2, 3)"),
            vec![
                call("translatex", "10px"),
                call("rotate", "45deg"),
                call("scale", "2, 3"),
            ]
        );
    }

    #[test]
    fn unclosed_call_truncates() {
        assert_eq!(
            scan_functions("rotate(10deg) scale(2"),
            vec![call("rotate", "10deg")]
        );
        assert!(scan_functions("none").is_empty());
    }
}
