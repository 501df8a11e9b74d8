//! String primitives shared by every resolver: trimming, case folding,
//! whitespace tokenizing, integer extraction, and lenient number parsing.
//!
//! Nothing here knows about CSS semantics; callers decide what a token means.

use log::trace;
use smallvec::SmallVec;

/// Whitespace recognised around rule text and values (TAB, LF, CR, SPACE).
const fn is_rule_whitespace(character: char) -> bool {
    matches!(character, '\u{0009}' | '\u{000A}' | '\u{000D}' | '\u{0020}')
}

/// Trim leading and trailing rule whitespace without allocating.
#[inline]
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_rule_whitespace)
}

/// ASCII-lowercase a string. Non-ASCII characters are kept as-is.
#[inline]
pub fn to_lower(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Split a value on whitespace, dropping commas inside each token.
///
/// `"10px, 20px"` and `"10px 20px"` both yield `["10px", "20px"]`. Tokens that
/// consist only of commas are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_rule_whitespace)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.replace(',', ""))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Split a function argument list on commas and whitespace.
///
/// Unlike [`tokenize`], a comma acts as a separator, so `"10px,20px"` yields two
/// arguments.
pub fn split_arguments(text: &str) -> SmallVec<&str, 4> {
    text.split(|character: char| character == ',' || is_rule_whitespace(character))
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Extract every run of ASCII digits, in order.
///
/// `"rgb(255, 128, 0)"` yields `[255, 128, 0]`. Signs and decimal points are not
/// part of a run, so `"-1.5"` yields `[1, 5]`. Runs too large for `i32` saturate.
pub fn extract_integers(text: &str) -> Vec<i32> {
    text.split(|character: char| !character.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| run.parse::<i32>().unwrap_or(i32::MAX))
        .collect()
}

/// Length in bytes of the leading numeric literal of `text`
/// (`[+-]? digits [. digits] [(e|E) [+-]? digits]`), or 0 when there is none.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut index = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        index += 1;
    }
    let integer_start = index;
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    let mut digit_count = index - integer_start;
    if bytes.get(index) == Some(&b'.') {
        let fraction_start = index + 1;
        let mut cursor = fraction_start;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > fraction_start || digit_count > 0 {
            digit_count += cursor - fraction_start;
            index = cursor;
        }
    }
    if digit_count == 0 {
        return 0;
    }
    if matches!(bytes.get(index), Some(b'e' | b'E')) {
        let mut cursor = index + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > exponent_start {
            index = cursor;
        }
    }
    index
}

/// Parse the leading numeric literal of a value, or `None` when there is none.
pub fn try_parse_number(text: &str) -> Option<f32> {
    let trimmed = trim(text);
    let prefix_len = numeric_prefix_len(trimmed);
    if prefix_len == 0 {
        return None;
    }
    trimmed
        .get(..prefix_len)
        .and_then(|prefix| prefix.parse::<f32>().ok())
        .filter(|number| number.is_finite())
}

/// Parse the leading numeric literal of a value.
///
/// Trailing garbage is ignored (`"12foo"` is 12) and values with no numeric
/// prefix resolve to `0.0`. Never fails.
pub fn parse_number(text: &str) -> f32 {
    try_parse_number(text).unwrap_or_else(|| {
        let trimmed = trim(text);
        if !trimmed.is_empty() {
            trace!(target: "css::values", "non-numeric value {trimmed:?} resolved to 0");
        }
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_strips_rule_whitespace_only() {
        assert_eq!(trim("  \tfoo bar\r\n"), "foo bar");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn tokenize_drops_commas_and_empty_tokens() {
        assert_eq!(tokenize("10px, 20px ,  5px"), vec!["10px", "20px", "5px"]);
        assert_eq!(tokenize("a,b"), vec!["ab"]);
        assert!(tokenize("  ").is_empty());
    }

    #[test]
    fn split_arguments_uses_commas_as_separators() {
        assert_eq!(split_arguments("10px,20%").as_slice(), ["10px", "20%"]);
        assert_eq!(split_arguments(" 1.5 , 2 ").as_slice(), ["1.5", "2"]);
    }

    #[test]
    fn extract_integers_reads_digit_runs_in_order() {
        assert_eq!(extract_integers("rgb(255, 128, 0)"), vec![255, 128, 0]);
        assert_eq!(extract_integers("rgba(1,2,3,400)"), vec![1, 2, 3, 400]);
        assert!(extract_integers("none").is_empty());
        assert_eq!(extract_integers("99999999999"), vec![i32::MAX]);
    }

    #[test]
    fn parse_number_is_lenient() {
        assert!((parse_number(" 12.5 ") - 12.5).abs() < f32::EPSILON);
        assert!((parse_number("12foo") - 12.0).abs() < f32::EPSILON);
        assert!((parse_number("-3") + 3.0).abs() < f32::EPSILON);
        assert!((parse_number(".5") - 0.5).abs() < f32::EPSILON);
        assert!((parse_number("1e2") - 100.0).abs() < f32::EPSILON);
        assert!(parse_number("abc").abs() < f32::EPSILON);
        assert!(parse_number("inf").abs() < f32::EPSILON);
        assert!(parse_number("").abs() < f32::EPSILON);
    }

    #[test]
    fn try_parse_number_distinguishes_missing_numbers() {
        assert_eq!(try_parse_number("0.25"), Some(0.25));
        assert_eq!(try_parse_number("auto"), None);
        assert_eq!(try_parse_number("."), None);
    }
}
