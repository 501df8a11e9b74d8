//! Style rules: `"property: value"` strings into canonical declarations.
//!
//! Property names are case-insensitive and hyphen-insensitive for the known
//! aliases, so `backgroundColor`, `background-color`, and `BACKGROUND-COLOR`
//! all land on `background-color`.

#![forbid(unsafe_code)]

use css_values_units::{to_lower, trim};
use log::trace;

/// A single declaration parsed from a rule string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Canonical property name (lowercase, kebab-case for known aliases).
    pub property: String,
    /// Raw value trimmed of surrounding whitespace, case preserved. May be empty.
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Parse an ordered list of rule strings.
///
/// Each rule is split at its first `:`. Rules without a colon, or whose property
/// is empty after trimming, are dropped; everything else is kept in input order,
/// duplicates included. An empty value is kept.
pub fn parse_rules<S: AsRef<str>>(rules: &[S]) -> Vec<Declaration> {
    rules
        .iter()
        .filter_map(|rule| parse_rule(rule.as_ref()))
        .collect()
}

/// Parse a `;`-separated declaration block such as an inline `style`
/// attribute. Empty items between semicolons are skipped.
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    input
        .split(';')
        .filter(|item| !trim(item).is_empty())
        .filter_map(parse_rule)
        .collect()
}

fn parse_rule(rule: &str) -> Option<Declaration> {
    let Some((raw_property, raw_value)) = rule.split_once(':') else {
        trace!(target: "css::rules", "skipping rule without ':' {rule:?}");
        return None;
    };
    let property = normalize_property(raw_property);
    if property.is_empty() {
        trace!(target: "css::rules", "skipping rule with empty property {rule:?}");
        return None;
    }
    Some(Declaration {
        property,
        value: trim(raw_value).to_owned(),
    })
}

/// Canonicalize a property name.
///
/// The name is trimmed and lowercased; with hyphens removed it is looked up in
/// the alias table. Names without an alias keep their lowercase spelling,
/// hyphens included.
pub fn normalize_property(raw: &str) -> String {
    let lower = to_lower(trim(raw));
    let key: String = lower.chars().filter(|&character| character != '-').collect();
    alias(&key).map_or(lower, str::to_owned)
}

/// Alias table keyed by the hyphen-free lowercase spelling.
fn alias(key: &str) -> Option<&'static str> {
    let canonical = match key {
        "backgroundcolor" | "backgroundcolour" => "background-color",
        "fillcolor" => "fill-color",
        "bordercolor" | "bordercolour" => "border-color",
        "outlinecolor" | "outlinecolour" => "outline-color",
        "borderwidth" | "outlinethickness" => "border-width",
        "borderradius" => "border-radius",
        "fontsize" => "font-size",
        "fontfamily" => "font-family",
        "fontstyle" => "font-style",
        "textdecoration" => "text-decoration",
        "letterspacing" => "letter-spacing",
        "linespacing" => "line-spacing",
        "marginleft" => "margin-left",
        "margintop" => "margin-top",
        "marginright" => "margin-right",
        "marginbottom" => "margin-bottom",
        "paddingleft" => "padding-left",
        "paddingtop" => "padding-top",
        "paddingright" => "padding-right",
        "paddingbottom" => "padding-bottom",
        "minwidth" => "min-width",
        "maxwidth" => "max-width",
        "minheight" => "min-height",
        "maxheight" => "max-height",
        "flexdirection" => "flex-direction",
        "justifycontent" => "justify-content",
        "alignitems" => "align-items",
        "rowgap" => "row-gap",
        "columngap" => "column-gap",
        "scalex" => "scale-x",
        "scaley" => "scale-y",
        "backgroundimage" => "background-image",
        "pointcount" => "point-count",
        _ => return None,
    };
    Some(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_regardless_of_spelling() {
        for raw in ["backgroundColor", "background-color", " BACKGROUND-COLOR ", "backgroundcolour"] {
            assert_eq!(normalize_property(raw), "background-color");
        }
        assert_eq!(normalize_property("outlineThickness"), "border-width");
        assert_eq!(normalize_property("scaleX"), "scale-x");
    }

    #[test]
    fn unknown_properties_keep_lowercase_hyphens() {
        assert_eq!(normalize_property("Translate-Me"), "translate-me");
        assert_eq!(normalize_property("width"), "width");
    }

    #[test]
    fn rules_keep_order_and_duplicates() {
        let declarations = parse_rules(&["width: 10px", "oops", "width : 20px", ": 5", "Color:  Red "]);
        assert_eq!(
            declarations,
            vec![
                Declaration::new("width", "10px"),
                Declaration::new("width", "20px"),
                Declaration::new("color", "Red"),
            ]
        );
    }

    #[test]
    fn value_splits_at_first_colon_only() {
        let declarations = parse_rules(&["background-image: url(a:b)", "height:"]);
        assert_eq!(declarations[0].value, "url(a:b)");
        assert_eq!(declarations[1], Declaration::new("height", ""));
    }

    #[test]
    fn style_attribute_block() {
        let declarations = parse_style_attribute("fontSize: 12px;; ;margin-left:4px");
        assert_eq!(
            declarations,
            vec![
                Declaration::new("font-size", "12px"),
                Declaration::new("margin-left", "4px"),
            ]
        );
    }
}
