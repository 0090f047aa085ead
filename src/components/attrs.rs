//! Attribute projection and attribute value helpers.

use crate::model::Element;
use crate::parser::entities::escape_attribute;

/// Attributes consumed by the expansion rules; never copied to the output.
pub const IGNORED_ATTRIBUTES: &[&str] = &[
    "class",
    "id",
    "href",
    "size",
    "size-sm",
    "size-lg",
    "large",
    "no-expander",
    "small",
    "target",
];

/// Serialize the pass-through attributes of an element.
///
/// Each remaining attribute is written as ` name="value"` (note the leading
/// space) in source order. Returns an empty string when nothing remains.
pub fn project_attributes(element: &Element) -> String {
    let mut result = String::new();
    for (name, value) in element.attrs.iter() {
        if IGNORED_ATTRIBUTES.contains(&name) {
            continue;
        }
        result.push(' ');
        result.push_str(name);
        result.push_str("=\"");
        result.push_str(&escape_attribute(value, false));
        result.push('"');
    }
    result
}

/// Class list of a generated element: base classes followed by the
/// element's own class tokens.
pub fn class_list(base: &[&str], element: &Element) -> String {
    base.iter()
        .copied()
        .chain(element.classes())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a positive integer from the leading digits of an attribute value.
///
/// `"6"` and `" 6px"` give 6; missing values, `"0"` and values without
/// leading digits give `None`, so callers fall back to their default.
pub fn parse_size(value: Option<&str>) -> Option<u32> {
    let value = value?.trim_start();
    let value = value.strip_prefix('+').unwrap_or(value);
    let digits = value
        .find(|c: char| !c.is_ascii_digit())
        .map_or(value, |end| &value[..end]);
    digits.parse::<u32>().ok().filter(|&n| n > 0)
}

/// Whether an attribute is present with a non-empty value.
pub fn has_value(element: &Element, name: &str) -> bool {
    element.attr(name).is_some_and(|v| !v.is_empty())
}
