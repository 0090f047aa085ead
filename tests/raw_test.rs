//! Integration tests for raw regions.

use inky::raw::{extract, placeholder};
use inky::{convert, ConvertOptions};

fn html(input: &str) -> String {
    convert(input, &ConvertOptions::default()).unwrap()
}

#[test]
fn test_raw_content_is_untouched() {
    let input = "<raw><<LCG Program\\TG LCG Coupon Code Default='246996'>></raw>";
    assert_eq!(html(input), "<<LCG Program\\TG LCG Coupon Code Default='246996'>>");
}

#[test]
fn test_raw_inside_components() {
    let output = html("<row><columns><raw><%= user.name %> & <b></raw></columns></row>");
    assert!(output.contains("<th><%= user.name %> & <b></th>"));
}

#[test]
fn test_multiple_raw_regions_keep_order() {
    let output = html("<container><raw>{{a}}</raw> and <raw>{{b}}</raw></container>");
    assert!(output.contains("<td>{{a}} and {{b}}</td>"));
}

#[test]
fn test_raw_spans_lines() {
    let output = html("<raw>\n<%\n  if x %>\n</raw>");
    assert_eq!(output, "\n<%\n  if x %>\n");
}

#[test]
fn test_unterminated_raw_is_parsed_normally() {
    let (text, regions) = extract("<raw>open only");
    assert!(regions.is_empty());
    assert_eq!(text, "<raw>open only");
    assert!(html("<raw>open only").starts_with("<raw>open only"));
}

#[test]
fn test_placeholders_in_working_text() {
    let (text, regions) = extract("a<raw>1</raw>b<RAW>2</RAW>c");
    assert_eq!(text, format!("a{}b{}c", placeholder(0), placeholder(1)));
    assert_eq!(regions.get(1), Some("2"));
}
