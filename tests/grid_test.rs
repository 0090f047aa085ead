//! Integration tests for rows, columns and block grids.

use inky::{convert, ConvertOptions};

fn html(input: &str) -> String {
    convert(input, &ConvertOptions::default()).unwrap()
}

#[test]
fn test_row() {
    assert_eq!(
        html("<row></row>"),
        r#"<table class="row"><tbody><tr></tr></tbody></table>"#
    );
}

#[test]
fn test_row_keeps_extra_attributes() {
    assert_eq!(
        html(r#"<row class="collapse" dir="rtl" id="top"></row>"#),
        r#"<table dir="rtl" class="row collapse"><tbody><tr></tr></tbody></table>"#
    );
}

#[test]
fn test_two_columns_default_sizes() {
    assert_eq!(
        html("<row><columns>A</columns><columns>B</columns></row>"),
        concat!(
            r#"<table class="row"><tbody><tr>"#,
            r#"<th class="small-12 large-6 columns first"><table><tr><th>A</th></tr></table></th>"#,
            r#"<th class="small-12 large-6 columns last"><table><tr><th>B</th></tr></table></th>"#,
            r#"</tr></tbody></table>"#
        )
    );
}

#[test]
fn test_single_full_width_column_gets_expander() {
    assert_eq!(
        html(r#"<columns large="12">A</columns>"#),
        "<th class=\"small-12 large-12 columns first last\"><table><tr><th>A</th>\n<th class=\"expander\"></th></tr></table></th>"
    );
}

#[test]
fn test_nested_row_suppresses_expander() {
    let output = html(r#"<columns large="12"><row><columns large="6">x</columns></row></columns>"#);
    assert!(!output.contains(r#"class="expander""#));
    assert!(output.starts_with(r#"<th class="small-12 large-12 columns first last"><table><tr><th><table class="row">"#));
}

#[test]
fn test_no_expander_attribute() {
    let output = html(r#"<columns large="12" no-expander>A</columns>"#);
    assert!(!output.contains("expander"));

    let output = html(r#"<columns large="12" no-expander="false">A</columns>"#);
    assert!(output.contains(r#"<th class="expander"></th>"#));
}

#[test]
fn test_small_only_sets_large() {
    let output = html(r#"<row><columns small="4">A</columns><columns small="8">B</columns></row>"#);
    assert!(output.contains(r#"<th class="small-4 large-4 columns first">"#));
    assert!(output.contains(r#"<th class="small-8 large-8 columns last">"#));
}

#[test]
fn test_three_columns_middle_has_no_position_class() {
    let output = html("<row><columns>A</columns><columns>B</columns><columns>C</columns></row>");
    assert!(output.contains(r#"<th class="small-12 large-4 columns first">"#));
    assert!(output.contains(r#"<th class="small-12 large-4 columns"><table><tr><th>B</th>"#));
    assert!(output.contains(r#"<th class="small-12 large-4 columns last">"#));
}

#[test]
fn test_column_classes_and_attributes() {
    let output = html(r#"<columns class="small-offset-2" valign="top" large="12" id="main">A</columns>"#);
    assert!(output.starts_with(
        r#"<th class="small-offset-2 small-12 large-12 columns first last" valign="top"><table>"#
    ));
}

#[test]
fn test_invalid_sizes_fall_back() {
    let output = html(r#"<row><columns small="wide" large="-3">A</columns><columns>B</columns></row>"#);
    assert!(output.contains(r#"<th class="small-12 large-6 columns first">"#));
}

#[test]
fn test_whitespace_between_columns_is_ignored() {
    let output = html("<row>\n  <columns>A</columns>\n  <columns>B</columns>\n</row>");
    assert!(output.contains(r#"<th class="small-12 large-6 columns first">"#));
    assert!(output.contains(r#"<th class="small-12 large-6 columns last">"#));
}

#[test]
fn test_block_grid() {
    assert_eq!(
        html(r#"<block-grid up="4"><td>A</td><td>B</td></block-grid>"#),
        r#"<table class="block-grid up-4"><tr><td>A</td><td>B</td></tr></table>"#
    );
}

#[test]
fn test_block_grid_without_up() {
    assert_eq!(
        html(r#"<block-grid class="x"><td>A</td></block-grid>"#),
        r#"<table class="block-grid x"><tr><td>A</td></tr></table>"#
    );
}
