//! Integration tests for the non-grid components.

use inky::{convert, ConvertOptions};

fn html(input: &str) -> String {
    convert(input, &ConvertOptions::default()).unwrap()
}

#[test]
fn test_button_with_link() {
    assert_eq!(
        html(r##"<button href="#">Click</button>"##),
        r##"<table class="button"><tr><td><table><tr><td><a href="#">Click</a></td></tr></table></td></tr></table>"##
    );
}

#[test]
fn test_button_with_target() {
    assert_eq!(
        html(r#"<button href="http://zurb.com" target="_blank" class="small radius">Go</button>"#),
        r#"<table class="button small radius"><tr><td><table><tr><td><a href="http://zurb.com" target="_blank">Go</a></td></tr></table></td></tr></table>"#
    );
}

#[test]
fn test_button_without_link() {
    assert_eq!(
        html("<button>Click</button>"),
        r#"<table class="button"><tr><td><table><tr><td>Click</td></tr></table></td></tr></table>"#
    );
}

#[test]
fn test_expanded_button_is_centered() {
    assert_eq!(
        html(r##"<button class="expand" href="#">Click</button>"##),
        concat!(
            r##"<table class="button expand"><tr><td><table><tr><td><center><a href="#" class="float-center">Click</a></center></td></tr></table></td>"##,
            "\n",
            r#"<td class="expander"></td></tr></table>"#
        )
    );
}

#[test]
fn test_callout() {
    assert_eq!(
        html(r#"<callout class="primary">Callout</callout>"#),
        r#"<table class="callout"><tr><th class="callout-inner primary">Callout</th><th class="expander"></th></tr></table>"#
    );
}

#[test]
fn test_wrapper() {
    assert_eq!(
        html(r##"<wrapper class="header" bgcolor="#8a8a8a">Content</wrapper>"##),
        r##"<table bgcolor="#8a8a8a" class="wrapper header" align="center"><tr><td class="wrapper-inner">Content</td></tr></table>"##
    );
}

#[test]
fn test_menu_with_items() {
    assert_eq!(
        html(r#"<menu><item href="http://zurb.com">Item</item></menu>"#),
        r#"<table class="menu"><tr><td><table><tr><th class="menu-item"><a href="http://zurb.com">Item</a></th></tr></table></td></tr></table>"#
    );
}

#[test]
fn test_centered_menu() {
    assert_eq!(
        html(r##"<center><menu><item href="#">A</item></menu></center>"##),
        r##"<center><table align="center" class="menu float-center"><tr><td><table><tr><th class="menu-item float-center"><a href="#">A</a></th></tr></table></td></tr></table></center>"##
    );
}

#[test]
fn test_center_inline_child() {
    assert_eq!(
        html(r#"<center><img src="logo.png"></center>"#),
        r#"<center><img src="logo.png" class="float-center"></center>"#
    );
}

#[test]
fn test_spacer() {
    assert_eq!(
        html(r#"<spacer size="10"></spacer>"#),
        r#"<table class="spacer"><tbody><tr><td height="10" style="font-size:10px;line-height:10px;">&nbsp;</td></tr></tbody></table>"#
    );
}

#[test]
fn test_spacer_small_only() {
    assert_eq!(
        html(r#"<spacer size-sm="10"></spacer>"#),
        r#"<table class="spacer hide-for-large"><tbody><tr><td height="10" style="font-size:10px;line-height:10px;">&nbsp;</td></tr></tbody></table>"#
    );
}

#[test]
fn test_spacer_large_only() {
    assert_eq!(
        html(r#"<spacer size-lg="20" class="x"></spacer>"#),
        r#"<table class="spacer x show-for-large"><tbody><tr><td height="20" style="font-size:20px;line-height:20px;">&nbsp;</td></tr></tbody></table>"#
    );
}

#[test]
fn test_inky() {
    assert_eq!(
        html("<inky></inky>"),
        r#"<tr><td><img src="https://raw.githubusercontent.com/arvida/emoji-cheat-sheet.com/master/public/graphics/emojis/octopus.png"></td></tr>"#
    );
}
