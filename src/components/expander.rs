//! Per-component expansion into table markup.

use crate::model::{Document, Element, NodeId};
use crate::parser::entities::escape_attribute;
use crate::parser::ParseOptions;
use crate::render::{inner_html, outer_html, OutputMode};

use super::attrs::{class_list, has_value, parse_size, project_attributes};
use super::center::mark_centered;
use super::column::{render_column, resolve_column};
use super::registry::{ComponentKind, ComponentRegistry};

/// Spacer height when no usable size is given.
pub const DEFAULT_SPACER_SIZE: u32 = 16;

const INKY_IMAGE: &str = "https://raw.githubusercontent.com/arvida/emoji-cheat-sheet.com/master/public/graphics/emojis/octopus.png";

/// Builds the replacement markup for a matched component element.
pub struct Expander<'a> {
    registry: &'a ComponentRegistry,
    column_count: u32,
    parse_options: &'a ParseOptions,
}

impl<'a> Expander<'a> {
    /// Create an expander.
    pub fn new(
        registry: &'a ComponentRegistry,
        column_count: u32,
        parse_options: &'a ParseOptions,
    ) -> Self {
        Self {
            registry,
            column_count,
            parse_options,
        }
    }

    /// Compute the replacement markup for an element.
    ///
    /// Only the center component touches the tree (it marks its children
    /// before being re-serialized); every other component is a pure function
    /// of the element and its serialized content.
    pub fn expand(&self, doc: &mut Document, id: NodeId) -> String {
        let Some(name) = doc.name(id) else {
            return String::new();
        };

        match self.registry.kind_for_tag(name) {
            Some(ComponentKind::Center) => {
                let menu_item_tag = self.registry.tag(ComponentKind::MenuItem).to_string();
                mark_centered(doc, id, &menu_item_tag);
                outer_html(doc, id, self.parse_options, OutputMode::Html)
            }
            Some(ComponentKind::Columns) => {
                let inner = self.inner(doc, id);
                match (
                    resolve_column(doc, id, self.registry, self.column_count),
                    doc.element(id),
                ) {
                    (Some(layout), Some(element)) => render_column(&layout, element, &inner),
                    _ => String::new(),
                }
            }
            Some(kind) => {
                let inner = self.inner(doc, id);
                match doc.element(id) {
                    Some(element) => expand_component(kind, element, &inner),
                    None => String::new(),
                }
            }
            None => self.fallback(doc, id),
        }
    }

    fn inner(&self, doc: &Document, id: NodeId) -> String {
        inner_html(doc, id, self.parse_options, OutputMode::Html)
    }

    /// Wrap an unrecognized element in a generic row and cell.
    pub fn fallback(&self, doc: &Document, id: NodeId) -> String {
        format!(
            "<tr><td>{}</td></tr>",
            outer_html(doc, id, self.parse_options, OutputMode::Html)
        )
    }
}

/// Expand a component that depends only on its element and content.
///
/// Columns and center need tree context; [`Expander::expand`] handles them
/// before dispatching here.
fn expand_component(kind: ComponentKind, element: &Element, inner: &str) -> String {
    let attrs = project_attributes(element);
    match kind {
        ComponentKind::Row => format!(
            "<table{} class=\"{}\"><tbody><tr>{}</tr></tbody></table>",
            attrs,
            class_list(&["row"], element),
            inner
        ),
        ComponentKind::Button => button(element, inner),
        ComponentKind::Container => format!(
            "<table{} align=\"center\" class=\"{}\"><tbody><tr><td>{}</td></tr></tbody></table>",
            attrs,
            class_list(&["container"], element),
            inner
        ),
        ComponentKind::Inky => format!("<tr><td><img src=\"{}\"></td></tr>", INKY_IMAGE),
        ComponentKind::BlockGrid => {
            let up = parse_size(element.attr("up")).map(|n| format!("up-{}", n));
            let mut base = vec!["block-grid"];
            if let Some(up) = up.as_deref() {
                base.push(up);
            }
            format!(
                "<table class=\"{}\"><tr>{}</tr></table>",
                class_list(&base, element),
                inner
            )
        }
        ComponentKind::Menu => format!(
            "<table{} class=\"{}\"><tr><td><table><tr>{}</tr></table></td></tr></table>",
            attrs,
            class_list(&["menu"], element),
            inner
        ),
        ComponentKind::MenuItem => format!(
            "<th{} class=\"{}\">{}</th>",
            attrs,
            class_list(&["menu-item"], element),
            anchor(element, inner)
        ),
        ComponentKind::Callout => format!(
            "<table{} class=\"callout\"><tr><th class=\"{}\">{}</th><th class=\"expander\"></th></tr></table>",
            attrs,
            class_list(&["callout-inner"], element),
            inner
        ),
        ComponentKind::Spacer => spacer(element, &attrs),
        ComponentKind::Wrapper => format!(
            "<table{} class=\"{}\" align=\"center\"><tr><td class=\"wrapper-inner\">{}</td></tr></table>",
            attrs,
            class_list(&["wrapper"], element),
            inner
        ),
        ComponentKind::Columns | ComponentKind::Center => {
            log::warn!("{} cannot be expanded without tree context", kind);
            String::new()
        }
    }
}

/// Anchor around `inner` built from `href` and optional `target`.
fn anchor(element: &Element, inner: &str) -> String {
    let href = element
        .attr("href")
        .map(|h| format!(" href=\"{}\"", escape_attribute(h, false)))
        .unwrap_or_default();
    let target = element
        .attr("target")
        .filter(|t| !t.is_empty())
        .map(|t| format!(" target=\"{}\"", escape_attribute(t, false)))
        .unwrap_or_default();
    format!("<a{}{}>{}</a>", href, target, inner)
}

fn button(element: &Element, inner: &str) -> String {
    let mut content = if has_value(element, "href") {
        anchor(element, inner)
    } else {
        inner.to_string()
    };

    let mut expander = "";
    if element.has_class("expand") || element.has_class("expanded") {
        content = format!("<center>{}</center>", content);
        expander = "\n<td class=\"expander\"></td>";
    }

    format!(
        "<table class=\"{}\"><tr><td><table><tr><td>{}</td></tr></table></td>{}</tr></table>",
        class_list(&["button"], element),
        content,
        expander
    )
}

fn spacer(element: &Element, attrs: &str) -> String {
    let classes = class_list(&["spacer"], element);
    let table = |class: &str, size: u32| {
        format!(
            "<table class=\"{}\"><tbody><tr><td{} height=\"{}\" style=\"font-size:{}px;line-height:{}px;\">&nbsp;</td></tr></tbody></table>",
            class, attrs, size, size, size
        )
    };
    let size_of = |name: &str| parse_size(element.attr(name)).unwrap_or(DEFAULT_SPACER_SIZE);

    let small = has_value(element, "size-sm");
    let large = has_value(element, "size-lg");
    if !small && !large {
        return table(&classes, size_of("size"));
    }

    let mut html = String::new();
    if small {
        html.push_str(&table(&format!("{} hide-for-large", classes), size_of("size-sm")));
    }
    if large {
        html.push_str(&table(&format!("{} show-for-large", classes), size_of("size-lg")));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str, attrs: &[(&str, &str)]) -> Element {
        let mut element = Element::new(name);
        for (n, v) in attrs {
            element.attrs.set(*n, *v);
        }
        element
    }

    #[test]
    fn test_row() {
        let el = element("row", &[("class", "collapse"), ("dir", "rtl")]);
        assert_eq!(
            expand_component(ComponentKind::Row, &el, "X"),
            r#"<table dir="rtl" class="row collapse"><tbody><tr>X</tr></tbody></table>"#
        );
    }

    #[test]
    fn test_button_with_href_and_target() {
        let el = element("button", &[("href", "http://zurb.com"), ("target", "_blank")]);
        assert_eq!(
            expand_component(ComponentKind::Button, &el, "Button"),
            r#"<table class="button"><tr><td><table><tr><td><a href="http://zurb.com" target="_blank">Button</a></td></tr></table></td></tr></table>"#
        );
    }

    #[test]
    fn test_button_expanded() {
        let el = element("button", &[("class", "expand"), ("href", "#")]);
        assert_eq!(
            expand_component(ComponentKind::Button, &el, "Go"),
            "<table class=\"button expand\"><tr><td><table><tr><td><center><a href=\"#\">Go</a></center></td></tr></table></td>\n<td class=\"expander\"></td></tr></table>"
        );
    }

    #[test]
    fn test_block_grid() {
        let el = element("block-grid", &[("up", "4")]);
        assert_eq!(
            expand_component(ComponentKind::BlockGrid, &el, "<td>A</td>"),
            r#"<table class="block-grid up-4"><tr><td>A</td></tr></table>"#
        );

        let without_up = element("block-grid", &[("class", "x")]);
        assert_eq!(
            expand_component(ComponentKind::BlockGrid, &without_up, ""),
            r#"<table class="block-grid x"><tr></tr></table>"#
        );
    }

    #[test]
    fn test_menu_item() {
        let el = element("item", &[("href", "http://zurb.com"), ("target", "_blank")]);
        assert_eq!(
            expand_component(ComponentKind::MenuItem, &el, "Item"),
            r#"<th class="menu-item"><a href="http://zurb.com" target="_blank">Item</a></th>"#
        );
    }

    #[test]
    fn test_callout() {
        let el = element("callout", &[("class", "primary")]);
        assert_eq!(
            expand_component(ComponentKind::Callout, &el, "Callout"),
            r#"<table class="callout"><tr><th class="callout-inner primary">Callout</th><th class="expander"></th></tr></table>"#
        );
    }

    #[test]
    fn test_spacer_default_size() {
        let el = element("spacer", &[]);
        assert_eq!(
            expand_component(ComponentKind::Spacer, &el, ""),
            r#"<table class="spacer"><tbody><tr><td height="16" style="font-size:16px;line-height:16px;">&nbsp;</td></tr></tbody></table>"#
        );
    }

    #[test]
    fn test_spacer_responsive_sizes() {
        let el = element("spacer", &[("size-sm", "10"), ("size-lg", "20")]);
        let html = expand_component(ComponentKind::Spacer, &el, "");
        assert_eq!(
            html,
            concat!(
                r#"<table class="spacer hide-for-large"><tbody><tr><td height="10" style="font-size:10px;line-height:10px;">&nbsp;</td></tr></tbody></table>"#,
                r#"<table class="spacer show-for-large"><tbody><tr><td height="20" style="font-size:20px;line-height:20px;">&nbsp;</td></tr></tbody></table>"#
            )
        );
    }

    #[test]
    fn test_spacer_bad_size_falls_back() {
        let el = element("spacer", &[("size", "big")]);
        assert!(expand_component(ComponentKind::Spacer, &el, "").contains("height=\"16\""));
    }

    #[test]
    fn test_wrapper() {
        let el = element("wrapper", &[("class", "header")]);
        assert_eq!(
            expand_component(ComponentKind::Wrapper, &el, "W"),
            r#"<table class="wrapper header" align="center"><tr><td class="wrapper-inner">W</td></tr></table>"#
        );
    }

    #[test]
    fn test_inky_ignores_content() {
        let el = element("inky", &[("class", "x")]);
        let html = expand_component(ComponentKind::Inky, &el, "ignored");
        assert!(html.starts_with("<tr><td><img src="));
        assert!(!html.contains("ignored"));
    }
}
