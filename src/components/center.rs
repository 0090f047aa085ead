//! Center component: marks children for centering and is left in place.

use crate::model::{Document, NodeId};

/// Attribute marking a center element as already processed.
pub const PARSED_MARKER: &str = "data-parsed";

/// Class added to every centered child.
pub const CENTER_CLASS: &str = "float-center";

/// Children that also receive `align="center"`.
const BLOCK_LEVEL_ELEMENTS: &[&str] = &[
    "address", "blockquote", "center", "dir", "div", "dl", "fieldset", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "hr", "isindex", "menu", "noframes", "noscript", "ol", "p", "pre", "table",
    "ul", "dd", "dt", "frameset", "li", "tbody", "td", "tfoot", "th", "thead", "tr",
];

/// Check whether a tag name is in the block-level allow-list.
pub fn is_block_level(name: &str) -> bool {
    BLOCK_LEVEL_ELEMENTS
        .iter()
        .any(|block| block.eq_ignore_ascii_case(name))
}

/// Apply centering to the children of a center element and mark it processed.
///
/// Immediate element children get the centering class, plus
/// `align="center"` when block-level. Descendant menu items (by tag or by
/// `menu-item` class) get the centering class too.
///
/// A child that already carries the centering class, on itself or on an
/// element inside it, was centered by an earlier conversion and is left
/// alone. Expanded components may carry the class on an inner element
/// (a callout puts it on its inner cell).
pub fn mark_centered(doc: &mut Document, id: NodeId, menu_item_tag: &str) {
    if doc.has_element_children(id) {
        let children: Vec<NodeId> = doc
            .element_children(id)
            .filter(|&child| !is_centered(doc, child))
            .collect();
        for child in children {
            if let Some(element) = doc.element_mut(child) {
                if is_block_level(&element.name) {
                    element.attrs.set("align", "center");
                }
                element.add_class(CENTER_CLASS);
            }
        }

        let items = doc.find_all_elements(id, |e| {
            e.name.eq_ignore_ascii_case(menu_item_tag) || e.has_class("menu-item")
        });
        for item in items {
            if let Some(element) = doc.element_mut(item) {
                element.add_class(CENTER_CLASS);
            }
        }
    }

    if let Some(element) = doc.element_mut(id) {
        element.attrs.set(PARSED_MARKER, "");
    }
}

/// Check whether an element or one of its descendants carries the centering class.
fn is_centered(doc: &Document, id: NodeId) -> bool {
    doc.element(id).is_some_and(|e| e.has_class(CENTER_CLASS))
        || doc
            .find_element(id, |_, e| e.has_class(CENTER_CLASS))
            .is_some()
}

/// Check whether a center element was already processed.
pub fn is_marked(doc: &Document, id: NodeId) -> bool {
    doc.element(id)
        .is_some_and(|e| e.attrs.contains(PARSED_MARKER))
}

/// Remove every processed marker left in the tree.
pub fn strip_markers(doc: &mut Document) -> usize {
    let marked = doc.find_all_elements(doc.root(), |e| e.attrs.contains(PARSED_MARKER));
    for &id in &marked {
        if let Some(element) = doc.element_mut(id) {
            element.attrs.remove(PARSED_MARKER);
        }
    }
    marked.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{MarkupParser, ParseOptions};
    use crate::render::to_html;

    fn centered(input: &str) -> String {
        let mut doc = MarkupParser::default().parse(input);
        let center = doc.children(doc.root())[0];
        mark_centered(&mut doc, center, "item");
        to_html(&doc, &ParseOptions::default())
    }

    #[test]
    fn test_block_child_gets_align() {
        assert_eq!(
            centered("<center><p>hi</p></center>"),
            r#"<center data-parsed><p align="center" class="float-center">hi</p></center>"#
        );
    }

    #[test]
    fn test_inline_child_only_gets_class() {
        assert_eq!(
            centered(r##"<center><a href="#" class="x">hi</a></center>"##),
            r##"<center data-parsed><a href="#" class="x float-center">hi</a></center>"##
        );
    }

    #[test]
    fn test_menu_items_marked() {
        let output = centered(r##"<center><menu><item href="#">A</item><th class="menu-item">B</th></menu></center>"##);
        assert!(output.contains(r##"<item href="#" class="float-center">A</item>"##));
        assert!(output.contains(r#"<th class="menu-item float-center">B</th>"#));
    }

    #[test]
    fn test_centered_children_left_alone() {
        assert_eq!(
            centered(r#"<center><table class="button float-center"><tr><td>Go</td></tr></table></center>"#),
            r#"<center data-parsed><table class="button float-center"><tr><td>Go</td></tr></table></center>"#
        );
        assert_eq!(
            centered(r#"<center><table class="callout"><tr><th class="callout-inner float-center">x</th></tr></table><p>y</p></center>"#),
            r#"<center data-parsed><table class="callout"><tr><th class="callout-inner float-center">x</th></tr></table><p align="center" class="float-center">y</p></center>"#
        );
    }

    #[test]
    fn test_text_only_center_just_marked() {
        assert_eq!(centered("<center>text</center>"), "<center data-parsed>text</center>");
    }

    #[test]
    fn test_strip_markers() {
        let mut doc = MarkupParser::default().parse("<center data-parsed><center data-parsed></center></center>");
        assert_eq!(strip_markers(&mut doc), 2);
        assert_eq!(
            to_html(&doc, &ParseOptions::default()),
            "<center><center></center></center>"
        );
    }
}
