//! Column layout: grid sizes, position flags and the expander cell.

use crate::model::{Document, Element, NodeId};

use super::attrs::{parse_size, project_attributes};
use super::registry::{ComponentKind, ComponentRegistry};

/// Resolved layout of one column element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Width on small screens, in grid units
    pub small_size: u32,
    /// Width on large screens, in grid units
    pub large_size: u32,
    /// Class tokens of the generated cell, in output order
    pub classes: Vec<String>,
    /// No column precedes this one in its group
    pub is_first: bool,
    /// No column follows this one in its group
    pub is_last: bool,
    /// An expander cell follows the content cell
    pub include_expander: bool,
}

/// Compute the layout of a column from its attributes and siblings.
///
/// Siblings count as columns when they still carry the column tag or were
/// already expanded into a `th.columns` cell, so the result does not depend
/// on how far the rewrite loop has progressed through the group.
pub fn resolve_column(
    doc: &Document,
    id: NodeId,
    registry: &ComponentRegistry,
    column_count: u32,
) -> Option<ColumnLayout> {
    let element = doc.element(id)?;
    let column_tag = registry.tag(ComponentKind::Columns);
    let is_column = |sibling: NodeId| {
        doc.element(sibling)
            .is_some_and(|e| is_column_element(e, column_tag))
    };

    let preceding = doc
        .preceding_element_siblings(id)
        .into_iter()
        .filter(|&s| is_column(s))
        .count();
    let following = doc
        .following_element_siblings(id)
        .into_iter()
        .filter(|&s| is_column(s))
        .count();
    let group_size = (preceding + following + 1) as u32;

    let small = parse_size(element.attr("small"));
    let large = parse_size(element.attr("large"));
    let small_size = small.unwrap_or(column_count);
    let large_size = large.or(small).unwrap_or(column_count / group_size);

    let no_expander = element
        .attr("no-expander")
        .is_some_and(|value| value != "false");
    let row_tag = registry.tag(ComponentKind::Row);
    let has_nested_row = doc
        .find_element(id, |_, e| e.name.eq_ignore_ascii_case(row_tag) || e.has_class("row"))
        .is_some();
    let include_expander = large_size == column_count && !has_nested_row && !no_expander;

    let is_first = preceding == 0;
    let is_last = following == 0;

    let mut classes: Vec<String> = element.classes().map(str::to_string).collect();
    classes.push(format!("small-{}", small_size));
    classes.push(format!("large-{}", large_size));
    classes.push("columns".to_string());
    if is_first {
        classes.push("first".to_string());
    }
    if is_last {
        classes.push("last".to_string());
    }

    log::trace!(
        "column resolved: small={} large={} group={} expander={}",
        small_size,
        large_size,
        group_size,
        include_expander
    );

    Some(ColumnLayout {
        small_size,
        large_size,
        classes,
        is_first,
        is_last,
        include_expander,
    })
}

fn is_column_element(element: &Element, column_tag: &str) -> bool {
    element.name.eq_ignore_ascii_case(column_tag)
        || (element.name.eq_ignore_ascii_case("th") && element.has_class("columns"))
}

/// Build the table markup of a column.
pub fn render_column(layout: &ColumnLayout, element: &Element, inner: &str) -> String {
    let expander = if layout.include_expander {
        "\n<th class=\"expander\"></th>"
    } else {
        ""
    };
    format!(
        "<th class=\"{}\"{}><table><tr><th>{}</th>{}</tr></table></th>",
        layout.classes.join(" "),
        project_attributes(element),
        inner,
        expander
    )
}
