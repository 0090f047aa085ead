//! Fixpoint rewrite loop over the loaded tree.

use crate::components::{ComponentKind, ComponentRegistry, Expander, PARSED_MARKER};
use crate::error::{Error, Result};
use crate::model::{Document, NodeId};
use crate::parser::MarkupParser;

/// Expands component elements one at a time until none is left.
pub(crate) struct Rewriter<'a> {
    registry: &'a ComponentRegistry,
    parser: &'a MarkupParser,
    expander: Expander<'a>,
    max_iterations: usize,
}

impl<'a> Rewriter<'a> {
    pub(crate) fn new(
        registry: &'a ComponentRegistry,
        parser: &'a MarkupParser,
        column_count: u32,
        max_iterations: usize,
    ) -> Self {
        Self {
            registry,
            parser,
            expander: Expander::new(registry, column_count, parser.options()),
            max_iterations,
        }
    }

    /// Run the loop to completion and return the number of substitutions.
    ///
    /// Each round rescans from the root, since a substitution may expose
    /// nested components or shift the siblings a column depends on.
    pub(crate) fn run(&self, doc: &mut Document) -> Result<usize> {
        let mut iterations = 0;
        while let Some(id) = self.next_trigger(doc) {
            if iterations >= self.max_iterations {
                return Err(Error::IterationLimit(self.max_iterations));
            }
            iterations += 1;

            let html = self.expander.expand(doc, id);
            log::trace!(
                "expanding <{}> ({} bytes of replacement)",
                doc.name(id).unwrap_or_default(),
                html.len()
            );

            let replacement = self.parser.parse_fragment(doc, &html);
            if !doc.replace_with(id, replacement) {
                return Err(Error::Other(format!("node {} is detached from the tree", id)));
            }
        }
        Ok(iterations)
    }

    /// First element in document order that triggers a component.
    ///
    /// Center elements only trigger until they carry the processed marker.
    pub(crate) fn next_trigger(&self, doc: &Document) -> Option<NodeId> {
        doc.find_element(doc.root(), |_, element| {
            match self.registry.kind_for_tag(&element.name) {
                Some(ComponentKind::Center) => !element.attrs.contains(PARSED_MARKER),
                Some(_) => true,
                None => false,
            }
        })
    }
}
