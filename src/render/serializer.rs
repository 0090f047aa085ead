//! Tree serialization in HTML and XML flavors.
//!
//! The two flavors differ on purpose and neither is a strict XHTML writer:
//!
//! | input | HTML mode | XML mode |
//! |---|---|---|
//! | `alt=""` | `alt` | `alt=""` |
//! | `<br>` | `<br>` | `<br/>` |
//! | `<th class="expander"></th>` | unchanged | `<th class="expander"/>` |

use crate::model::{Document, NodeData, NodeId};
use crate::parser::entities::{escape_attribute, escape_text};
use crate::parser::{is_void_element, ParseOptions};

use super::OutputMode;

const RAW_TEXT_PARENTS: &[&str] = &["script", "style"];

/// Serialize a whole document in HTML mode.
pub fn to_html(doc: &Document, options: &ParseOptions) -> String {
    render(doc, options, OutputMode::Html)
}

/// Serialize a whole document in XML mode.
pub fn to_xml(doc: &Document, options: &ParseOptions) -> String {
    render(doc, options, OutputMode::Xml)
}

/// Serialize a whole document in the given mode.
pub fn render(doc: &Document, options: &ParseOptions, mode: OutputMode) -> String {
    inner_html(doc, doc.root(), options, mode)
}

/// Serialize the children of a node.
pub fn inner_html(doc: &Document, id: NodeId, options: &ParseOptions, mode: OutputMode) -> String {
    let mut serializer = Serializer::new(doc, options, mode);
    serializer.write_children(id);
    serializer.out
}

/// Serialize a node including its own tag.
pub fn outer_html(doc: &Document, id: NodeId, options: &ParseOptions, mode: OutputMode) -> String {
    let mut serializer = Serializer::new(doc, options, mode);
    serializer.write_node(id);
    serializer.out
}

struct Serializer<'a> {
    doc: &'a Document,
    mode: OutputMode,
    xml_parsed: bool,
    escape: bool,
    out: String,
}

impl<'a> Serializer<'a> {
    fn new(doc: &'a Document, options: &ParseOptions, mode: OutputMode) -> Self {
        Self {
            doc,
            mode,
            xml_parsed: options.xml_mode,
            escape: options.decode_entities,
            out: String::new(),
        }
    }

    fn write_children(&mut self, id: NodeId) {
        for &child in self.doc.children(id) {
            self.write_node(child);
        }
    }

    fn write_node(&mut self, id: NodeId) {
        match &self.doc.node(id).data {
            NodeData::Root => self.write_children(id),
            NodeData::Element(_) => self.write_element(id),
            NodeData::Text(text) => {
                let verbatim = !self.escape || self.in_raw_text_parent(id);
                if verbatim {
                    self.out.push_str(text);
                } else {
                    self.out.push_str(&escape_text(text));
                }
            }
            NodeData::Comment(body) => {
                self.out.push_str("<!--");
                self.out.push_str(body);
                self.out.push_str("-->");
            }
            NodeData::Directive(body) | NodeData::ProcessingInstruction(body) => {
                self.out.push('<');
                self.out.push_str(body);
                self.out.push('>');
            }
            NodeData::CData(body) => {
                self.out.push_str("<![CDATA[");
                self.out.push_str(body);
                self.out.push_str("]]>");
            }
        }
    }

    fn in_raw_text_parent(&self, id: NodeId) -> bool {
        !self.xml_parsed
            && self
                .doc
                .parent(id)
                .and_then(|p| self.doc.name(p))
                .is_some_and(|n| RAW_TEXT_PARENTS.contains(&n))
    }

    fn write_element(&mut self, id: NodeId) {
        let Some(element) = self.doc.element(id) else {
            return;
        };

        self.out.push('<');
        self.out.push_str(&element.name);
        for (name, value) in element.attrs.iter() {
            self.out.push(' ');
            self.out.push_str(name);
            if value.is_empty() && self.mode == OutputMode::Html {
                continue;
            }
            self.out.push_str("=\"");
            self.out.push_str(&escape_attribute(value, self.escape));
            self.out.push('"');
        }

        let children = self.doc.children(id);
        match self.mode {
            OutputMode::Html => {
                self.out.push('>');
                if !self.xml_parsed && is_void_element(&element.name) {
                    return;
                }
                self.write_children(id);
            }
            OutputMode::Xml => {
                if children.is_empty() {
                    self.out.push_str("/>");
                    return;
                }
                self.out.push('>');
                self.write_children(id);
            }
        }

        self.out.push_str("</");
        self.out.push_str(&element.name);
        self.out.push('>');
    }
}
