//! Tree builder on top of the tokenizer.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Document, Element, NodeData, NodeId};

use super::entities;
use super::options::ParseOptions;
use super::tokenizer::{Token, Tokenizer};

/// Elements that never have content.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "br", "col", "command", "embed", "frame", "hr", "img", "input",
    "isindex", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text is kept verbatim.
const RAW_TEXT_PARENTS: &[&str] = &["script", "style"];

const P_CLOSERS: &[&str] = &["p"];

/// Open elements implicitly closed by a new start tag, when they are the
/// innermost open element.
fn implicitly_closed_by(name: &str) -> &'static [&'static str] {
    match name {
        "tr" => &["tr", "th", "td"],
        "th" => &["th"],
        "td" => &["thead", "th", "td"],
        "li" => &["li"],
        "option" => &["option"],
        "optgroup" => &["optgroup", "option"],
        "dd" | "dt" => &["dd", "dt"],
        "rt" | "rp" => &["rt", "rp"],
        "tbody" | "tfoot" => &["thead", "tbody"],
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "address" | "article" | "aside"
        | "blockquote" | "details" | "div" | "dl" | "fieldset" | "figcaption" | "figure"
        | "footer" | "form" | "header" | "hr" | "main" | "nav" | "ol" | "pre" | "section"
        | "ul" => P_CLOSERS,
        _ => &[],
    }
}

/// Check whether a tag name is an HTML void element.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Lenient markup parser.
///
/// Loads markup into a [`Document`] without ever failing: unclosed elements
/// are closed at the end of input, stray end tags are dropped and void
/// elements never take children.
#[derive(Debug, Clone, Default)]
pub struct MarkupParser {
    options: ParseOptions,
}

impl MarkupParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a complete document.
    pub fn parse(&self, input: &str) -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        self.build(&mut doc, root, input);
        doc
    }

    /// Parse a fragment into detached nodes owned by `doc`.
    ///
    /// The returned nodes have no parent and can be spliced into the tree
    /// with [`Document::replace_with`].
    pub fn parse_fragment(&self, doc: &mut Document, input: &str) -> Vec<NodeId> {
        let container = doc.create(NodeData::Root);
        self.build(doc, container, input);
        doc.take_children(container)
    }

    fn build(&self, doc: &mut Document, container: NodeId, input: &str) {
        let mut builder = TreeBuilder {
            doc,
            stack: vec![container],
            options: &self.options,
        };
        let tokenizer = Tokenizer::new(
            input,
            self.options.lowercases_names(),
            self.options.xml_mode,
        );
        for token in tokenizer {
            builder.push(token);
        }
    }
}

struct TreeBuilder<'d, 'o> {
    doc: &'d mut Document,
    stack: Vec<NodeId>,
    options: &'o ParseOptions,
}

impl TreeBuilder<'_, '_> {
    fn current(&self) -> NodeId {
        *self.stack.last().unwrap_or(&self.stack[0])
    }

    fn current_name(&self) -> Option<&str> {
        if self.stack.len() > 1 {
            self.doc.name(self.current())
        } else {
            None
        }
    }

    fn append(&mut self, data: NodeData) -> NodeId {
        let id = self.doc.create(data);
        let parent = self.current();
        self.doc.append_child(parent, id);
        id
    }

    fn push(&mut self, token: Token<'_>) {
        match token {
            Token::StartTag {
                name,
                attrs,
                self_closing,
            } => self.start_tag(name, attrs, self_closing),
            Token::EndTag { name } => self.end_tag(&name),
            Token::Text(text) => self.text(text),
            Token::Comment(body) => {
                self.append(NodeData::Comment(body.to_string()));
            }
            Token::Directive(body) => {
                self.append(NodeData::Directive(body.to_string()));
            }
            Token::ProcessingInstruction(body) => {
                self.append(NodeData::ProcessingInstruction(body.to_string()));
            }
            Token::CData(body) => {
                self.append(NodeData::CData(body.to_string()));
            }
        }
    }

    fn start_tag(&mut self, name: String, attrs: Vec<(String, String)>, self_closing: bool) {
        let xml_mode = self.options.xml_mode;

        if !xml_mode {
            let closes = implicitly_closed_by(&name);
            while self.current_name().is_some_and(|open| closes.contains(&open)) {
                self.stack.pop();
            }
        }

        let mut element = Element::new(name);
        for (attr_name, value) in attrs {
            let value = if self.options.decode_entities {
                entities::decode(&value).into_owned()
            } else {
                value
            };
            element.attrs.insert_parsed(attr_name, value);
        }

        let is_void = !xml_mode && is_void_element(&element.name);
        let closes_itself = self_closing && (xml_mode || self.options.recognize_self_closing);
        let id = self.append(NodeData::Element(element));
        if !is_void && !closes_itself {
            self.stack.push(id);
        }
    }

    fn end_tag(&mut self, name: &str) {
        if !self.options.xml_mode && is_void_element(name) {
            return;
        }
        let matching = self
            .stack
            .iter()
            .skip(1)
            .rposition(|&open| self.doc.name(open) == Some(name));
        match matching {
            Some(index) => self.stack.truncate(index + 1),
            None => log::trace!("dropping stray end tag </{}>", name),
        }
    }

    fn text(&mut self, text: &str) {
        let raw_parent = !self.options.xml_mode
            && self
                .current_name()
                .is_some_and(|n| RAW_TEXT_PARENTS.contains(&n));

        let mut content = if raw_parent {
            text.to_string()
        } else if self.options.decode_entities {
            entities::decode(text).into_owned()
        } else {
            text.to_string()
        };
        if self.options.normalize_whitespace && !raw_parent {
            content = whitespace_regex().replace_all(&content, " ").into_owned();
        }

        let parent = self.current();
        if let Some(&last) = self.doc.children(parent).last() {
            if let NodeData::Text(existing) = &mut self.doc.node_mut(last).data {
                existing.push_str(&content);
                return;
            }
        }
        self.append(NodeData::Text(content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{to_html, to_xml};

    fn round_trip(input: &str) -> String {
        let doc = MarkupParser::default().parse(input);
        to_html(&doc, &ParseOptions::default())
    }

    #[test]
    fn test_nested_structure() {
        let doc = MarkupParser::default().parse("<div><p>a</p><p>b</p></div>");
        let div = doc.children(doc.root())[0];
        assert_eq!(doc.name(div), Some("div"));
        assert_eq!(doc.children(div).len(), 2);
    }

    #[test]
    fn test_unclosed_void_element() {
        let doc = MarkupParser::default().parse("<h1>Hello<br>World!</h1>");
        let h1 = doc.children(doc.root())[0];
        assert_eq!(doc.children(h1).len(), 3);
        assert_eq!(round_trip("<h1>Hello<br>World!</h1>"), "<h1>Hello<br>World!</h1>");
    }

    #[test]
    fn test_unclosed_elements_closed_at_end() {
        assert_eq!(round_trip("<div><span>open"), "<div><span>open</span></div>");
    }

    #[test]
    fn test_stray_end_tag_dropped() {
        assert_eq!(round_trip("<p>a</span>b</p>"), "<p>ab</p>");
    }

    #[test]
    fn test_end_tag_closes_intermediate() {
        assert_eq!(round_trip("<div><b>bold</div>after"), "<div><b>bold</b></div>after");
    }

    #[test]
    fn test_implied_close_of_table_cells() {
        assert_eq!(
            round_trip("<table><tr><td>a<td>b</table>"),
            "<table><tr><td>a</td><td>b</td></tr></table>"
        );
    }

    #[test]
    fn test_table_stays_inside_paragraph() {
        let input = r#"<p>a<table class="spacer"><tr><td>b</td></tr></table></p>"#;
        assert_eq!(round_trip(input), input);
        assert_eq!(round_trip("<p>a<div>b</div>"), "<p>a</p><div>b</div>");
    }

    #[test]
    fn test_self_closing_custom_tag() {
        let doc = MarkupParser::default().parse("<spacer size=\"8\"/><p>after</p>");
        assert_eq!(doc.children(doc.root()).len(), 2);

        let legacy = MarkupParser::new(ParseOptions::new().with_recognize_self_closing(false))
            .parse("<spacer size=\"8\"/><p>after</p>");
        assert_eq!(legacy.children(legacy.root()).len(), 1);
    }

    #[test]
    fn test_xml_mode_no_void_elements() {
        let options = ParseOptions::new().with_xml_mode(true);
        let doc = MarkupParser::new(options.clone()).parse("<br>text</br>");
        assert_eq!(to_xml(&doc, &options), "<br>text</br>");
    }

    #[test]
    fn test_decode_entities_option() {
        let options = ParseOptions::new().with_decode_entities(true);
        let doc = MarkupParser::new(options).parse("a&amp;b");
        let text = doc.children(doc.root())[0];
        assert_eq!(doc.node(text).data, NodeData::Text("a&b".into()));
    }

    #[test]
    fn test_normalize_whitespace_option() {
        let options = ParseOptions::new().with_normalize_whitespace(true);
        let doc = MarkupParser::new(options.clone()).parse("<p>a \n\t b</p>");
        assert_eq!(to_html(&doc, &options), "<p>a b</p>");
    }

    #[test]
    fn test_parse_fragment_detached() {
        let mut doc = MarkupParser::default().parse("<div></div>");
        let nodes = MarkupParser::default().parse_fragment(&mut doc, "<th>a</th>text");
        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|&n| doc.parent(n).is_none()));
        assert_eq!(doc.name(nodes[0]), Some("th"));
    }

    #[test]
    fn test_doctype_and_comments_preserved() {
        let input = "<!doctype html>\n<html><!-- c --><body></body></html>";
        assert_eq!(round_trip(input), input);
    }
}
