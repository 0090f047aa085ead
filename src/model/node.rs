//! Node types.

/// Index of a node in the document arena.
pub type NodeId = usize;

/// Payload of a node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Container node: the document root, or a fragment being built.
    Root,
    /// Element with tag name and attributes
    Element(Element),
    /// Character data, stored exactly as it will be written back
    Text(String),
    /// Comment body (without `<!--` and `-->`)
    Comment(String),
    /// Markup declaration such as `!DOCTYPE html` (without the angle brackets)
    Directive(String),
    /// Processing instruction such as `?xml version="1.0"?` (without the angle brackets)
    ProcessingInstruction(String),
    /// CDATA section body
    CData(String),
}

/// A node in the document arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node payload
    pub data: NodeData,

    /// Parent node (None for the root and for detached nodes)
    pub parent: Option<NodeId>,

    /// Child nodes in document order
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create a detached node.
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get the element payload, if any.
    pub fn as_element(&self) -> Option<&Element> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get the mutable element payload, if any.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// An element: tag name plus ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, lowercased unless the document was parsed in XML mode
    pub name: String,

    /// Attributes in source order
    pub attrs: Attributes,
}

impl Element {
    /// Create an element without attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attributes::new(),
        }
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Iterate over the whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attrs.get("class").unwrap_or("").split_whitespace()
    }

    /// Check whether the element carries the given class token.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Append a class token unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let value = match self.attrs.get("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim_end(), class)
            }
            _ => class.to_string(),
        };
        self.attrs.set("class", value);
    }
}

/// Ordered attribute list.
///
/// Insertion order is preserved; setting an existing name replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if an attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Set a value, keeping the original position when it already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert a parsed attribute. Duplicate names keep the first value.
    pub fn insert_parsed(&mut self, name: String, value: String) {
        if !self.contains(&name) {
            self.entries.push((name, value));
        }
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
