//! Generic element tree for the source scenario XML
//!
//! The source schema is loosely typed and evolved additively, so the file
//! is parsed into a plain element tree and all interpretation happens in
//! the converter.

use indexmap::IndexMap;

/// A parsed scenario description document.
#[derive(Debug, Clone, Default)]
pub struct SiqDocument {
    /// The document's root element (`<package>` in well-formed files).
    pub root: SiqNode,
}

/// One XML element: name, attributes, collected text, and children in
/// document order.
#[derive(Debug, Clone, Default)]
pub struct SiqNode {
    /// Element name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: IndexMap<String, String>,
    /// Concatenated character data, surrounding whitespace trimmed.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<SiqNode>,
}

impl SiqNode {
    /// Creates an empty node with the given element name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        SiqNode {
            name: name.into(),
            ..SiqNode::default()
        }
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&SiqNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SiqNode> {
        self.children.iter().filter(move |c| c.name == name)
    }
}
