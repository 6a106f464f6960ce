//! Core type definitions for the markup tree
//!
//! Key design principles:
//! 1. Content is a tagged variant: text OR children, never both
//! 2. Children are owned by their parent, no back-references
//! 3. Use SmallVec for small arrays (attributes, paths)
//! 4. Locations are index paths, not references

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

use crate::utils;

/// Location of a node: child indices starting from the root list
/// Most trees are shallow, 8 levels stay inline
pub type NodePath = SmallVec<[usize; 8]>;

/// Node content: raw text or an ordered list of child nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Nodes(Vec<Node>),
}

impl Content {
    /// Child list, if this is node content
    pub fn nodes(&self) -> Option<&[Node]> {
        match self {
            Content::Nodes(nodes) => Some(nodes),
            Content::Text(_) => None,
        }
    }

    /// Text payload, if this is text content
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Nodes(_) => None,
        }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<Vec<Node>> for Content {
    fn from(nodes: Vec<Node>) -> Self {
        Content::Nodes(nodes)
    }
}

/// Attribute map that keeps declaration order
///
/// Render order is declaration order, so a hash map won't do.
/// Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: SmallVec<[(String, String); 4]>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, keeping the original position of an existing key
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.set(key, value);
        }
        attributes
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Attributes;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of attribute names to string values")
    }

    // Entries arrive in document order, which is the render order we keep
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attributes, A::Error> {
        let mut attributes = Attributes::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            attributes.set(key, value);
        }
        Ok(attributes)
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributesVisitor)
    }
}

/// One markup element or one piece of text
///
/// A node without a tag (or with an empty one) is a text node. Its content should be text (or absent);
/// anything else renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl Node {
    /// Create an empty element
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Default::default()
        }
    }

    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Some(Content::Text(text.into())),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Replace content with text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Some(Content::Text(text.into()));
        self
    }

    /// Append one child, coercing content the same way `append_child` does
    pub fn with_child(mut self, child: Node) -> Self {
        self.append_child(child);
        self
    }

    /// Replace content with a child list
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.content = Some(Content::Nodes(children));
        self
    }

    /// Get tag name for element nodes. An empty tag counts as no tag.
    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.is_empty())
    }

    pub fn is_element(&self) -> bool {
        self.tag_name().is_some()
    }

    pub fn is_text(&self) -> bool {
        self.tag_name().is_none()
    }

    /// Check if node renders self-closing
    pub fn is_void(&self) -> bool {
        self.tag_name().is_some_and(utils::is_void_element)
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Children, empty unless content is a node list
    pub fn children(&self) -> &[Node] {
        self.content.as_ref().and_then(Content::nodes).unwrap_or(&[])
    }

    /// Text payload, if content is text
    pub fn text_payload(&self) -> Option<&str> {
        self.content.as_ref().and_then(Content::text)
    }

    /// Append a child, coercing the current content into a list:
    /// - no content: becomes `[child]`
    /// - child list: `child` is pushed
    /// - text: becomes `[text node holding the old text, child]`
    pub fn append_child(&mut self, child: Node) {
        match self.content.take() {
            None => self.content = Some(Content::Nodes(vec![child])),
            Some(Content::Nodes(mut nodes)) => {
                nodes.push(child);
                self.content = Some(Content::Nodes(nodes));
            }
            Some(Content::Text(text)) => {
                self.content = Some(Content::Nodes(vec![Node::text(text), child]));
            }
        }
    }
}
