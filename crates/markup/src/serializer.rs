//! Markup Serializer - Convert a node tree to a markup string
//!
//! This module handles:
//! - Rendering elements, text nodes and child lists
//! - Self-closing void elements (content is never rendered)
//! - camelCase → hyphen-case attribute names
//! - Whole-document output: doctype + synthetic `html` root, on one line
//!
//! Values are emitted verbatim. Escaping is the caller's job.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::types::*;
use crate::utils;

/// Literal prefix of every serialized document
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Serializer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializerConfig {
    /// Attributes of the synthetic `html` root
    #[serde(rename = "htmlTagAttributes", default)]
    pub html_tag_attributes: Attributes,

    /// Accepted but inert: the `html` root is always emitted
    #[serde(rename = "excludeHTMLtag", default)]
    pub exclude_html_tag: bool,
}

impl SerializerConfig {
    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Markup tree serializer
#[derive(Debug, Clone, Default)]
pub struct MarkupSerializer {
    config: SerializerConfig,
}

impl MarkupSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Serialize a whole document: doctype, then `nodes` wrapped in `html`
    ///
    /// Line breaks are stripped from the result, so output is one line.
    pub fn serialize_document(&self, nodes: &[Node]) -> String {
        let mut output = String::with_capacity(4096);
        output.push_str(DOCTYPE);

        // Synthetic html root
        output.push_str("<html");
        write_attributes(&self.config.html_tag_attributes, &mut output);
        output.push('>');
        for node in nodes {
            write_node(node, &mut output);
        }
        output.push_str("</html>");

        output.retain(|c| c != '\n' && c != '\r');

        tracing::trace!(len = output.len(), "serialized document");
        output
    }

    /// Render one node and its subtree
    pub fn render_node(node: &Node) -> String {
        let mut output = String::new();
        write_node(node, &mut output);
        output
    }

    /// Render content: text verbatim, child lists concatenated
    pub fn render_content(content: Option<&Content>) -> String {
        let mut output = String::new();
        write_content(content, &mut output);
        output
    }

    /// Render attributes as ` key="value"` pairs in declaration order
    pub fn render_attributes(attributes: &Attributes) -> String {
        let mut output = String::new();
        write_attributes(attributes, &mut output);
        output
    }
}

fn write_node(node: &Node, output: &mut String) {
    let Some(tag) = node.tag_name() else {
        // Text node; anything but a text payload renders as nothing
        if let Some(text) = node.text_payload() {
            output.push_str(text);
        }
        return;
    };

    output.push('<');
    output.push_str(tag);
    write_attributes(&node.attributes, output);

    if utils::is_void_element(tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');
    write_content(node.content.as_ref(), output);
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

fn write_content(content: Option<&Content>, output: &mut String) {
    match content {
        Some(Content::Nodes(children)) => {
            for child in children {
                write_node(child, output);
            }
        }
        Some(Content::Text(text)) => output.push_str(text),
        None => {}
    }
}

fn write_attributes(attributes: &Attributes, output: &mut String) {
    for (name, value) in attributes.iter() {
        output.push(' ');
        output.push_str(&utils::to_hyphen_case(name));
        output.push_str("=\"");
        output.push_str(value);
        output.push('"');
    }
}
