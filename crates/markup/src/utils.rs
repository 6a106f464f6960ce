//! Utility functions for markup rendering

use crate::types::{Content, Node};

/// Elements that always render self-closing and never render content
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Check membership in the void-element set (exact, case-sensitive)
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Convert a camelCase attribute name to hyphen-case
///
/// Every uppercase letter after the first character gets a hyphen in front
/// and is lowercased. A leading uppercase letter is left alone.
pub fn to_hyphen_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for (i, ch) in name.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Get all text content from node and its children
pub fn text_content(node: &Node) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Node, out: &mut String) {
    match &node.content {
        Some(Content::Text(payload)) => out.push_str(payload),
        Some(Content::Nodes(children)) => {
            for child in children {
                collect_text(child, out);
            }
        }
        None => {}
    }
}
