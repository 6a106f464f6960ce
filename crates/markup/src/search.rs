//! Tree search over a list of nodes
//!
//! Matches are reported level by level: every match among the nodes of one
//! list comes first, then the results of descending into each child list in
//! order. This is NOT document order.
//!
//! ```text
//! [title, div[title]]  →  search(tag = "title")  →  [0], [1, 0]
//! ```
//!
//! Results are `NodePath`s so callers can mutate what they found without
//! holding references into the tree.

use crate::types::{Content, Node, NodePath};

/// Search criterion
///
/// All three fields are optional, but only the first present one (tag, then
/// id, then class) is applied. Supplying `tag` and `id` together searches by
/// tag alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criterion {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub class: Option<String>,
}

impl Criterion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// The single selector this criterion applies, if any
    ///
    /// Empty strings count as absent.
    pub fn applied(&self) -> Option<Selector<'_>> {
        fn present(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|v| !v.is_empty())
        }

        if let Some(tag) = present(&self.tag) {
            Some(Selector::Tag(tag))
        } else if let Some(id) = present(&self.id) {
            Some(Selector::Id(id))
        } else {
            present(&self.class).map(Selector::Class)
        }
    }
}

/// Exactly one way of locating nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Tag(&'a str),
    Id(&'a str),
    Class(&'a str),
}

impl Selector<'_> {
    /// Check a single node. Text nodes never match.
    pub fn matches(&self, node: &Node) -> bool {
        let Some(tag) = node.tag_name() else {
            return false;
        };

        match *self {
            Selector::Tag(wanted) => tag == wanted,
            Selector::Id(wanted) => node.attr("id") == Some(wanted),
            Selector::Class(wanted) => node
                .attr("class")
                .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == wanted)),
        }
    }
}

impl<'a> From<Selector<'a>> for Criterion {
    fn from(selector: Selector<'a>) -> Self {
        match selector {
            Selector::Tag(tag) => Criterion::new().tag(tag),
            Selector::Id(id) => Criterion::new().id(id),
            Selector::Class(class) => Criterion::new().class(class),
        }
    }
}

/// Find paths of all nodes matching the criterion
///
/// An empty criterion matches nothing.
pub fn search_paths(nodes: &[Node], criterion: &Criterion) -> Vec<NodePath> {
    let mut results = Vec::new();

    if let Some(selector) = criterion.applied() {
        let mut prefix = NodePath::new();
        collect(nodes, &selector, &mut prefix, &mut results);
    }

    results
}

/// Find all nodes matching the criterion, in search order
pub fn search<'a>(nodes: &'a [Node], criterion: &Criterion) -> Vec<&'a Node> {
    search_paths(nodes, criterion)
        .iter()
        .filter_map(|path| node_at(nodes, path))
        .collect()
}

fn collect(nodes: &[Node], selector: &Selector<'_>, prefix: &mut NodePath, out: &mut Vec<NodePath>) {
    for (idx, node) in nodes.iter().enumerate() {
        if selector.matches(node) {
            let mut path = prefix.clone();
            path.push(idx);
            out.push(path);
        }
    }

    // Descend into every child list, matched or not
    for (idx, node) in nodes.iter().enumerate() {
        if let Some(Content::Nodes(children)) = &node.content {
            prefix.push(idx);
            collect(children, selector, prefix, out);
            prefix.pop();
        }
    }
}

/// Resolve a path against a node list
pub fn node_at<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (&first, rest) = path.split_first()?;
    let mut node = nodes.get(first)?;

    for &idx in rest {
        node = node.children().get(idx)?;
    }

    Some(node)
}

/// Resolve a path against a node list (mutable)
pub fn node_at_mut<'a>(nodes: &'a mut [Node], path: &[usize]) -> Option<&'a mut Node> {
    let (&first, rest) = path.split_first()?;
    let mut node = nodes.get_mut(first)?;

    for &idx in rest {
        node = match &mut node.content {
            Some(Content::Nodes(children)) => children.get_mut(idx)?,
            _ => return None,
        };
    }

    Some(node)
}
