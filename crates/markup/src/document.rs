//! Document - the aggregate root of a markup tree
//!
//! Owns the top-level node list and exposes every mutation:
//! - Appending at the root or at located targets
//! - Title management
//! - Boilerplate head/body scaffolding
//! - Whole-document serialization
//!
//! Located mutations are find-then-mutate: search yields paths, then each
//! path is resolved mutably. Callers sharing one document across threads
//! must synchronize externally.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::search::{self, Criterion, Selector};
use crate::serializer::{MarkupSerializer, SerializerConfig};
use crate::types::*;

/// Anything `Document::append` accepts: one node or a list of them
pub trait IntoNodes {
    fn into_nodes(self) -> Vec<Node>;
}

impl IntoNodes for Node {
    fn into_nodes(self) -> Vec<Node> {
        vec![self]
    }
}

impl IntoNodes for Vec<Node> {
    fn into_nodes(self) -> Vec<Node> {
        self
    }
}

/// Markup document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Vec<Node>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document owning the given root list
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { root: nodes }
    }

    /// Build a document from a JSON array of nodes
    ///
    /// ```json
    /// [{ "type": "p", "attributes": { "id": "intro" }, "content": "hi" }]
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Top-level node list
    pub fn root_content(&self) -> &[Node] {
        &self.root
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.root
    }

    /// Append one node, or a whole list, to the root
    pub fn append(&mut self, nodes: impl IntoNodes) -> &mut Self {
        self.root.extend(nodes.into_nodes());
        self
    }

    /// Append `element` to every node the selector locates
    ///
    /// Each target's content is coerced per `Node::append_child`. No match
    /// leaves the document unchanged.
    pub fn append_to_target(&mut self, element: Node, selector: Selector<'_>) -> &mut Self {
        let paths = search::search_paths(&self.root, &Criterion::from(selector));
        tracing::debug!(?selector, matches = paths.len(), "append to target");

        // Appending only grows a target's own child list, so the remaining
        // paths stay valid.
        for path in &paths {
            if let Some(target) = search::node_at_mut(&mut self.root, path) {
                target.append_child(element.clone());
            }
        }

        self
    }

    pub fn append_to_class(&mut self, class: &str, element: Node) -> &mut Self {
        self.append_to_target(element, Selector::Class(class))
    }

    pub fn append_to_id(&mut self, id: &str, element: Node) -> &mut Self {
        self.append_to_target(element, Selector::Id(id))
    }

    pub fn append_to_type(&mut self, tag: &str, element: Node) -> &mut Self {
        self.append_to_target(element, Selector::Tag(tag))
    }

    /// Search the whole tree; see `search::search`
    pub fn search(&self, criterion: &Criterion) -> Vec<&Node> {
        search::search(&self.root, criterion)
    }

    pub fn find_by_type(&self, tag: &str) -> Vec<&Node> {
        self.search(&Criterion::new().tag(tag))
    }

    pub fn find_by_id(&self, id: &str) -> Vec<&Node> {
        self.search(&Criterion::new().id(id))
    }

    pub fn find_by_class_name(&self, class: &str) -> Vec<&Node> {
        self.search(&Criterion::new().class(class))
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        search::node_at(&self.root, path)
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        search::node_at_mut(&mut self.root, path)
    }

    /// Set the document title
    ///
    /// Overwrites the first `title` found. Without one, a `title` goes into
    /// the first `head`; without a `head`, a new `head` holding the title is
    /// appended to the root.
    pub fn set_title(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();

        let titles = search::search_paths(&self.root, &Criterion::new().tag("title"));
        if let Some(title) = titles.first().and_then(|p| search::node_at_mut(&mut self.root, p)) {
            tracing::debug!("title overwritten");
            title.content = Some(Content::Text(text));
            return self;
        }

        let title = Node::element("title").with_text(text);

        let heads = search::search_paths(&self.root, &Criterion::new().tag("head"));
        if let Some(head) = heads.first().and_then(|p| search::node_at_mut(&mut self.root, p)) {
            tracing::debug!("title added to existing head");
            head.append_child(title);
            return self;
        }

        tracing::debug!("head created for title");
        self.root.push(Node::element("head").with_child(title));
        self
    }

    /// Wrap the current root in boilerplate `head` + `body`
    ///
    /// Not idempotent: each call nests the previous root one level deeper.
    pub fn scaffold(&mut self) -> &mut Self {
        let previous = std::mem::take(&mut self.root);
        tracing::debug!(wrapped = previous.len(), "scaffold");

        let head = Node::element("head")
            .with_child(Node::element("meta").with_attr("charset", "utf-8"))
            .with_child(
                Node::element("meta")
                    .with_attr("name", "viewport")
                    .with_attr("content", "width=device-width, initial-scale=1"),
            );
        let body = Node::element("body").with_children(previous);

        self.root = vec![head, body];
        self
    }

    /// Serialize the document to a single-line markup string
    pub fn serialize(&self, config: &SerializerConfig) -> String {
        MarkupSerializer::with_config(config.clone()).serialize_document(&self.root)
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self::from_nodes(nodes)
    }
}
