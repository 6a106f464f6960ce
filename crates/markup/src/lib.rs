//! Markup Tree Library
//!
//! In-memory tree model for structured markup: build it, search it, mutate
//! it at located targets, serialize it to a single-line markup string.
//!
//! ## Core Design
//!
//! ```text
//! Node builders / JSON → Document (owns Vec<Node>) → search → NodePath → mutate
//!                                   ↓
//!                         MarkupSerializer → "<!DOCTYPE html><html>...</html>"
//! ```
//!
//! Data flows one way. Nothing is ever parsed back from markup, and nothing is
//! escaped: values are written verbatim.

pub mod document;
pub mod error;
pub mod search;
pub mod serializer;
pub mod types;
pub mod utils;

pub use document::{Document, IntoNodes};
pub use error::{MarkupError, Result};
pub use search::{Criterion, Selector};
pub use serializer::{MarkupSerializer, SerializerConfig, DOCTYPE};
pub use types::*;
