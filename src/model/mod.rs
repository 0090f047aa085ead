//! Document tree types.
//!
//! The tree is an arena of nodes addressed by [`NodeId`]. The rewrite loop
//! mutates it in place: matched elements are replaced by freshly parsed
//! fragments, and the center component edits attributes directly.

mod document;
mod node;

pub use document::{Descendants, Document};
pub use node::{Attributes, Element, Node, NodeData, NodeId};
