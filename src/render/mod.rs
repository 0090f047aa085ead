//! Rendering module for writing a document tree back to markup.

mod options;
mod serializer;

pub use options::OutputMode;
pub use serializer::{inner_html, outer_html, render, to_html, to_xml};
