//! # inky
//!
//! Converts email template markup built from simple custom tags (`row`,
//! `columns`, `button`, `callout` and friends) into the nested table HTML
//! that email clients render reliably.
//!
//! ## Quick Start
//!
//! ```
//! use inky::{convert, ConvertOptions};
//!
//! fn main() -> inky::Result<()> {
//!     let html = convert(
//!         r##"<container>This is a link to <a href="#">ZURB.com</a>.</container>"##,
//!         &ConvertOptions::default(),
//!     )?;
//!     assert!(html.starts_with(r#"<table align="center" class="container">"#));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Grid**: rows and columns with small/large sizing and expander cells
//! - **Components**: buttons, callouts, menus, spacers, wrappers, block grids
//! - **Raw regions**: `<raw>` content is passed through untouched
//! - **Two output modes**: HTML and XML serialization
//! - **Configurable tags**: rename any component's trigger tag
//! - **Parallel batches**: convert many documents with Rayon

pub mod components;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod raw;
pub mod render;

// Re-export commonly used types
pub use components::{ColumnLayout, ComponentKind, ComponentRegistry};
pub use convert::{ConvertOptions, Inky};
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, detect_format_from_str, is_markup_bytes,
    MarkupFlavor, MarkupFormat,
};
pub use error::{Error, Result};
pub use model::{Document, Element, NodeId};
pub use parser::{MarkupParser, ParseOptions};
pub use render::OutputMode;

use std::io::Read;
use std::path::Path;

/// Convert a template to table HTML.
///
/// # Arguments
///
/// * `input` - Template markup
/// * `options` - Conversion options
///
/// # Example
///
/// ```
/// use inky::{convert, ConvertOptions};
///
/// let html = convert("<button href=\"#\">Go</button>", &ConvertOptions::default()).unwrap();
/// assert!(html.contains("<a href=\"#\">Go</a>"));
/// ```
pub fn convert(input: &str, options: &ConvertOptions) -> Result<String> {
    Inky::from_options(options.clone())?.convert(input)
}

/// Convert a template given as bytes.
///
/// The bytes must be UTF-8 text without NUL bytes; a leading byte order
/// mark is dropped.
pub fn convert_bytes(data: &[u8], options: &ConvertOptions) -> Result<String> {
    let format = detect_format_from_bytes(data)?;
    log::debug!("detected {}", format);
    let text = std::str::from_utf8(detect::strip_bom(data))
        .map_err(|e| Error::Encoding(e.valid_up_to()))?;
    convert(text, options)
}

/// Convert a template file.
///
/// # Example
///
/// ```no_run
/// use inky::{convert_file, ConvertOptions};
///
/// let html = convert_file("email.inky", &ConvertOptions::default()).unwrap();
/// std::fs::write("email.html", html).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<String> {
    let data = std::fs::read(path)?;
    convert_bytes(&data, options)
}

/// Convert a template read from a reader.
pub fn convert_reader<R: Read>(mut reader: R, options: &ConvertOptions) -> Result<String> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    convert_bytes(&data, options)
}
