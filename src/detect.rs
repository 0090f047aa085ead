//! Input validation and markup flavor detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// How many leading bytes are inspected when sniffing a file.
const SNIFF_LEN: usize = 1024;

/// Flavor of markup found at the start of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupFlavor {
    /// Starts with an `<?xml` prolog
    Xml,
    /// Doctype mentions XHTML
    Xhtml,
    /// Any other doctype, typically `<!doctype html>`
    Html5,
    /// No prolog or doctype; a template fragment
    Fragment,
}

impl MarkupFlavor {
    /// Whether XML serialization is the natural output for this flavor.
    pub fn prefers_xml(self) -> bool {
        matches!(self, MarkupFlavor::Xml | MarkupFlavor::Xhtml)
    }
}

impl std::fmt::Display for MarkupFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MarkupFlavor::Xml => "XML",
            MarkupFlavor::Xhtml => "XHTML",
            MarkupFlavor::Html5 => "HTML5",
            MarkupFlavor::Fragment => "fragment",
        };
        f.write_str(name)
    }
}

/// Markup format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupFormat {
    /// Detected flavor
    pub flavor: MarkupFlavor,
    /// Doctype declaration text, without the surrounding `<!` and `>`
    pub doctype: Option<String>,
}

impl std::fmt::Display for MarkupFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.doctype {
            Some(doctype) => write!(f, "{} ({})", self.flavor, doctype),
            None => write!(f, "{}", self.flavor),
        }
    }
}

/// Detect the markup format of a file.
///
/// Only the first kilobyte is read.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<MarkupFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file).take(SNIFF_LEN as u64);
    let mut header = Vec::with_capacity(SNIFF_LEN);
    reader.read_to_end(&mut header)?;
    detect_format_from_bytes(truncate_to_char_boundary(&header))
}

/// Validate bytes as markup and detect their format.
///
/// # Returns
/// * `Ok(MarkupFormat)` for UTF-8 text without NUL bytes
/// * `Err(Error::BinaryInput)` if a NUL byte is found
/// * `Err(Error::Encoding)` if the bytes are not valid UTF-8
pub fn detect_format_from_bytes(data: &[u8]) -> Result<MarkupFormat> {
    if let Some(offset) = memchr::memchr(0, data) {
        return Err(Error::BinaryInput(offset));
    }
    let text = std::str::from_utf8(strip_bom(data))
        .map_err(|e| Error::Encoding(e.valid_up_to()))?;
    Ok(detect_format_from_str(text))
}

/// Detect the format of markup text.
pub fn detect_format_from_str(text: &str) -> MarkupFormat {
    let head = text.trim_start_matches('\u{FEFF}').trim_start();

    let mut flavor = MarkupFlavor::Fragment;
    let mut rest = head;
    if starts_with_ignore_case(head, "<?xml") {
        flavor = MarkupFlavor::Xml;
        rest = head
            .find("?>")
            .map_or("", |end| head[end + 2..].trim_start());
    }

    // Comments may sit between the prolog and the doctype.
    while let Some(after) = rest.strip_prefix("<!--") {
        rest = after.find("-->").map_or("", |end| after[end + 3..].trim_start());
    }

    let doctype = if starts_with_ignore_case(rest, "<!doctype") {
        rest.find('>').map(|end| rest[2..end].trim().to_string())
    } else {
        None
    };

    if let Some(doctype) = &doctype {
        if doctype.to_ascii_lowercase().contains("xhtml") {
            flavor = MarkupFlavor::Xhtml;
        } else if flavor == MarkupFlavor::Fragment {
            flavor = MarkupFlavor::Html5;
        }
    }

    MarkupFormat { flavor, doctype }
}

/// Check if bytes are acceptable markup input.
pub fn is_markup_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Remove a leading UTF-8 byte order mark.
pub fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Drop a multi-byte sequence cut off at the end of a sniffed header.
fn truncate_to_char_boundary(data: &[u8]) -> &[u8] {
    match std::str::from_utf8(data) {
        Ok(_) => data,
        Err(e) if e.error_len().is_none() => &data[..e.valid_up_to()],
        Err(_) => data,
    }
}
