//! Raw region extraction and reinjection.
//!
//! Content between `<raw>` and `</raw>` must reach the output byte for byte.
//! Before loading, each region is cut out and replaced by a `###RAW<i>###`
//! placeholder; after serialization the placeholders are swapped back.
//!
//! Known limitation: input that already contains a literal `###RAW<i>###`
//! token is indistinguishable from a placeholder and will be overwritten on
//! reinjection.

use std::sync::OnceLock;

use regex::Regex;

fn raw_regex() -> &'static Regex {
    static RAW: OnceLock<Regex> = OnceLock::new();
    RAW.get_or_init(|| Regex::new(r"(?is)<raw>(.*?)</raw>").expect("valid raw pattern"))
}

fn open_tag_regex() -> &'static Regex {
    static OPEN: OnceLock<Regex> = OnceLock::new();
    OPEN.get_or_init(|| Regex::new(r"(?i)<raw>").expect("valid raw open pattern"))
}

/// Build the placeholder token for a region index.
pub fn placeholder(index: usize) -> String {
    format!("###RAW{}###", index)
}

/// Extracted raw regions, indexed by placeholder number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRegions {
    items: Vec<String>,
}

impl RawRegions {
    /// Number of extracted regions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the content of a region.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Iterate over region contents in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Replace each placeholder with its region content.
    ///
    /// Only the first occurrence of each placeholder is replaced.
    pub fn reinject(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (index, content) in self.items.iter().enumerate() {
            let token = placeholder(index);
            if result.contains(&token) {
                result = result.replacen(&token, content, 1);
            } else {
                log::warn!("placeholder {} missing from output; raw content dropped", token);
            }
        }
        result
    }
}

/// Cut every raw region out of `text`.
///
/// Regions are taken one at a time, always the first remaining match, so
/// numbering follows left-to-right order. An opening tag without a closing
/// one is left in place.
pub fn extract(text: &str) -> (String, RawRegions) {
    let mut working = text.to_string();
    let mut regions = RawRegions::default();

    loop {
        let found = raw_regex()
            .captures(&working)
            .and_then(|c| Some((c.get(0)?.range(), c.get(1)?.as_str().to_string())));
        let Some((range, content)) = found else {
            break;
        };
        regions.items.push(content);
        let token = placeholder(regions.items.len() - 1);
        working.replace_range(range, &token);
    }

    if open_tag_regex().is_match(&working) {
        log::warn!("unterminated <raw> tag left in place");
    }

    (working, regions)
}
