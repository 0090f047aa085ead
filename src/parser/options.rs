//! Loader options and configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how markup is loaded into a tree.
///
/// Field names follow the camelCase keys accepted in JSON configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Collapse runs of whitespace in text into a single space
    pub normalize_whitespace: bool,

    /// Decode character references in text and attribute values
    pub decode_entities: bool,

    /// Parse as XML: keep name case, no void elements, no raw-text elements
    pub xml_mode: bool,

    /// Honor `<tag/>` as an empty element even outside XML mode
    pub recognize_self_closing: bool,

    /// Lowercase tag and attribute names (ignored in XML mode)
    pub lower_case_tags: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable whitespace normalization.
    pub fn with_normalize_whitespace(mut self, normalize: bool) -> Self {
        self.normalize_whitespace = normalize;
        self
    }

    /// Enable or disable entity decoding.
    pub fn with_decode_entities(mut self, decode: bool) -> Self {
        self.decode_entities = decode;
        self
    }

    /// Enable or disable XML parsing mode.
    pub fn with_xml_mode(mut self, xml: bool) -> Self {
        self.xml_mode = xml;
        self
    }

    /// Enable or disable self-closing tag recognition.
    pub fn with_recognize_self_closing(mut self, recognize: bool) -> Self {
        self.recognize_self_closing = recognize;
        self
    }

    /// Enable or disable name lowercasing.
    pub fn with_lower_case_tags(mut self, lower: bool) -> Self {
        self.lower_case_tags = lower;
        self
    }

    /// Whether names should be lowercased under these options.
    pub(crate) fn lowercases_names(&self) -> bool {
        self.lower_case_tags && !self.xml_mode
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_whitespace: false,
            decode_entities: false,
            xml_mode: false,
            recognize_self_closing: true,
            lower_case_tags: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert!(!options.normalize_whitespace);
        assert!(!options.decode_entities);
        assert!(!options.xml_mode);
        assert!(options.recognize_self_closing);
        assert!(options.lowercases_names());
    }

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_decode_entities(true)
            .with_normalize_whitespace(true)
            .with_xml_mode(true);

        assert!(options.decode_entities);
        assert!(options.normalize_whitespace);
        assert!(!options.lowercases_names());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let options: ParseOptions =
            serde_json::from_str(r#"{"decodeEntities": true, "xmlMode": true}"#).unwrap();
        assert!(options.decode_entities);
        assert!(options.xml_mode);
        assert!(options.recognize_self_closing);
    }
}
