//! Output options.

use serde::{Deserialize, Serialize};

/// Serialization flavor of the converted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// HTML flavor: naked empty attributes, void elements without a slash
    #[default]
    Html,
    /// XML flavor: every childless element self-closes
    Xml,
}

impl OutputMode {
    /// Pick the mode from a `returnAsXML`-style flag.
    pub fn from_xml_flag(xml: bool) -> Self {
        if xml {
            OutputMode::Xml
        } else {
            OutputMode::Html
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Html => write!(f, "html"),
            OutputMode::Xml => write!(f, "xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xml_flag() {
        assert_eq!(OutputMode::from_xml_flag(true), OutputMode::Xml);
        assert_eq!(OutputMode::from_xml_flag(false), OutputMode::Html);
        assert_eq!(OutputMode::default(), OutputMode::Html);
    }

    #[test]
    fn test_display() {
        assert_eq!(OutputMode::Xml.to_string(), "xml");
    }
}
