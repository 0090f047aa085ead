//! Conversion options and the reusable converter.
//!
//! # Example
//!
//! ```
//! use inky::convert::{ConvertOptions, Inky};
//!
//! fn main() -> inky::Result<()> {
//!     let inky = Inky::from_options(ConvertOptions::new().with_column_count(16))?;
//!     let html = inky.convert("<row><columns>Hi</columns></row>")?;
//!     assert!(html.contains("large-16"));
//!     Ok(())
//! }
//! ```

mod driver;

use crate::components::{strip_markers, ComponentKind, ComponentRegistry};
use crate::detect::detect_format_from_str;
use crate::error::{Error, Result};
use crate::parser::{MarkupParser, ParseOptions};
use crate::raw;
use crate::render::{render, OutputMode};
use driver::Rewriter;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default number of grid units in a row.
pub const DEFAULT_COLUMN_COUNT: u32 = 12;

/// Default cap on rewrite loop substitutions.
pub const DEFAULT_MAX_ITERATIONS: usize = 50_000;

/// Options for a conversion.
///
/// Deserializes from the camelCase keys used by JSON configuration files:
///
/// ```json
/// { "columnCount": 16, "returnAsXML": true, "components": { "columns": "col" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Tag overrides per component
    pub components: BTreeMap<ComponentKind, String>,

    /// Grid units in a full-width row
    pub column_count: u32,

    /// Serialize the result in XML mode
    #[serde(rename = "returnAsXML")]
    pub return_as_xml: bool,

    /// Loader and serializer options
    #[serde(alias = "cheerio")]
    pub parser: ParseOptions,

    /// Cap on rewrite loop substitutions
    pub max_iterations: usize,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different tag for a component.
    pub fn with_component(mut self, kind: ComponentKind, tag: impl Into<String>) -> Self {
        self.components.insert(kind, tag.into());
        self
    }

    /// Set the number of grid units in a row.
    pub fn with_column_count(mut self, count: u32) -> Self {
        self.column_count = count;
        self
    }

    /// Enable or disable XML output.
    pub fn with_xml(mut self, xml: bool) -> Self {
        self.return_as_xml = xml;
        self
    }

    /// Set loader options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parser = options;
        self
    }

    /// Set the rewrite loop cap.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Output mode selected by these options.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_xml_flag(self.return_as_xml)
    }

    /// Load options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check option values.
    pub fn validate(&self) -> Result<()> {
        if self.column_count == 0 {
            return Err(Error::InvalidOption(
                "columnCount must be greater than zero".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidOption(
                "maxIterations must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            components: BTreeMap::new(),
            column_count: DEFAULT_COLUMN_COUNT,
            return_as_xml: false,
            parser: ParseOptions::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Reusable converter.
///
/// Options are validated and the component registry resolved once at
/// construction. The converter is immutable afterwards and can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct Inky {
    options: ConvertOptions,
    registry: ComponentRegistry,
    parser: MarkupParser,
}

impl Inky {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
            registry: ComponentRegistry::new(),
            parser: MarkupParser::default(),
        }
    }

    /// Create a converter from options.
    pub fn from_options(options: ConvertOptions) -> Result<Self> {
        options.validate()?;
        let registry = ComponentRegistry::with_overrides(&options.components)?;
        let parser = MarkupParser::new(options.parser.clone());
        Ok(Self {
            options,
            registry,
            parser,
        })
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get the resolved component registry.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Convert a document.
    pub fn convert(&self, input: &str) -> Result<String> {
        log::debug!(
            "converting {} bytes ({})",
            input.len(),
            detect_format_from_str(input)
        );

        let (working, regions) = raw::extract(input);
        let mut doc = self.parser.parse(&working);

        let rewriter = Rewriter::new(
            &self.registry,
            &self.parser,
            self.options.column_count,
            self.options.max_iterations,
        );
        let iterations = rewriter.run(&mut doc)?;
        let stripped = strip_markers(&mut doc);
        log::debug!(
            "fixpoint reached after {} substitutions ({} center markers, {} raw regions)",
            iterations,
            stripped,
            regions.len()
        );

        let output = render(&doc, &self.options.parser, self.options.output_mode());
        Ok(regions.reinject(&output))
    }

    /// Convert many documents in parallel.
    ///
    /// Results are returned in input order.
    pub fn convert_all<S>(&self, inputs: &[S]) -> Vec<Result<String>>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.convert(input.as_ref()))
            .collect()
    }
}

impl Default for Inky {
    fn default() -> Self {
        Self::new()
    }
}
