//! Component registry: which tag triggers which component.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The closed set of components the expander knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Button,
    Row,
    #[serde(alias = "column")]
    Columns,
    Container,
    Callout,
    Inky,
    #[serde(alias = "block-grid")]
    BlockGrid,
    Menu,
    #[serde(alias = "menu-item", alias = "item")]
    MenuItem,
    Center,
    Spacer,
    Wrapper,
}

impl ComponentKind {
    /// All components, in registry order.
    pub const ALL: [ComponentKind; 12] = [
        ComponentKind::Button,
        ComponentKind::Row,
        ComponentKind::Columns,
        ComponentKind::Container,
        ComponentKind::Callout,
        ComponentKind::Inky,
        ComponentKind::BlockGrid,
        ComponentKind::Menu,
        ComponentKind::MenuItem,
        ComponentKind::Center,
        ComponentKind::Spacer,
        ComponentKind::Wrapper,
    ];

    /// Logical component name, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Row => "row",
            ComponentKind::Columns => "columns",
            ComponentKind::Container => "container",
            ComponentKind::Callout => "callout",
            ComponentKind::Inky => "inky",
            ComponentKind::BlockGrid => "blockGrid",
            ComponentKind::Menu => "menu",
            ComponentKind::MenuItem => "menuItem",
            ComponentKind::Center => "center",
            ComponentKind::Spacer => "spacer",
            ComponentKind::Wrapper => "wrapper",
        }
    }

    /// Tag that triggers this component when nothing is overridden.
    pub fn default_tag(self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Row => "row",
            ComponentKind::Columns => "columns",
            ComponentKind::Container => "container",
            ComponentKind::Callout => "callout",
            ComponentKind::Inky => "inky",
            ComponentKind::BlockGrid => "block-grid",
            ComponentKind::Menu => "menu",
            ComponentKind::MenuItem => "item",
            ComponentKind::Center => "center",
            ComponentKind::Spacer => "spacer",
            ComponentKind::Wrapper => "wrapper",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "button" => ComponentKind::Button,
            "row" => ComponentKind::Row,
            "columns" | "column" => ComponentKind::Columns,
            "container" => ComponentKind::Container,
            "callout" => ComponentKind::Callout,
            "inky" => ComponentKind::Inky,
            "blockgrid" | "block-grid" => ComponentKind::BlockGrid,
            "menu" => ComponentKind::Menu,
            "menuitem" | "menu-item" | "item" => ComponentKind::MenuItem,
            "center" => ComponentKind::Center,
            "spacer" => ComponentKind::Spacer,
            "wrapper" => ComponentKind::Wrapper,
            _ => return Err(Error::UnknownComponent(s.to_string())),
        };
        Ok(kind)
    }
}

/// Mapping from component to trigger tag.
///
/// Every component always has exactly one tag. Overrides replace the
/// default tag of a component; they never add a second one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRegistry {
    tags: BTreeMap<ComponentKind, String>,
}

impl ComponentRegistry {
    /// Create a registry with the built-in tags.
    pub fn new() -> Self {
        let tags = ComponentKind::ALL
            .iter()
            .map(|&kind| (kind, kind.default_tag().to_string()))
            .collect();
        Self { tags }
    }

    /// Create a registry with overrides applied on top of the defaults.
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a ComponentKind, &'a String)>,
    {
        let mut registry = Self::new();
        for (&kind, tag) in overrides {
            registry.set_tag(kind, tag)?;
        }
        Ok(registry)
    }

    /// Change the tag of a component.
    ///
    /// Tags are matched against lowercased element names, so they are
    /// stored lowercased.
    pub fn set_tag(&mut self, kind: ComponentKind, tag: &str) -> Result<()> {
        let tag = tag.trim();
        if tag.is_empty() || tag.contains(|c: char| c.is_whitespace() || c == '<' || c == '>') {
            return Err(Error::InvalidOption(format!(
                "invalid tag {:?} for component {}",
                tag, kind
            )));
        }
        self.tags.insert(kind, tag.to_ascii_lowercase());
        Ok(())
    }

    /// Get the tag of a component.
    pub fn tag(&self, kind: ComponentKind) -> &str {
        self.tags
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_tag())
    }

    /// Find the component a tag triggers.
    ///
    /// When several components share a tag, the first in registry order wins.
    pub fn kind_for_tag(&self, tag: &str) -> Option<ComponentKind> {
        self.tags
            .iter()
            .find(|(_, t)| t.eq_ignore_ascii_case(tag))
            .map(|(&kind, _)| kind)
    }

    /// Check if a tag triggers any component.
    pub fn is_trigger(&self, tag: &str) -> bool {
        self.kind_for_tag(tag).is_some()
    }

    /// Iterate over `(component, tag)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, &str)> {
        self.tags.iter().map(|(&kind, tag)| (kind, tag.as_str()))
    }

    /// All trigger tags, in registry order.
    pub fn tags(&self) -> Vec<&str> {
        self.tags.values().map(String::as_str).collect()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
