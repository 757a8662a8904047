//! Group tables that drive generation.
//!
//! Which collections become custom properties or utility classes, and under
//! what names, is data. Adding a group never touches the generator.

use serde::Deserialize;

/// A collection exposed as `--{prefix}-{slug}` custom properties on `:root`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyGroup {
    #[serde(alias = "key")]
    pub collection: String,
    pub prefix: String,
}

impl PropertyGroup {
    pub fn new(collection: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            prefix: prefix.into(),
        }
    }
}

/// A collection exposed as `.{prefix}-{slug} { {property}: value }` classes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UtilityGroup {
    #[serde(alias = "key")]
    pub collection: String,
    pub prefix: String,
    pub property: String,
}

impl UtilityGroup {
    pub fn new(
        collection: impl Into<String>,
        prefix: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            prefix: prefix.into(),
            property: property.into(),
        }
    }
}

/// Ordered property and utility groups.
///
/// Fields missing from a deserialized config keep the default tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupConfig {
    pub property_groups: Vec<PropertyGroup>,
    pub utility_groups: Vec<UtilityGroup>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            property_groups: vec![
                PropertyGroup::new("colors", "color"),
                PropertyGroup::new("spacing", "space"),
                PropertyGroup::new("fontSize", "size"),
                PropertyGroup::new("fontLeading", "leading"),
                PropertyGroup::new("fontFamily", "font"),
                PropertyGroup::new("fontWeight", "font"),
            ],
            utility_groups: vec![
                UtilityGroup::new("spacing", "flow-space", "--flow-space"),
                UtilityGroup::new("spacing", "region-space", "--region-space"),
                UtilityGroup::new("spacing", "gutter", "--gutter"),
                UtilityGroup::new("colors", "indent-color", "--indent-color"),
                UtilityGroup::new("fontSize", "text", "font-size"),
            ],
        }
    }
}

impl GroupConfig {
    /// A config with no groups at all.
    pub fn empty() -> Self {
        Self {
            property_groups: Vec::new(),
            utility_groups: Vec::new(),
        }
    }

    pub fn with_property_group(mut self, group: PropertyGroup) -> Self {
        self.property_groups.push(group);
        self
    }

    pub fn with_utility_group(mut self, group: UtilityGroup) -> Self {
        self.utility_groups.push(group);
        self
    }

    /// Every collection key referenced, in order of first mention.
    pub fn collection_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        let referenced = self
            .property_groups
            .iter()
            .map(|g| g.collection.as_str())
            .chain(self.utility_groups.iter().map(|g| g.collection.as_str()));
        for key in referenced {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}
