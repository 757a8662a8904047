//! Property map builder.
//!
//! Resolves each referenced collection once into a [`PropertyMap`], then walks
//! the configured groups to name custom properties and utility classes.

use std::collections::{HashMap, HashSet};

use design_tokens_store::{Collection, Token, TokenStore, TokenValue};

use crate::config::GroupConfig;
use crate::css::{Declaration, Rule};
use crate::fluid::FluidRange;
use crate::CodegenError;

/// Resolved `slug → CSS value` pairs for one collection, in token order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    /// Resolve every token of `collection`, fluid tokens included.
    pub fn resolve(collection: &Collection) -> Result<Self, CodegenError> {
        let mut entries = Vec::with_capacity(collection.len());
        for token in collection.tokens() {
            entries.push((token.slug.clone(), resolve_value(collection.key(), token)?));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, slug: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == slug)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, v)| (s.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve one token from `collection` to its CSS value.
pub fn resolve_value(collection: &str, token: &Token) -> Result<String, CodegenError> {
    match &token.value {
        TokenValue::Fluid(fluid) => FluidRange::from(fluid)
            .to_css(&fluid.unit)
            .map_err(|e| CodegenError::from_fluid(collection, &token.name, e)),
        other => Ok(other.as_css().unwrap_or_default()),
    }
}

/// Turns configured groups into declarations and rules.
#[derive(Debug)]
pub struct PropertyMapBuilder<'a> {
    config: &'a GroupConfig,
    maps: HashMap<String, PropertyMap>,
}

impl<'a> PropertyMapBuilder<'a> {
    /// Resolve every collection `config` references. Fails on the first
    /// collection that is missing from `store` or cannot be resolved.
    pub fn new(store: &TokenStore, config: &'a GroupConfig) -> Result<Self, CodegenError> {
        let mut maps = HashMap::new();
        for key in config.collection_keys() {
            let map = PropertyMap::resolve(store.collection(key)?)?;
            maps.insert(key.to_string(), map);
        }
        Ok(Self { config, maps })
    }

    pub fn property_map(&self, collection: &str) -> Option<&PropertyMap> {
        self.maps.get(collection)
    }

    fn map_for(&self, collection: &str) -> &PropertyMap {
        // `new` resolved every key the config mentions.
        &self.maps[collection]
    }

    /// `--{prefix}-{slug}: value` for every property group, in order.
    pub fn custom_properties(&self) -> Vec<Declaration> {
        let mut seen = HashSet::new();
        let mut declarations = Vec::new();

        for group in &self.config.property_groups {
            for (slug, value) in self.map_for(&group.collection).iter() {
                let property = format!("--{}-{slug}", group.prefix);
                if !seen.insert(property.clone()) {
                    tracing::warn!(
                        property = %property,
                        collection = %group.collection,
                        "custom property emitted more than once"
                    );
                }
                declarations.push(Declaration::new(property, value));
            }
        }

        declarations
    }

    /// `.{prefix}-{slug} { property: value }` for every utility group, in order.
    pub fn utility_rules(&self) -> Vec<Rule> {
        self.config
            .utility_groups
            .iter()
            .flat_map(|group| {
                self.map_for(&group.collection).iter().map(move |(slug, value)| {
                    Rule::new(format!(".{}-{slug}", group.prefix))
                        .with_declaration(Declaration::new(&group.property, value))
                })
            })
            .collect()
    }
}
