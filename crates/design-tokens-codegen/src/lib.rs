//! Design Token Code Generator
//!
//! Resolves loaded token collections into CSS: one `:root` rule of custom
//! properties and one single-declaration utility class per configured token.
//! Fluid tokens become viewport-interpolated `clamp()` expressions.
//!
//! ```text
//! TokenStore → PropertyMapBuilder → GeneratedStylesheet { root, utilities }
//! ```
//!
//! # Example
//!
//! ```
//! use design_tokens_codegen::{generate, GroupConfig, PropertyGroup};
//! use design_tokens_store::{MemorySource, TokenStore};
//!
//! let source = MemorySource::from_json(
//!     r##"{ "colors": { "items": [{ "name": "Primary", "value": "#fff" }] } }"##,
//! ).unwrap();
//! let config = GroupConfig::empty().with_property_group(PropertyGroup::new("colors", "color"));
//! let store = TokenStore::load(&source, config.collection_keys()).unwrap();
//!
//! let css = generate(&store, &config).unwrap();
//! assert_eq!(css.to_css(), ":root{--color-primary:#fff;}");
//! ```

pub mod config;
pub mod css;
pub mod fluid;
pub mod map;

pub use config::{GroupConfig, PropertyGroup, UtilityGroup};
pub use css::{CssDocument, Declaration, GeneratedStylesheet, Rule, StylesheetHost};
pub use fluid::{FluidError, FluidRange};
pub use map::{PropertyMap, PropertyMapBuilder};

use design_tokens_store::{TokenError, TokenSource, TokenStore};
use serde::Deserialize;

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodegenError {
    #[error(transparent)]
    Token(#[from] TokenError),

    /// A fluid token's viewport range is empty or inverted.
    #[error("Invalid viewport range for token '{token}' in collection '{collection}': min viewport {min_viewport} must be less than max viewport {max_viewport}")]
    InvalidViewportRange {
        collection: String,
        token: String,
        min_viewport: f64,
        max_viewport: f64,
    },
}

impl CodegenError {
    /// Attach the collection and token a fluid error was raised for.
    pub fn from_fluid(collection: &str, token: &str, err: FluidError) -> Self {
        match err {
            FluidError::InvalidViewportRange {
                min_viewport,
                max_viewport,
            } => Self::InvalidViewportRange {
                collection: collection.to_string(),
                token: token.to_string(),
                min_viewport,
                max_viewport,
            },
        }
    }
}

/// Options for [`transform`]. None are recognized yet; unknown fields are
/// ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[non_exhaustive]
pub struct Options {}

/// Resolve a single collection of `store`.
pub fn property_map(store: &TokenStore, collection: &str) -> Result<PropertyMap, CodegenError> {
    PropertyMap::resolve(store.collection(collection)?)
}

/// Generate the `:root` rule and utility rules for `config`.
pub fn generate(store: &TokenStore, config: &GroupConfig) -> Result<GeneratedStylesheet, CodegenError> {
    let builder = PropertyMapBuilder::new(store, config)?;
    Ok(GeneratedStylesheet::emit(&builder))
}

/// Load tokens from `source`, generate, and insert the result into `host`.
///
/// `host` is only touched once everything has been generated, so a failed
/// run leaves it as it was.
pub fn transform<H: StylesheetHost + ?Sized>(
    host: &mut H,
    source: &dyn TokenSource,
    config: &GroupConfig,
    _options: Option<&Options>,
) -> Result<(), CodegenError> {
    let store = TokenStore::load(source, config.collection_keys())?;
    let stylesheet = generate(&store, config)?;

    tracing::info!(
        custom_properties = stylesheet.root.declarations.len(),
        utilities = stylesheet.utilities.len(),
        "generated design token rules"
    );

    stylesheet.apply_to(host);
    Ok(())
}
