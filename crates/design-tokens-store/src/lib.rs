//! Design Token Store
//!
//! Loads design-token collections (colors, spacing, type scale, font metadata)
//! from a token source, normalizes display names into slugs, and flattens
//! composite values. Every collection is read in full before it is handed on;
//! a collection that cannot be loaded or whose names collide aborts the run.
//!
//! # Example
//!
//! ```
//! use design_tokens_store::{slugify, Collection, CollectionDocument};
//!
//! let doc: CollectionDocument = serde_json::from_str(
//!     r##"{ "items": [{ "name": "Primary Color", "value": "#fff" }] }"##,
//! ).unwrap();
//! let colors = Collection::from_document("colors", doc).unwrap();
//! assert_eq!(colors.tokens()[0].slug, slugify("primary color"));
//! ```

pub mod collection;
pub mod slug;
pub mod source;
pub mod store;
pub mod token;

pub use collection::Collection;
pub use slug::slugify;
pub use source::{DirectorySource, MemorySource, TokenSource, DEFAULT_FILES};
pub use store::TokenStore;
pub use token::{
    format_number, CollectionDocument, FluidToken, RecordValue, Token, TokenRecord, TokenValue,
    Viewports, DEFAULT_UNIT,
};

/// Token loading error. Every variant names the offending collection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    /// Two display names in one collection normalize to the same slug.
    #[error("Slug collision in collection '{collection}': '{first}' and '{second}' both normalize to '{slug}'")]
    SlugCollision {
        collection: String,
        first: String,
        second: String,
        slug: String,
    },

    /// A configured collection could not be read or parsed.
    #[error("Missing token source for collection '{collection}': {reason}")]
    MissingTokenSource { collection: String, reason: String },

    /// A record is missing the fields needed to resolve it.
    #[error("Malformed token '{token}' in collection '{collection}': {message}")]
    MalformedToken {
        collection: String,
        token: String,
        message: String,
    },
}

impl TokenError {
    pub fn missing_source(collection: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingTokenSource {
            collection: collection.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(
        collection: impl Into<String>,
        token: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedToken {
            collection: collection.into(),
            token: token.into(),
            message: message.into(),
        }
    }

    /// Key of the collection the error was raised for.
    pub fn collection(&self) -> &str {
        match self {
            Self::SlugCollision { collection, .. }
            | Self::MissingTokenSource { collection, .. }
            | Self::MalformedToken { collection, .. } => collection,
        }
    }
}
