//! Validated token collections.

use std::collections::HashMap;

use crate::token::{CollectionDocument, Token, DEFAULT_UNIT};
use crate::TokenError;

/// A named, ordered set of tokens whose slugs are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    key: String,
    title: Option<String>,
    tokens: Vec<Token>,
}

impl Collection {
    /// Validate a raw document loaded for `key`.
    ///
    /// Fails on the first record whose slug was already taken by an earlier
    /// record; nothing is overwritten.
    pub fn from_document(key: &str, doc: CollectionDocument) -> Result<Self, TokenError> {
        let unit = doc.unit.as_deref().unwrap_or(DEFAULT_UNIT);
        let mut seen: HashMap<String, String> = HashMap::with_capacity(doc.items.len());
        let mut tokens = Vec::with_capacity(doc.items.len());

        for record in doc.items {
            let token = Token::from_record(key, record, unit, doc.viewports)?;

            if let Some(first) = seen.get(&token.slug) {
                return Err(TokenError::SlugCollision {
                    collection: key.to_string(),
                    first: first.clone(),
                    second: token.name,
                    slug: token.slug,
                });
            }
            seen.insert(token.slug.clone(), token.name.clone());
            tokens.push(token);
        }

        Ok(Self {
            key: key.to_string(),
            title: doc.title,
            tokens,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Look up a token by slug.
    pub fn get(&self, slug: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
