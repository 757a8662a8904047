use crate::collection::Collection;
use crate::source::TokenSource;
use crate::TokenError;

/// Every collection a run needs, loaded and validated up front.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    collections: Vec<Collection>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `keys` from `source`. Repeated keys are read once.
    ///
    /// Loading is total: the first collection that fails aborts the whole
    /// store, so callers never see a partial set.
    pub fn load<'a, I>(source: &dyn TokenSource, keys: I) -> Result<Self, TokenError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut store = Self::new();
        for key in keys {
            if store.contains(key) {
                continue;
            }
            let collection = Collection::from_document(key, source.read(key)?)?;
            tracing::debug!(
                collection = key,
                tokens = collection.len(),
                "loaded token collection"
            );
            store.insert(collection);
        }
        Ok(store)
    }

    /// Add a collection, replacing one with the same key.
    pub fn insert(&mut self, collection: Collection) {
        match self
            .collections
            .iter_mut()
            .find(|c| c.key() == collection.key())
        {
            Some(existing) => *existing = collection,
            None => self.collections.push(collection),
        }
    }

    /// The collection loaded for `key`.
    pub fn collection(&self, key: &str) -> Result<&Collection, TokenError> {
        self.collections
            .iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| TokenError::missing_source(key, "collection was not loaded"))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.collections.iter().any(|c| c.key() == key)
    }

    /// Keys in load order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(|c| c.key())
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
