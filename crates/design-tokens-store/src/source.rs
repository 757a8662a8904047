//! Token sources.
//!
//! A source hands back the raw document for a collection key. Sources do no
//! validation; that happens in [`Collection::from_document`](crate::Collection::from_document).

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::token::CollectionDocument;
use crate::TokenError;

/// Default collection key → file name table for a token directory.
pub const DEFAULT_FILES: &[(&str, &str)] = &[
    ("colors", "colors.json"),
    ("spacing", "spacing.json"),
    ("fontSize", "text-sizes.json"),
    ("fontLeading", "text-leading.json"),
    ("fontFamily", "fonts.json"),
    ("fontWeight", "text-weights.json"),
];

/// Somewhere collections can be read from.
pub trait TokenSource {
    /// Read the whole document for `key`.
    fn read(&self, key: &str) -> Result<CollectionDocument, TokenError>;
}

/// A directory of JSON token files.
///
/// Keys missing from the file table fall back to `<key>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    files: BTreeMap<String, String>,
}

impl DirectorySource {
    /// Source rooted at `root` using [`DEFAULT_FILES`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: DEFAULT_FILES
                .iter()
                .map(|(k, f)| (k.to_string(), f.to_string()))
                .collect(),
        }
    }

    /// Map `key` to `file` (relative to the root), replacing any default.
    pub fn with_file(mut self, key: impl Into<String>, file: impl Into<String>) -> Self {
        self.files.insert(key.into(), file.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the document for `key` is read from.
    pub fn path_for(&self, key: &str) -> PathBuf {
        match self.files.get(key) {
            Some(file) => self.root.join(file),
            None => self.root.join(format!("{key}.json")),
        }
    }
}

impl TokenSource for DirectorySource {
    fn read(&self, key: &str) -> Result<CollectionDocument, TokenError> {
        let path = self.path_for(key);
        let text = std::fs::read_to_string(&path).map_err(|e| {
            TokenError::missing_source(key, format!("failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            TokenError::missing_source(key, format!("invalid token file {}: {e}", path.display()))
        })
    }
}

/// Documents held in memory, keyed by collection.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, CollectionDocument>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, doc: CollectionDocument) {
        self.documents.insert(key.into(), doc);
    }

    pub fn with_collection(mut self, key: impl Into<String>, doc: CollectionDocument) -> Self {
        self.insert(key, doc);
        self
    }

    /// Parse a JSON object of `key → document`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let documents: HashMap<String, CollectionDocument> = serde_json::from_str(json)?;
        Ok(Self { documents })
    }
}

impl FromIterator<(String, CollectionDocument)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (String, CollectionDocument)>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl TokenSource for MemorySource {
    fn read(&self, key: &str) -> Result<CollectionDocument, TokenError> {
        self.documents
            .get(key)
            .cloned()
            .ok_or_else(|| TokenError::missing_source(key, "no such collection"))
    }
}
