//! Document tracking for the HTTP Status Helper language server.
//!
//! Keeps the text and language id of every open document, keyed by
//! normalized URI. Backed by DashMap so hover requests and lifecycle
//! notifications can touch the store concurrently without a lock.

use dashmap::DashMap;
use lsp_types::Url;
use std::sync::Arc;

/// Error types for document operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Document not found in the store
    NotFound,
    /// Invalid URI format or normalization failed
    InvalidUri(String),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::NotFound => write!(f, "Document not found"),
            DocumentError::InvalidUri(msg) => write!(f, "Invalid URI: {}", msg),
        }
    }
}

impl std::error::Error for DocumentError {}

/// State kept per open document.
///
/// The language id arrives once with `didOpen` and survives text updates;
/// the filetype filter needs it on every hover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub language_id: String,
    pub text: String,
}

/// Thread-safe store of open documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Arc<DashMap<String, Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(DashMap::new()),
        }
    }

    /// Normalizes a URI to a consistent string key.
    ///
    /// file:// URIs get platform-independent path separators; everything
    /// else is used as-is.
    fn normalize_uri(uri: &Url) -> Result<String, DocumentError> {
        let uri_str = uri.as_str();

        if uri_str.is_empty() {
            return Err(DocumentError::InvalidUri("Empty URI".to_string()));
        }

        if uri.scheme() == "file" {
            match uri.to_file_path() {
                Ok(path) => {
                    let normalized_path = path.to_string_lossy().replace('\\', "/");
                    Ok(format!("file://{}", normalized_path))
                }
                Err(_) => Ok(uri_str.to_string()),
            }
        } else {
            Ok(uri_str.to_string())
        }
    }

    /// Inserts a document, replacing any previous entry for the same URI.
    pub fn insert(
        &self,
        uri: Url,
        language_id: String,
        text: String,
    ) -> Result<(), DocumentError> {
        let key = Self::normalize_uri(&uri)?;
        self.documents.insert(key, Document { language_id, text });
        Ok(())
    }

    /// Replaces the text of an existing document, keeping its language id.
    pub fn update_text(&self, uri: Url, text: String) -> Result<(), DocumentError> {
        let key = Self::normalize_uri(&uri)?;

        match self.documents.get_mut(&key) {
            Some(mut entry) => {
                entry.text = text;
                Ok(())
            }
            None => Err(DocumentError::NotFound),
        }
    }

    /// Fetches a snapshot of a document.
    pub fn get(&self, uri: &Url) -> Option<Document> {
        let key = Self::normalize_uri(uri).ok()?;
        self.documents.get(&key).map(|entry| entry.value().clone())
    }

    /// Removes a document, returning it if it was present.
    pub fn remove(&self, uri: &Url) -> Option<Document> {
        let key = Self::normalize_uri(uri).ok()?;
        self.documents.remove(&key).map(|(_, doc)| doc)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Drops every tracked document. Called on shutdown.
    pub fn clear(&self) {
        self.documents.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn doc(language_id: &str, text: &str) -> Document {
        Document {
            language_id: language_id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = DocumentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn insert_and_get() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///notes.md").unwrap();

        store
            .insert(uri.clone(), "markdown".to_string(), "returns 404".to_string())
            .unwrap();

        assert_eq!(store.get(&uri), Some(doc("markdown", "returns 404")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_replaces_existing() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///notes.md").unwrap();

        store
            .insert(uri.clone(), "markdown".to_string(), "old".to_string())
            .unwrap();
        store
            .insert(uri.clone(), "plaintext".to_string(), "new".to_string())
            .unwrap();

        assert_eq!(store.get(&uri), Some(doc("plaintext", "new")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_text_keeps_language_id() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///api.py").unwrap();

        store
            .insert(uri.clone(), "python".to_string(), "v1".to_string())
            .unwrap();
        store.update_text(uri.clone(), "v2".to_string()).unwrap();

        assert_eq!(store.get(&uri), Some(doc("python", "v2")));
    }

    #[test]
    fn update_text_on_missing_document() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///missing.py").unwrap();

        let result = store.update_text(uri, "text".to_string());
        assert!(matches!(result, Err(DocumentError::NotFound)));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_document() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///notes.md").unwrap();

        store
            .insert(uri.clone(), "markdown".to_string(), "text".to_string())
            .unwrap();

        assert_eq!(store.remove(&uri), Some(doc("markdown", "text")));
        assert!(store.is_empty());
        assert_eq!(store.remove(&uri), None);
    }

    #[test]
    fn clear_drops_everything() {
        let store = DocumentStore::new();
        let uri1 = Url::parse("file:///a.md").unwrap();
        let uri2 = Url::parse("file:///b.md").unwrap();

        store
            .insert(uri1, "markdown".to_string(), "a".to_string())
            .unwrap();
        store
            .insert(uri2, "markdown".to_string(), "b".to_string())
            .unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn non_file_uris_are_accepted() {
        let store = DocumentStore::new();
        let uri = Url::parse("untitled:Untitled-1").unwrap();

        store
            .insert(uri.clone(), "plaintext".to_string(), "200".to_string())
            .unwrap();
        assert!(store.get(&uri).is_some());
    }

    #[test]
    fn concurrent_inserts() {
        let store = Arc::new(DocumentStore::new());
        let mut handles = vec![];

        for i in 0..10 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                let uri = Url::parse(&format!("file:///doc{}.md", i)).unwrap();
                store
                    .insert(uri, "markdown".to_string(), format!("doc {}", i))
                    .unwrap();
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 10);
    }
}
