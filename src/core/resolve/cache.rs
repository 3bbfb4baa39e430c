use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use dashmap::DashMap;
use serde_json::{Map, Value};
use tracing::debug;

use super::provider::{ModificationStamp, ResourceProvider};

#[derive(Debug, Clone)]
struct CachedDocument {
    stamp: ModificationStamp,
    root: Arc<Map<String, Value>>,
}

/// Parsed resource documents keyed by absolute path.
///
/// An entry is served only while the file still reports the stamp recorded
/// when it was loaded; otherwise the file is re-read on the calling thread
/// and the entry replaced. Entries are never evicted.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: DashMap<PathBuf, CachedDocument>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parsed document at `path`, or `None` if it is missing or invalid.
    pub fn get_or_load<P: ResourceProvider + ?Sized>(
        &self,
        provider: &P,
        path: &Path,
    ) -> Option<Arc<Map<String, Value>>> {
        let Some(stamp) = provider.modification_stamp(path) else {
            debug!(path = %path.display(), "resource missing");
            self.entries.remove(path);
            return None;
        };

        let cached = self
            .entries
            .get(path)
            .filter(|entry| entry.stamp == stamp)
            .map(|entry| Arc::clone(&entry.root));
        if let Some(root) = cached {
            debug!(path = %path.display(), "cache hit");
            return Some(root);
        }

        match provider.read_json_object(path) {
            Ok(root) => {
                debug!(path = %path.display(), "loaded resource");
                let root = Arc::new(root);
                self.entries.insert(
                    path.to_path_buf(),
                    CachedDocument {
                        stamp,
                        root: Arc::clone(&root),
                    },
                );
                Some(root)
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "unreadable resource");
                self.entries.remove(path);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
