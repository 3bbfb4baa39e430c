//! Namespace resolution against on-disk translation resources.
//!
//! Resources live at `<locales_dir>/<language>/<namespace>.json`. Lookups
//! try each candidate namespace in order and stop at the first document that
//! contains the key. Missing files, invalid JSON and path misses all mean
//! "try the next namespace"; none of them is an error for the caller.

mod cache;
mod json_path;
mod provider;

pub use cache::TranslationCache;
pub use json_path::{resolve_dotted_path, stringify_leaf};
pub use provider::{FsResourceProvider, ModificationStamp, ResourceProvider};

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{DottedKey, Namespaces, ResolvedTranslation};

/// Session-scoped translation lookups with a modification-stamp cache.
///
/// `locales_dir` is `None` when the project has no resolvable locales
/// directory; every lookup then yields "no match" and no languages are listed.
#[derive(Debug)]
pub struct TranslationStore<P = FsResourceProvider> {
    provider: P,
    locales_dir: Option<PathBuf>,
    cache: TranslationCache,
}

impl TranslationStore<FsResourceProvider> {
    pub fn new(locales_dir: Option<PathBuf>) -> Self {
        Self::with_provider(FsResourceProvider, locales_dir)
    }
}

impl<P: ResourceProvider> TranslationStore<P> {
    pub fn with_provider(provider: P, locales_dir: Option<PathBuf>) -> Self {
        Self {
            provider,
            locales_dir,
            cache: TranslationCache::new(),
        }
    }

    pub fn locales_dir(&self) -> Option<&Path> {
        self.locales_dir.as_deref()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn resource_path(&self, language: &str, namespace: &str) -> Option<PathBuf> {
        Some(
            self.locales_dir
                .as_ref()?
                .join(language)
                .join(format!("{namespace}.json")),
        )
    }

    fn document(&self, language: &str, namespace: &str) -> Option<Arc<Map<String, Value>>> {
        let path = self.resource_path(language, namespace)?;
        self.cache.get_or_load(&self.provider, &path)
    }

    /// Look `key` up in a single namespace.
    pub fn resolve(&self, namespace: &str, key: &DottedKey, language: &str) -> Option<String> {
        let document = self.document(language, namespace)?;
        resolve_dotted_path(&document, key).map(stringify_leaf)
    }

    /// Try `namespaces` in order; the first namespace containing `key` wins.
    pub fn resolve_with_fallback(
        &self,
        namespaces: &Namespaces,
        key: &DottedKey,
        language: &str,
    ) -> ResolvedTranslation {
        for namespace in namespaces.iter() {
            if let Some(value) = self.resolve(namespace, key, language) {
                return ResolvedTranslation::found(namespace, value);
            }
            debug!(%key, namespace, language, "key not found, trying next namespace");
        }
        ResolvedTranslation::missing()
    }

    /// Sorted names of the language directories under the locales directory.
    pub fn list_languages(&self) -> Vec<String> {
        let Some(mut languages) = self
            .locales_dir
            .as_deref()
            .and_then(|dir| self.provider.list_directories(dir))
        else {
            return Vec::new();
        };
        languages.sort();
        languages
    }

    /// Candidate namespaces that contain `key` in the first listed language.
    pub fn find_namespaces_containing_key(
        &self,
        namespaces: &Namespaces,
        key: &DottedKey,
    ) -> Vec<String> {
        let Some(language) = self.list_languages().into_iter().next() else {
            return Vec::new();
        };
        namespaces
            .iter()
            .filter(|namespace| self.resolve(namespace, key, &language).is_some())
            .map(str::to_string)
            .collect()
    }

    /// Number of parsed documents currently cached.
    pub fn cached_documents(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached document.
    pub fn clear(&self) {
        self.cache.clear();
    }
}
