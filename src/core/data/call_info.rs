//! Parsed call-site data: dotted keys, namespace candidates and `CallInfo`.

use std::fmt;

use serde::Serialize;

use super::source::SourceSpan;

/// A non-empty dotted translation key such as `greeting.hello`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DottedKey(String);

impl DottedKey {
    /// Build a key from a raw dotted string. Returns `None` for an empty key.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    /// Join parsed path segments with `.`. Returns `None` for zero segments.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        let joined = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(".");
        Some(Self(joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments walked during JSON lookup.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for DottedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free, non-empty list of namespaces to try.
///
/// Order is priority: the first namespace that contains the key wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Namespaces(Vec<String>);

impl Namespaces {
    /// Keep first occurrences in order. Returns `None` if nothing remains.
    pub fn new<I, S>(namespaces: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for ns in namespaces {
            let ns = ns.into();
            if !ns.is_empty() && !unique.contains(&ns) {
                unique.push(ns);
            }
        }
        if unique.is_empty() {
            None
        } else {
            Some(Self(unique))
        }
    }

    pub fn single(namespace: impl Into<String>) -> Option<Self> {
        let namespace: String = namespace.into();
        Self::new([namespace])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Namespaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// A recognized translation call-site ready for resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallInfo {
    pub key: DottedKey,
    pub namespaces: Namespaces,
    pub span: SourceSpan,
}
