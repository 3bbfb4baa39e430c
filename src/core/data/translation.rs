use serde::Serialize;

/// Outcome of resolving a key against a list of namespace candidates.
///
/// "No match" is a normal outcome: both fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTranslation {
    pub matched_namespace: Option<String>,
    pub value: Option<String>,
}

impl ResolvedTranslation {
    pub fn found(namespace: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            matched_namespace: Some(namespace.into()),
            value: Some(value.into()),
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }
}
