use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::present::InlineHint;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (or any directory inside it)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLanguagesParams {
    /// Absolute path of the project root (or any directory inside it)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InlineHintsParams {
    /// Absolute path of the project root (or any directory inside it)
    pub project_root_path: String,
    /// Source file, absolute or relative to the project root
    pub file_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoverParams {
    /// Absolute path of the project root (or any directory inside it)
    pub project_root_path: String,
    /// Source file, absolute or relative to the project root
    pub file_path: String,
    /// 1-based line number
    pub line: u32,
    /// 1-based column, counted in characters
    pub column: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveKeyParams {
    /// Absolute path of the project root (or any directory inside it)
    pub project_root_path: String,
    /// Dotted key, optionally prefixed with a namespace (`errors:network.timeout`)
    pub key: String,
    /// Candidate namespaces in priority order (default: the key prefix or the default namespace)
    pub namespaces: Option<Vec<String>>,
    /// Language directory to resolve against (default: the configured inline language)
    pub language: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub project_root: String,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub locales_path: String,
    pub default_namespace: String,
    pub inline_language: String,
    pub show_all_languages: bool,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            locales_path: c.locales_path,
            default_namespace: c.default_namespace,
            inline_language: c.inline_language,
            show_all_languages: c.show_all_languages,
            includes: c.includes,
            ignores: c.ignores,
        }
    }
}

// ============================================================
// Languages Types (get_languages)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResult {
    /// Absolute locales directory, or null when it does not exist
    pub locales_dir: Option<String>,
    pub languages: Vec<String>,
}

// ============================================================
// Hint Types (inline_hints)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineHintsResult {
    pub file_path: String,
    pub total_count: usize,
    pub missing_count: usize,
    pub hints: Vec<InlineHint>,
}

// ============================================================
// Resolution Types (resolve_key)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveKeyResult {
    pub key: String,
    pub language: String,
    /// Namespaces tried, in order
    pub namespaces: Vec<String>,
    pub matched_namespace: Option<String>,
    pub value: Option<String>,
}
