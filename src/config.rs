use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nlensrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locales base directory, relative to the project root.
    #[serde(default = "default_locales_path")]
    pub locales_path: String,
    /// Namespace used when a call-site declares none.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
    #[serde(default = "default_inline_language")]
    pub inline_language: String,
    #[serde(default = "default_show_all_languages")]
    pub show_all_languages: bool,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_locales_path() -> String {
    "public/locales".to_string()
}

fn default_namespace() -> String {
    "common".to_string()
}

fn default_inline_language() -> String {
    "en".to_string()
}

fn default_show_all_languages() -> bool {
    true
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_path: default_locales_path(),
            default_namespace: default_namespace(),
            inline_language: default_inline_language(),
            show_all_languages: default_show_all_languages(),
            includes: Vec::new(),
            ignores: default_ignores(),
        }
    }
}

/// Values given on the command line (or by an MCP client) that take
/// precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub locales_path: Option<String>,
    pub default_namespace: Option<String>,
    pub inline_language: Option<String>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for empty locale settings or an invalid glob pattern
    /// in `ignores` or `includes`.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("localesPath", &self.locales_path),
            ("defaultNamespace", &self.default_namespace),
            ("inlineLanguage", &self.inline_language),
        ] {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(locales_path) = &overrides.locales_path {
            self.locales_path = locales_path.clone();
        }
        if let Some(default_namespace) = &overrides.default_namespace {
            self.default_namespace = default_namespace.clone();
        }
        if let Some(inline_language) = &overrides.inline_language {
            self.inline_language = inline_language.clone();
        }
        self
    }

    /// Absolute locales directory for a project rooted at `root`.
    pub fn locales_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.locales_path)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory holding the config file, or the start directory.
    pub project_root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let project_root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                project_root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            project_root: start_dir.to_path_buf(),
        }),
    }
}
