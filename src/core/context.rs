use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::{
    config::{Config, ConfigLoadResult, ConfigOverrides, load_config},
    core::{
        TranslationStore,
        file_scanner::{ScanResult, scan_files},
        parsers::jsx::{ParsedSource, parse_source},
    },
};

/// Everything needed to annotate files of one project.
///
/// Configuration priority (highest to lowest):
/// 1. Overrides (CLI arguments or MCP parameters)
/// 2. `.i18nlensrc.json` config file
/// 3. Built-in defaults
///
/// The translation store lives as long as the context, so one context per
/// session keeps the resource cache warm.
#[derive(Debug)]
pub struct LensContext {
    pub config: Config,
    /// Directory holding the config file, or the start directory.
    pub root_dir: PathBuf,
    pub from_file: bool,
    store: TranslationStore,
}

impl LensContext {
    pub fn new(start_dir: &Path, overrides: &ConfigOverrides) -> Result<Self> {
        let start_dir = start_dir
            .canonicalize()
            .with_context(|| format!("Invalid root directory: {:?}", start_dir))?;
        let ConfigLoadResult {
            config,
            from_file,
            project_root,
        } = load_config(&start_dir)?;

        if !from_file {
            debug!(dir = %start_dir.display(), "no config file found, using defaults");
        }

        let config = config.with_overrides(overrides);
        config.validate()?;

        let locales_dir = config.locales_dir(&project_root);
        let locales_dir = if locales_dir.is_dir() {
            Some(locales_dir)
        } else {
            debug!(dir = %locales_dir.display(), "locales directory not found");
            None
        };

        Ok(Self {
            config,
            root_dir: project_root,
            from_file,
            store: TranslationStore::new(locales_dir),
        })
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn languages(&self) -> Vec<String> {
        self.store.list_languages()
    }

    /// Resolve `path` against the project root unless it is absolute.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_dir.join(path)
        }
    }

    /// Path relative to the project root, for display.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    pub fn parse_file(&self, path: &Path) -> Result<ParsedSource> {
        let code = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {:?}", path))?;
        parse_source(code, &path.to_string_lossy())
    }

    /// Source files of the project per `includes` / `ignores`.
    pub fn scan(&self) -> ScanResult {
        scan_files(&self.root_dir, &self.config.includes, &self.config.ignores)
    }
}
