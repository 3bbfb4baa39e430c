//! Access to translation resource files.

use std::{
    fs,
    path::Path,
    time::SystemTime,
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Version marker of a resource file. A cached parse is valid only while the
/// file still reports the same stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModificationStamp {
    pub modified: Option<SystemTime>,
    pub len: u64,
}

/// File-system operations the translation store depends on.
pub trait ResourceProvider: Send + Sync {
    /// Current stamp of the file at `path`, or `None` if it is not a readable
    /// file.
    fn modification_stamp(&self, path: &Path) -> Option<ModificationStamp>;

    /// Read and parse a JSON document whose root must be an object.
    fn read_json_object(&self, path: &Path) -> Result<Map<String, Value>>;

    /// Names of the sub-directories of `path`, in no particular order.
    fn list_directories(&self, path: &Path) -> Option<Vec<String>>;
}

/// [`ResourceProvider`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResourceProvider;

impl ResourceProvider for FsResourceProvider {
    fn modification_stamp(&self, path: &Path) -> Option<ModificationStamp> {
        let metadata = fs::metadata(path).ok()?;
        if !metadata.is_file() {
            return None;
        }
        Some(ModificationStamp {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }

    fn read_json_object(&self, path: &Path) -> Result<Map<String, Value>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
        let json: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;
        match json {
            Value::Object(root) => Ok(root),
            _ => bail!("JSON root is not an object: {:?}", path),
        }
    }

    fn list_directories(&self, path: &Path) -> Option<Vec<String>> {
        let entries = fs::read_dir(path).ok()?;
        let names = entries
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        Some(names)
    }
}
