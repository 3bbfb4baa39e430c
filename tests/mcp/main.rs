use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary i18next project with a `public/locales/` directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Stop the config search at the project root
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with namespace files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_locales(vec![
    ///     ("en", "common", json!({"key": "value"})),
    ///     ("de", "common", json!({"key": "Wert"})),
    /// ])?;
    /// ```
    pub fn with_locales(files: Vec<(&str, &str, Value)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (language, namespace, content) in files {
            fixture.write_namespace_file(language, namespace, &content)?;
        }
        Ok(fixture)
    }

    /// Write public/locales/<language>/<namespace>.json
    pub fn write_namespace_file(
        &self,
        language: &str,
        namespace: &str,
        content: &Value,
    ) -> Result<()> {
        let dir = self.project_root.join("public/locales").join(language);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.json", namespace));
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize JSON for {}/{}", language, namespace))?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write namespace file: {}", path.display()))?;
        Ok(())
    }

    /// Write a source file relative to the project root
    pub fn write_source_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .i18nlensrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".i18nlensrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Two languages, two namespaces; `de` lacks the `errors` namespace
pub fn fixture_multi_namespace() -> Result<McpTestFixture> {
    McpTestFixture::with_locales(vec![
        (
            "en",
            "common",
            json!({
                "greeting": { "hello": "Hello" },
                "title": "Home"
            }),
        ),
        (
            "en",
            "errors",
            json!({
                "network": { "timeout": "Request timed out" }
            }),
        ),
        (
            "de",
            "common",
            json!({
                "greeting": { "hello": "Hallo" }
            }),
        ),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
