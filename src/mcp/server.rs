use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result;
use dashmap::DashMap;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    config::ConfigOverrides,
    core::{
        DottedKey, LensContext, LineColumn, Namespaces, locate::SyntaxHost,
        locate::split_namespaced_key, parsers::jsx::ParsedSource,
    },
    present::{collect_inline_hints, hover_at},
};

use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, GetLanguagesParams, HoverParams, InlineHintsParams,
    InlineHintsResult, LanguagesResult, ResolveKeyParams, ResolveKeyResult,
};

/// MCP server exposing translation lookups.
///
/// One `LensContext` is kept per project root for the whole session, so the
/// translation cache stays warm across tool calls.
#[derive(Clone)]
pub struct I18nLensMcpServer {
    tool_router: ToolRouter<Self>,
    contexts: Arc<DashMap<PathBuf, Arc<LensContext>>>,
}

impl Default for I18nLensMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl I18nLensMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            contexts: Arc::new(DashMap::new()),
        }
    }

    /// Get project configuration
    #[tool(
        description = "Get the effective i18n-lens configuration (locales path, default namespace, inline language) of a project."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = self.context(&params.0.project_root_path)?;

        let config_dto = ConfigDto {
            from_file: ctx.from_file,
            project_root: ctx.root_dir.to_string_lossy().to_string(),
            config: ConfigValues::from(ctx.config.clone()),
        };

        json_result(&config_dto)
    }

    /// List language directories
    #[tool(
        description = "List the language directories found under the locales path, sorted by name."
    )]
    pub async fn get_languages(
        &self,
        params: Parameters<GetLanguagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = self.context(&params.0.project_root_path)?;

        let result = LanguagesResult {
            locales_dir: ctx
                .store()
                .locales_dir()
                .map(|dir| dir.to_string_lossy().to_string()),
            languages: ctx.languages(),
        };

        json_result(&result)
    }

    /// Inline annotations of one file
    #[tool(
        description = "Resolve every t($ => $.key) call and <Trans i18nKey> element of a source file against the inline language. Missing translations have a null value."
    )]
    pub async fn inline_hints(
        &self,
        params: Parameters<InlineHintsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = self.context(&params.0.project_root_path)?;
        let (path, parsed) = parse(&ctx, &params.0.file_path)?;

        let hints = collect_inline_hints(&parsed, ctx.store(), &ctx.config);
        let missing_count = hints.iter().filter(|h| !h.resolved.is_found()).count();

        let result = InlineHintsResult {
            file_path: ctx.display_path(&path),
            total_count: hints.len(),
            missing_count,
            hints,
        };

        json_result(&result)
    }

    /// Translations of the key at a position
    #[tool(
        description = "Show the translations of the key under a 1-based line/column in every language. Returns null when there is no translation call at that position."
    )]
    pub async fn hover(&self, params: Parameters<HoverParams>) -> Result<CallToolResult, McpError> {
        let ctx = self.context(&params.0.project_root_path)?;
        let (_, parsed) = parse(&ctx, &params.0.file_path)?;

        let position = LineColumn {
            line: params.0.line as usize,
            column: params.0.column as usize,
        };
        let offset = parsed.source().offset_of(position).ok_or_else(|| {
            McpError::invalid_params(format!("Position {} is outside of the file", position), None)
        })?;

        let doc = hover_at(&parsed, offset, ctx.store(), &ctx.config);

        json_result(&doc)
    }

    /// Resolve a single key
    #[tool(
        description = "Resolve a dotted key (optionally 'namespace:key') against candidate namespaces in priority order. The first namespace containing the key wins."
    )]
    pub async fn resolve_key(
        &self,
        params: Parameters<ResolveKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = self.context(&params.project_root_path)?;

        let (prefix, raw_key) = split_namespaced_key(&params.key);
        let key = DottedKey::new(raw_key)
            .ok_or_else(|| McpError::invalid_params("Key must not be empty", None))?;

        let namespaces = match (params.namespaces, prefix) {
            (Some(namespaces), _) => Namespaces::new(namespaces),
            (None, Some(prefix)) => Namespaces::single(prefix),
            (None, None) => Namespaces::single(ctx.config.default_namespace.as_str()),
        }
        .ok_or_else(|| McpError::invalid_params("Namespaces must not be empty", None))?;

        let language = params
            .language
            .unwrap_or_else(|| ctx.config.inline_language.clone());
        let resolved = ctx
            .store()
            .resolve_with_fallback(&namespaces, &key, &language);

        let result = ResolveKeyResult {
            key: key.to_string(),
            language,
            namespaces: namespaces.as_slice().to_vec(),
            matched_namespace: resolved.matched_namespace,
            value: resolved.value,
        };

        json_result(&result)
    }
}

impl I18nLensMcpServer {
    /// Session context for a project, created on first use.
    fn context(&self, project_root_path: &str) -> Result<Arc<LensContext>, McpError> {
        let root = Path::new(project_root_path).canonicalize().map_err(|e| {
            McpError::invalid_params(
                format!("Invalid project root {}: {}", project_root_path, e),
                None,
            )
        })?;

        if let Some(ctx) = self.contexts.get(&root) {
            return Ok(Arc::clone(ctx.value()));
        }

        let ctx = LensContext::new(&root, &ConfigOverrides::default())
            .map(Arc::new)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;
        debug!(root = %root.display(), "created session context");
        Ok(Arc::clone(
            self.contexts.entry(root).or_insert(ctx).value(),
        ))
    }
}

fn parse(ctx: &LensContext, file_path: &str) -> Result<(PathBuf, ParsedSource), McpError> {
    let path = ctx.resolve_path(Path::new(file_path));
    let parsed = ctx
        .parse_file(&path)
        .map_err(|e| McpError::internal_error(format!("Failed to parse file: {:#}", e), None))?;
    Ok((path, parsed))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for I18nLensMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "i18n-lens MCP shows what i18next translation calls resolve to.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_languages - List language directories under the locales path\n\
                 3. inline_hints - Resolved value of every translation call in a file\n\
                 4. hover - Translations of the key at a line/column in every language\n\
                 5. resolve_key - Resolve one key against candidate namespaces\n\n\
                 Keys are looked up in <localesPath>/<language>/<namespace>.json.\n\
                 Namespaces come from ns: options, useTranslation(...) or TFunction<...>\n\
                 declarations above the call, or the configured default namespace."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = I18nLensMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
