use std::collections::HashSet;

use serde::Serialize;

use super::{MISSING_INDICATOR, truncate};
use crate::{
    config::Config,
    core::{
        CallInfo, DottedKey, LineColumn, Namespaces, ResolvedTranslation, TranslationStore,
        locate::{SyntaxHost, recognized_sites},
        parsers::key_expr::ParseMode,
        resolve::ResourceProvider,
    },
};

const MAX_INLINE_LENGTH: usize = 120;
const MAX_BLOCK_LINES: usize = 3;

/// Annotation rendered after a translation call-site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineHint {
    /// Byte offset of the end of the call-site; the hint is placed here.
    pub offset: usize,
    pub position: LineColumn,
    pub key: DottedKey,
    pub namespaces: Namespaces,
    pub language: String,
    #[serde(flatten)]
    pub resolved: ResolvedTranslation,
    /// `i18n[<lang>]: <value>`.
    pub label: String,
    /// `<lang>: <value>` per language when all languages are shown.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub block_lines: Vec<String>,
}

/// Annotate every recognized call-site of a file, in document order.
///
/// Keys are parsed strictly. Sites sharing an end offset produce one hint.
/// A key that resolves nowhere still gets a hint, labelled `<missing>`.
pub fn collect_inline_hints<H, P>(
    host: &H,
    store: &TranslationStore<P>,
    config: &Config,
) -> Vec<InlineHint>
where
    H: SyntaxHost + ?Sized,
    P: ResourceProvider,
{
    let languages = if config.show_all_languages {
        store.list_languages()
    } else {
        Vec::new()
    };
    let language = config.inline_language.as_str();

    let mut seen_offsets = HashSet::new();
    let mut hints = Vec::new();

    for site in recognized_sites(host) {
        let span = site.span();
        let Some(info) = site.to_call_info(
            host.preceding_text(span.start),
            &config.default_namespace,
            ParseMode::Strict,
        ) else {
            continue;
        };
        if !seen_offsets.insert(span.end) {
            continue;
        }
        let Some(position) = host.source().line_column(span.end) else {
            continue;
        };

        let resolved = store.resolve_with_fallback(&info.namespaces, &info.key, language);
        let label = format!("i18n[{}]: {}", language, display_value(&resolved));
        let block_lines = language_lines(store, &info, &languages);

        hints.push(InlineHint {
            offset: span.end,
            position,
            key: info.key,
            namespaces: info.namespaces,
            language: language.to_string(),
            resolved,
            label,
            block_lines,
        });
    }

    hints
}

fn display_value(resolved: &ResolvedTranslation) -> String {
    match &resolved.value {
        Some(value) => truncate(value, MAX_INLINE_LENGTH),
        None => MISSING_INDICATOR.to_string(),
    }
}

/// At most three lines; with more languages, two lines plus `+N more`.
fn language_lines<P: ResourceProvider>(
    store: &TranslationStore<P>,
    info: &CallInfo,
    languages: &[String],
) -> Vec<String> {
    let shown = if languages.len() <= MAX_BLOCK_LINES {
        languages
    } else {
        &languages[..MAX_BLOCK_LINES - 1]
    };

    let mut lines: Vec<String> = shown
        .iter()
        .map(|language| {
            let resolved = store.resolve_with_fallback(&info.namespaces, &info.key, language);
            format!("{}: {}", language, display_value(&resolved))
        })
        .collect();

    if shown.len() < languages.len() {
        lines.push(format!("+{} more", languages.len() - shown.len()));
    }
    lines
}
