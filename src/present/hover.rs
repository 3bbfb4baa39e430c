use std::fmt::Write as _;

use serde::Serialize;

use super::{MISSING_INDICATOR, truncate};
use crate::{
    config::Config,
    core::{
        DottedKey, Namespaces, SourceSpan, TranslationStore,
        locate::{SyntaxHost, call_info_at},
        parsers::key_expr::ParseMode,
        resolve::ResourceProvider,
    },
};

const MAX_HOVER_LENGTH: usize = 200;

/// Value of the hovered key in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverEntry {
    pub language: String,
    pub matched_namespace: Option<String>,
    pub value: Option<String>,
}

/// Translations of the key under the cursor in every language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverDoc {
    pub key: DottedKey,
    /// Candidate namespaces in priority order.
    pub candidates: Namespaces,
    /// Candidates that contain the key, or all candidates if none does.
    pub namespaces: Vec<String>,
    pub span: SourceSpan,
    pub entries: Vec<HoverEntry>,
}

/// Hover documentation for the innermost translation call-site at `offset`.
///
/// Keys are parsed leniently. Returns `None` when there is no call-site at
/// `offset` or when no language directory exists.
pub fn hover_at<H, P>(
    host: &H,
    offset: usize,
    store: &TranslationStore<P>,
    config: &Config,
) -> Option<HoverDoc>
where
    H: SyntaxHost + ?Sized,
    P: ResourceProvider,
{
    let info = call_info_at(host, offset, &config.default_namespace, ParseMode::Lenient)?;
    let languages = store.list_languages();
    if languages.is_empty() {
        return None;
    }

    let found = store.find_namespaces_containing_key(&info.namespaces, &info.key);
    let namespaces = if found.is_empty() {
        info.namespaces.as_slice().to_vec()
    } else {
        found
    };

    let entries = languages
        .into_iter()
        .map(|language| {
            let resolved = store.resolve_with_fallback(&info.namespaces, &info.key, &language);
            HoverEntry {
                language,
                matched_namespace: resolved.matched_namespace,
                value: resolved.value,
            }
        })
        .collect();

    Some(HoverDoc {
        key: info.key,
        candidates: info.namespaces,
        namespaces,
        span: info.span,
        entries,
    })
}

impl HoverDoc {
    fn namespace_indicator<'a>(&self, entry: &'a HoverEntry) -> Option<&'a str> {
        if self.candidates.len() > 1 {
            entry.matched_namespace.as_deref()
        } else {
            None
        }
    }

    /// Documentation markup for editor hover popups.
    pub fn render_html(&self) -> String {
        let mut html = String::from("<html><body>");
        html.push_str("<b>i18next Translations</b><br/>");
        let _ = write!(html, "<b>Key:</b> {}<br/>", escape_html(self.key.as_str()));
        let _ = write!(
            html,
            "<b>Namespaces:</b> {}<br/><br/>",
            escape_html(&self.namespaces.join(", "))
        );

        for entry in &self.entries {
            let value = match &entry.value {
                Some(value) => {
                    let mut shown = escape_html(&truncate(value, MAX_HOVER_LENGTH));
                    if let Some(namespace) = self.namespace_indicator(entry) {
                        let _ = write!(shown, " <i>({})</i>", escape_html(namespace));
                    }
                    shown
                }
                None => "<i>&lt;missing&gt;</i>".to_string(),
            };
            let _ = write!(
                html,
                "<b>{}:</b> {}<br/>",
                escape_html(&entry.language),
                value
            );
        }

        html.push_str("</body></html>");
        html
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "Key: {}", self.key);
        let _ = writeln!(text, "Namespaces: {}", self.namespaces.join(", "));
        for entry in &self.entries {
            match &entry.value {
                Some(value) => {
                    let _ = write!(
                        text,
                        "{}: {}",
                        entry.language,
                        truncate(value, MAX_HOVER_LENGTH)
                    );
                    if let Some(namespace) = self.namespace_indicator(entry) {
                        let _ = write!(text, " ({})", namespace);
                    }
                    text.push('\n');
                }
                None => {
                    let _ = writeln!(text, "{}: {}", entry.language, MISSING_INDICATOR);
                }
            }
        }
        text
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
