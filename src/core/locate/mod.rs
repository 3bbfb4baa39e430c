//! Call-site locator.
//!
//! Finds translation call-sites in a [`SyntaxHost`] and turns them into
//! [`CallInfo`]. Two shapes are recognized:
//!
//! - a call whose callee is exactly `t` or ends with `.t`
//!   (`t(...)`, `i18n.t(...)`, `props.t(...)`)
//! - a `<Trans i18nKey="...">` element
//!
//! The locator only extracts raw text fragments. Turning those fragments into
//! a key and namespaces is left to the textual parsers in `core::parsers`.

mod host;

pub use host::{StaticHost, SyntaxHost, SyntaxNode, TagAttribute};

use tracing::debug;

use crate::core::{
    CallInfo, DottedKey, Namespaces, SourceSpan,
    parsers::{
        key_expr::{ParseMode, parse_key_expression},
        namespace::{find_ambient_namespaces, parse_explicit_namespace},
    },
};

const TRANS_TAG: &str = "Trans";
const I18N_KEY_ATTRIBUTE: &str = "i18nKey";

/// `t(first, second)` with the raw argument texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub first_argument: Option<String>,
    pub options_text: Option<String>,
    pub span: SourceSpan,
}

/// `<Trans i18nKey="raw_key">`. `raw_key` is `None` for a non-literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSite {
    pub raw_key: Option<String>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizedSite {
    Call(CallSite),
    Tag(TagSite),
}

impl RecognizedSite {
    /// Recognize `node` as a translation call-site, if it has a known shape.
    pub fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::Call {
                callee,
                arguments,
                span,
            } if is_translation_callee(callee) => Some(Self::Call(CallSite {
                first_argument: arguments.first().cloned(),
                options_text: arguments.get(1).cloned(),
                span: *span,
            })),
            SyntaxNode::Tag {
                name,
                attributes,
                span,
            } if name == TRANS_TAG => {
                let attribute = attributes
                    .iter()
                    .find(|attr| attr.name == I18N_KEY_ATTRIBUTE)?;
                Some(Self::Tag(TagSite {
                    raw_key: attribute.value.clone(),
                    span: *span,
                }))
            }
            _ => None,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            Self::Call(site) => site.span,
            Self::Tag(site) => site.span,
        }
    }

    /// Project the site onto a [`CallInfo`].
    ///
    /// Namespace priority: explicit (`ns:` option or `ns:` key prefix), then
    /// ambient declarations in `preceding_text`, then `default_namespace`.
    /// Returns `None` when no key can be recovered.
    pub fn to_call_info(
        &self,
        preceding_text: &str,
        default_namespace: &str,
        mode: ParseMode,
    ) -> Option<CallInfo> {
        let (key, explicit) = match self {
            Self::Call(site) => {
                let key = parse_key_expression(site.first_argument.as_deref()?, mode)?;
                (key, parse_explicit_namespace(site.options_text.as_deref()))
            }
            Self::Tag(site) => {
                let (namespace, key) = split_namespaced_key(site.raw_key.as_deref()?);
                (DottedKey::new(key)?, namespace.map(str::to_string))
            }
        };

        let namespaces = explicit
            .and_then(Namespaces::single)
            .or_else(|| {
                let ambient = find_ambient_namespaces(preceding_text);
                if let Some(ambient) = &ambient {
                    debug!(key = %key, namespaces = %ambient, "ambient namespaces");
                }
                ambient
            })
            .or_else(|| Namespaces::single(default_namespace))?;

        Some(CallInfo {
            key,
            namespaces,
            span: self.span(),
        })
    }
}

fn is_translation_callee(callee: &str) -> bool {
    callee == "t" || callee.ends_with(".t")
}

/// Split `ns:key` into its namespace prefix and key.
///
/// Only the first colon separates. A colon at position 0 (or none at all)
/// means the whole value is the key.
pub fn split_namespaced_key(raw: &str) -> (Option<&str>, &str) {
    match raw.find(':') {
        Some(idx) if idx > 0 => (Some(&raw[..idx]), &raw[idx + 1..]),
        _ => (None, raw),
    }
}

/// The innermost recognized call-site enclosing `offset`.
pub fn locate_call_site<H: SyntaxHost + ?Sized>(host: &H, offset: usize) -> Option<RecognizedSite> {
    host.ancestors(offset)
        .into_iter()
        .find_map(RecognizedSite::from_node)
}

/// Every recognized call-site in document order.
pub fn recognized_sites<H: SyntaxHost + ?Sized>(host: &H) -> Vec<RecognizedSite> {
    host.nodes()
        .iter()
        .filter_map(RecognizedSite::from_node)
        .collect()
}

/// Locate and parse the call-site at `offset` in one step.
pub fn call_info_at<H: SyntaxHost + ?Sized>(
    host: &H,
    offset: usize,
    default_namespace: &str,
    mode: ParseMode,
) -> Option<CallInfo> {
    let site = locate_call_site(host, offset)?;
    site.to_call_info(
        host.preceding_text(site.span().start),
        default_namespace,
        mode,
    )
}
