//! Namespace discovery for translation calls.
//!
//! Two sources are supported:
//!
//! - **Explicit**: the options argument of the call, `t($ => $.key, { ns: 'errors' })`.
//!   Only an `ns` property of the top-level object counts.
//! - **Ambient**: declarations earlier in the file that bind `t`, either
//!   `const { t } = useTranslation(['a', 'b'])` or a parameter typed
//!   `t: TFunction<['a', 'b']>`. The last declaration before the call-site wins,
//!   which approximates lexical scoping without a scope analysis.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Namespaces;

/// `ns: '<value>'` anchored at the scan position; one group per quote style.
static NS_PROPERTY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^ns\s*:\s*(?:'([^']+)'|"([^"]+)"|`([^`]+)`)"#).unwrap()
});

static USE_TRANSLATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:const|let|var)\s*\{[^}]*\bt\b[^}]*\}\s*=\s*useTranslation\s*\(([^)]*)\)")
        .unwrap()
});

static TFUNCTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bt\s*:\s*(?i:TFunction)\s*<\s*\[([^\]]+)\]").unwrap()
});

static ARRAY_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());

static STRING_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"`]([^'"`]+)['"`]"#).unwrap());

/// Find a top-level `ns` property in an options object literal.
///
/// Returns `None` when the text is absent, is not an object literal, or has no
/// `ns` property at nesting depth 1. Quoted strings are skipped while scanning
/// so brackets inside them do not disturb the depth count.
pub fn parse_explicit_namespace(options_text: Option<&str>) -> Option<String> {
    let text = options_text?.trim();
    if !text.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '{' | '(' | '[' => depth += 1,
            '}' | ')' | ']' => depth = depth.saturating_sub(1),
            '\'' | '"' | '`' => {
                // Skip to the matching quote.
                for (_, inner) in chars.by_ref() {
                    if inner == c {
                        break;
                    }
                }
            }
            'n' if depth == 1 && !prev.is_some_and(is_ident_char) => {
                if let Some(captures) = NS_PROPERTY_REGEX.captures(&text[i..]) {
                    return captures
                        .iter()
                        .skip(1)
                        .flatten()
                        .next()
                        .map(|m| m.as_str().to_string());
                }
            }
            _ => {}
        }
        prev = Some(c);
    }
    None
}

/// Find namespaces declared for `t` anywhere in `preceding_text`.
///
/// Priority: the last `useTranslation(...)` destructuring, then the last
/// `t: TFunction<[...]>` parameter. `None` means the caller should fall back
/// to the configured default namespace.
pub fn find_ambient_namespaces(preceding_text: &str) -> Option<Namespaces> {
    if let Some(captures) = USE_TRANSLATION_REGEX.captures_iter(preceding_text).last()
        && let Some(args) = captures.get(1)
        && let Some(namespaces) = parse_use_translation_args(args.as_str())
    {
        return Some(namespaces);
    }

    let captures = TFUNCTION_REGEX.captures_iter(preceding_text).last()?;
    Namespaces::new(string_literals(captures.get(1)?.as_str()))
}

/// `['a', 'b']` yields every literal in order; otherwise the first literal.
fn parse_use_translation_args(args_text: &str) -> Option<Namespaces> {
    let text = args_text.trim();
    if let Some(array) = ARRAY_LITERAL_REGEX.captures(text) {
        return Namespaces::new(string_literals(array.get(1)?.as_str()));
    }
    let first = STRING_LITERAL_REGEX.captures(text)?.get(1)?;
    Namespaces::single(first.as_str())
}

fn string_literals(text: &str) -> Vec<&str> {
    STRING_LITERAL_REGEX
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$')
}
