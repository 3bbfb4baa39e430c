//! Key-expression parser for selector-style translation calls.
//!
//! Recovers a dotted key from the text of the first argument of `t(...)`:
//!
//! ```text
//! $ => $.greeting.hello            -> greeting.hello
//! (p) => p.errors["network"]       -> errors.network
//! p => { return p.a[`b`].c; }      -> a.b.c
//! ```
//!
//! This is a textual parser. It never evaluates the expression; anything it
//! does not recognize is a "no match" (`None`).

use std::sync::LazyLock;

use regex::Regex;

use crate::core::DottedKey;

/// `param => body` or `(param) => body`, single parameter only.
static ARROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*\(?\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\)?\s*=>\s*(.+)$").unwrap()
});

/// A block body holding exactly one `return <expr>;` statement.
static RETURN_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\{\s*return\s+([^;]+);\s*\}$").unwrap());

/// How much trailing text is tolerated after the member-access chain.
///
/// Inline hints use `Strict`: the chain must run to the end of the body.
/// Hover uses `Lenient`: a parsed prefix is accepted even when unparsed text
/// (a method call, optional chaining, ...) follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Strict,
    Lenient,
}

/// Parse the text of a selector arrow function into a dotted key.
pub fn parse_key_expression(expr_text: &str, mode: ParseMode) -> Option<DottedKey> {
    let captures = ARROW_REGEX.captures(expr_text)?;
    let param_name = captures.get(1)?.as_str();
    let mut body = captures.get(2)?.as_str().trim();

    if body.starts_with('{') {
        body = RETURN_BLOCK_REGEX.captures(body)?.get(1)?.as_str().trim();
    }

    parse_member_chain(body, param_name, mode)
}

/// Parse `param.a["b"].c` into its segments, relative to `param_name`.
fn parse_member_chain(body: &str, param_name: &str, mode: ParseMode) -> Option<DottedKey> {
    let rest = body.strip_prefix(param_name)?;
    let mut cursor = Cursor::new(rest);
    let mut segments: Vec<&str> = Vec::new();

    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some('.') => {
                cursor.bump();
                let segment = cursor.take_while(is_ident_char);
                if segment.is_empty() {
                    return None;
                }
                segments.push(segment);
            }
            Some('[') => segments.push(cursor.bracket_string()?),
            _ => break,
        }
    }

    if segments.is_empty() {
        return None;
    }
    if mode == ParseMode::Strict && !cursor.is_at_end() {
        return None;
    }

    DottedKey::from_segments(&segments)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '-')
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.text[start..self.pos]
    }

    /// `[` ws quote content quote ws `]`. Content is taken verbatim.
    fn bracket_string(&mut self) -> Option<&'a str> {
        if self.bump()? != '[' {
            return None;
        }
        self.skip_whitespace();
        let quote = self.bump().filter(|c| is_quote(*c))?;
        let content = self.take_while(|c| c != quote);
        if content.is_empty() || self.bump()? != quote {
            return None;
        }
        self.skip_whitespace();
        if self.bump()? != ']' {
            return None;
        }
        Some(content)
    }
}
