//! Presentation adapters: inline annotations and hover documentation.
//!
//! Both consume the call-site locator and the translation store. They differ
//! in how a key is parsed: inline hints use `ParseMode::Strict`, hover uses
//! `ParseMode::Lenient`.

pub mod hover;
pub mod inline;

pub use hover::{HoverDoc, HoverEntry, hover_at};
pub use inline::{InlineHint, collect_inline_hints};

/// Shown in place of a value that resolves in no candidate namespace.
pub const MISSING_INDICATOR: &str = "<missing>";

/// Cut `value` to at most `max` characters, ending in `...` when cut.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
