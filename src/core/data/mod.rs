//! Core data types shared by the parsers, the locator and the translation store.
//!
//! ## Module Structure
//!
//! - `call_info`: DottedKey, Namespaces and the parsed CallInfo
//! - `source`: SourceText (line index) and SourceSpan
//! - `translation`: ResolvedTranslation

pub mod call_info;
pub mod source;
pub mod translation;

pub use call_info::{CallInfo, DottedKey, Namespaces};
pub use source::{LineColumn, SourceSpan, SourceText};
pub use translation::ResolvedTranslation;
