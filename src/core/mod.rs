//! Translation-key lens engine.
//!
//! ## Module Structure
//!
//! - `data`: keys, namespaces, spans and resolution results
//! - `parsers`: source parsing plus the key and namespace text parsers
//! - `locate`: finds translation call-sites and builds `CallInfo`
//! - `resolve`: namespace fallback lookup over cached JSON resources
//! - `context`: per-project configuration and translation store
//! - `file_scanner`: source file discovery

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod locate;
pub mod parsers;
pub mod resolve;

pub use context::LensContext;
pub use data::*;
pub use resolve::TranslationStore;
