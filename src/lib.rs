//! i18n-lens - translation lens for i18next projects
//!
//! i18n-lens finds translation call-sites written with the selector API
//! (`t($ => $.a.b)`) and `<Trans i18nKey="ns:key">` elements, works out the
//! namespaces each call draws from, and resolves the key against
//! `<localesPath>/<language>/<namespace>.json`. Results are shown as inline
//! hints, hover documentation, or served to AI agents over MCP.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface (hints, hover, languages, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key/namespace parsers, call-site locator and translation store
//! - `mcp`: Model Context Protocol server implementation
//! - `present`: Inline hint and hover documentation producers

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod present;
