//! Parsers for the pieces of a translation call-site.
//!
//! - `jsx`: swc-backed source parser that reduces a file to call/element nodes
//! - `key_expr`: selector arrow function text -> dotted key
//! - `namespace`: options object / preceding file text -> namespaces

pub mod jsx;
pub mod key_expr;
pub mod namespace;
