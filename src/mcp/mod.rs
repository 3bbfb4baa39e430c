//! Model Context Protocol (MCP) server.
//!
//! Exposes configuration, language listing, inline hints, hover documentation
//! and single-key resolution as MCP tools over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool implementations and the stdio entry point
//! - `types`: Tool parameters and result DTOs

mod server;
pub mod types;

pub use server::{I18nLensMcpServer, run_server};
