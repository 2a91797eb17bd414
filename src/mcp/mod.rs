//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes csvcloud's analysis to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameters and result DTOs

mod server;
pub mod types;

pub use server::{CsvCloudMcpServer, run_server};
