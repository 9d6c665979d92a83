//! Tools domain module.
//!
//! Every Kakao Maps operation is exposed as an MCP tool.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder used by the rmcp handler
//! - `registry.rs` - Tool listing and dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file under `definitions/geo` or `definitions/places`
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export it from the group's `mod.rs`
//! 4. Add the route in `router.rs` and the dispatch arm in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
