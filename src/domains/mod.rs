//! Domains module containing business logic organized by bounded contexts.
//!
//! - `kakao`: the Kakao Local API client and its data model
//! - `tools`: the MCP tools built on top of it

pub mod kakao;
pub mod tools;
