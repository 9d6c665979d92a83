//! Kakao Local API domain.
//!
//! - `models/` - closed code sets, document and metadata schemas
//! - `client.rs` - per-call HTTP client and response parsing
//! - `error.rs` - classified upstream failures

pub mod client;
mod error;
pub mod models;

pub use client::{Endpoint, KakaoClient, KakaoResponse, parse_documents};
pub use error::{KakaoError, KakaoResult};
