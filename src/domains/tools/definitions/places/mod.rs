//! Place search tools.

pub mod category;
pub mod keyword;
pub mod share_link;

pub use category::{SearchPlacesByCategoryParams, SearchPlacesByCategoryTool};
pub use keyword::{SearchPlacesByKeywordParams, SearchPlacesByKeywordTool};
pub use share_link::{CreateShareLinkParams, CreateShareLinkTool};
