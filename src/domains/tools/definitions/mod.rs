//! Tool definitions module.
//!
//! Each tool lives in its own file: params, `execute()`, `to_tool()` and
//! `create_route()`. Shared result helpers are in `common`.

pub mod common;
pub mod geo;
pub mod places;

pub use geo::{
    AddressToCoordinatesParams, AddressToCoordinatesTool, CoordToAddressParams,
    CoordToAddressTool, CoordToRegionCodeParams, CoordToRegionCodeTool, TransCoordParams,
    TransCoordTool,
};
pub use places::{
    CreateShareLinkParams, CreateShareLinkTool, SearchPlacesByCategoryParams,
    SearchPlacesByCategoryTool, SearchPlacesByKeywordParams, SearchPlacesByKeywordTool,
};
