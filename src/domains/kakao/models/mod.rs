//! Kakao Local API data model.

pub mod document;
pub mod meta;
pub mod types;

pub use document::{
    Address, Address2CoordinatesDocument, Coord2AddressDocument, Coord2RegionCodeDocument,
    PlacesDocument, RoadAddress, TransCoordDocument,
};
pub use meta::{Meta, SameName};
pub use types::{AddressType, CategoryGroupCode, CoordType, RegionType, UnknownCode, YesOrNo};
