//! Document schemas mirroring the Kakao Local API response shapes.
//!
//! Field names match the upstream JSON keys exactly. Unknown keys are
//! ignored; a missing or mistyped required key fails to parse. Coordinates
//! stay as the decimal strings upstream sent, with `x` the longitude and
//! `y` the latitude.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::types::{AddressType, CategoryGroupCode, RegionType, YesOrNo};

/// Lot-number (jibun) address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    pub address_name: String,
    pub region_1depth_name: String,
    pub region_2depth_name: String,
    /// Legal dong, e.g. '역삼동'
    pub region_3depth_name: String,
    /// Administrative dong, e.g. '역삼1동'
    pub region_3depth_h_name: String,
    /// Administrative dong code
    pub h_code: String,
    /// Legal dong code
    pub b_code: String,
    /// 'Y' for a mountain lot
    pub mountain_yn: YesOrNo,
    pub main_address_no: String,
    /// Empty when the lot has no sub number
    pub sub_address_no: String,
    /// Legacy six digit postal code, usually empty
    pub zip_code: String,
    pub x: String,
    pub y: String,
}

/// Road-name address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RoadAddress {
    pub address_name: String,
    pub region_1depth_name: String,
    pub region_2depth_name: String,
    pub region_3depth_name: String,
    pub road_name: String,
    /// 'Y' for an underground building
    pub underground_yn: YesOrNo,
    pub main_building_no: String,
    /// Empty when the building has no sub number
    pub sub_building_no: String,
    pub building_name: String,
    /// Five digit postal code
    pub zone_no: String,
    pub x: String,
    pub y: String,
}

/// One result of address to coordinate conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Address2CoordinatesDocument {
    pub address_name: String,
    pub address_type: AddressType,
    pub x: String,
    pub y: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub road_address: Option<RoadAddress>,
}

/// Region lookup result for a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coord2RegionCodeDocument {
    /// 'B' for legal dong, 'H' for administrative dong
    pub region_type: RegionType,
    pub address_name: String,
    pub region_1depth_name: String,
    pub region_2depth_name: String,
    pub region_3depth_name: String,
    /// Only filled for village-level legal dong results
    pub region_4depth_name: String,
    /// Ten digit legal or administrative dong code
    pub code: String,
    pub x: String,
    pub y: String,
}

/// Reverse geocoding result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coord2AddressDocument {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub road_address: Option<RoadAddress>,
}

/// Coordinate in the requested output system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransCoordDocument {
    pub x: String,
    pub y: String,
}

/// Place search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlacesDocument {
    /// Place id, usable with `create_share_link`
    pub id: String,
    pub place_name: String,
    /// Full category path, e.g. '의료,건강 > 병원'
    pub category_name: String,
    /// Upstream sends an empty string for uncategorized places
    #[serde(default, deserialize_with = "empty_code_as_none")]
    pub category_group_code: Option<CategoryGroupCode>,
    pub category_group_name: String,
    pub phone: String,
    pub address_name: String,
    pub road_address_name: String,
    pub x: String,
    pub y: String,
    pub place_url: String,
    /// Distance from the search center in meters, empty without a center
    pub distance: String,
}

fn empty_code_as_none<'de, D>(deserializer: D) -> Result<Option<CategoryGroupCode>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(code) if code.is_empty() => Ok(None),
        Some(code) => code.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
