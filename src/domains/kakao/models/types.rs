//! Closed sets of string codes used by the Kakao Local API.
//!
//! Every enum (de)serializes as the exact upstream code. Codes outside the
//! set fail to parse instead of being passed through as open strings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned by `FromStr` when a code is not part of its set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} code: '{code}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

macro_rules! string_codes {
    ($name:ident, $kind:literal, { $($variant:ident => $code:literal),+ $(,)? }) => {
        impl $name {
            /// Every code in the set, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The upstream code for this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok($name::$variant),)+
                    other => Err(UnknownCode {
                        kind: $kind,
                        code: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Kind of match returned by address search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AddressType {
    /// Place name (지명)
    #[serde(rename = "REGION")]
    Region,
    /// Road name (도로명)
    #[serde(rename = "ROAD")]
    Road,
    /// Lot-number address (지번 주소)
    #[serde(rename = "REGION_ADDR")]
    RegionAddr,
    /// Road-name address (도로명 주소)
    #[serde(rename = "ROAD_ADDR")]
    RoadAddr,
}

string_codes!(AddressType, "address type", {
    Region => "REGION",
    Road => "ROAD",
    RegionAddr => "REGION_ADDR",
    RoadAddr => "ROAD_ADDR",
});

/// Upstream yes/no flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum YesOrNo {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

string_codes!(YesOrNo, "yes/no", {
    Yes => "Y",
    No => "N",
});

/// Region classification of a region-code lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RegionType {
    /// Legal dong (법정동)
    #[serde(rename = "B")]
    Legal,
    /// Administrative dong (행정동)
    #[serde(rename = "H")]
    Administrative,
}

string_codes!(RegionType, "region type", {
    Legal => "B",
    Administrative => "H",
});

/// Point-of-interest category group used to filter place searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CategoryGroupCode {
    /// 대형마트
    #[serde(rename = "MT1")]
    Mart,
    /// 편의점
    #[serde(rename = "CS2")]
    ConvenienceStore,
    /// 어린이집, 유치원
    #[serde(rename = "PS3")]
    Kindergarten,
    /// 학교
    #[serde(rename = "SC4")]
    School,
    /// 학원
    #[serde(rename = "AC5")]
    Academy,
    /// 주차장
    #[serde(rename = "PK6")]
    ParkingLot,
    /// 주유소, 충전소
    #[serde(rename = "OL7")]
    PetrolStation,
    /// 지하철역
    #[serde(rename = "SW8")]
    SubwayStation,
    /// 은행
    #[serde(rename = "BK9")]
    Bank,
    /// 문화시설
    #[serde(rename = "CT1")]
    CulturalFacility,
    /// 중개업소
    #[serde(rename = "AG2")]
    Brokerage,
    /// 공공기관
    #[serde(rename = "PO3")]
    PublicInstitution,
    /// 관광명소
    #[serde(rename = "AT4")]
    TouristAttraction,
    /// 숙박
    #[serde(rename = "AD5")]
    Accommodation,
    /// 음식점
    #[serde(rename = "FD6")]
    Restaurant,
    /// 카페
    #[serde(rename = "CE7")]
    Cafe,
    /// 병원
    #[serde(rename = "HP8")]
    Hospital,
    /// 약국
    #[serde(rename = "PM9")]
    Pharmacy,
}

string_codes!(CategoryGroupCode, "category group", {
    Mart => "MT1",
    ConvenienceStore => "CS2",
    Kindergarten => "PS3",
    School => "SC4",
    Academy => "AC5",
    ParkingLot => "PK6",
    PetrolStation => "OL7",
    SubwayStation => "SW8",
    Bank => "BK9",
    CulturalFacility => "CT1",
    Brokerage => "AG2",
    PublicInstitution => "PO3",
    TouristAttraction => "AT4",
    Accommodation => "AD5",
    Restaurant => "FD6",
    Cafe => "CE7",
    Hospital => "HP8",
    Pharmacy => "PM9",
});

/// Coordinate reference system identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CoordType {
    #[default]
    #[serde(rename = "WGS84")]
    Wgs84,
    #[serde(rename = "WCONGNAMUL")]
    Wcongnamul,
    #[serde(rename = "CONGNAMUL")]
    Congnamul,
    #[serde(rename = "WTM")]
    Wtm,
    #[serde(rename = "TM")]
    Tm,
    #[serde(rename = "KTM")]
    Ktm,
    #[serde(rename = "UTM")]
    Utm,
    #[serde(rename = "BESSEL")]
    Bessel,
    #[serde(rename = "WKTM")]
    Wktm,
    #[serde(rename = "WUTM")]
    Wutm,
}

string_codes!(CoordType, "coordinate system", {
    Wgs84 => "WGS84",
    Wcongnamul => "WCONGNAMUL",
    Congnamul => "CONGNAMUL",
    Wtm => "WTM",
    Tm => "TM",
    Ktm => "KTM",
    Utm => "UTM",
    Bessel => "BESSEL",
    Wktm => "WKTM",
    Wutm => "WUTM",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_are_closed() {
        assert_eq!(CategoryGroupCode::ALL.len(), 18);
        for code in CategoryGroupCode::ALL {
            let json = serde_json::to_string(code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
            assert_eq!(code.as_str().parse::<CategoryGroupCode>(), Ok(*code));
        }
        assert!(serde_json::from_str::<CategoryGroupCode>("\"XX1\"").is_err());
        assert!("hp8".parse::<CategoryGroupCode>().is_err());
    }

    #[test]
    fn test_coord_type_defaults_to_wgs84() {
        assert_eq!(CoordType::default(), CoordType::Wgs84);
        assert_eq!(CoordType::default().as_str(), "WGS84");
        assert_eq!(CoordType::ALL.len(), 10);
    }

    #[test]
    fn test_unknown_code_error_names_the_set() {
        let err = "Q".parse::<YesOrNo>().unwrap_err();
        assert_eq!(err.to_string(), "unknown yes/no code: 'Q'");
    }

    #[test]
    fn test_address_and_region_types() {
        let t: AddressType = serde_json::from_str("\"REGION_ADDR\"").unwrap();
        assert_eq!(t, AddressType::RegionAddr);
        assert!(serde_json::from_str::<AddressType>("\"STREET\"").is_err());

        let r: RegionType = serde_json::from_str("\"H\"").unwrap();
        assert_eq!(r, RegionType::Administrative);
        assert_eq!(RegionType::Legal.to_string(), "B");
        assert_eq!("N".parse::<YesOrNo>().unwrap(), YesOrNo::No);
    }
}
