//! Geocoding tools.
//!
//! - `address`: address to coordinates
//! - `region_code`: coordinate to legal/administrative region
//! - `coord_address`: coordinate to lot-number/road-name address
//! - `trans_coord`: coordinate system transform

pub mod address;
pub mod coord_address;
pub mod region_code;
pub mod trans_coord;

pub use address::{AddressToCoordinatesParams, AddressToCoordinatesTool};
pub use coord_address::{CoordToAddressParams, CoordToAddressTool};
pub use region_code::{CoordToRegionCodeParams, CoordToRegionCodeTool};
pub use trans_coord::{TransCoordParams, TransCoordTool};
