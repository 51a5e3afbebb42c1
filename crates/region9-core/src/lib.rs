// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Province → municipality → barangay directory for Region IX (Zamboanga
//! Peninsula), with the lookups used by location pickers and map markers.
//!
//! The crate-level functions query the built-in dataset. The same operations
//! exist as methods on [`Directory`] for callers holding a custom dataset.
//!
//! Lookups never fail: an unknown name yields an empty slice or `None`.

pub mod directory;
pub mod error;
pub mod geo;
pub mod geofence;
pub mod parser;
pub mod resolve;
pub mod settings;

pub use directory::{
    Barangay, BarangayLocation, Directory, Municipality, MunicipalityEntry, Province,
};
pub use error::{DirectoryError, LocationError};
pub use geo::data::{region_ix, region_ix_arc, REGION_IX_BOUNDS, REGION_IX_CENTER};
pub use geo::{Coordinates, RegionBounds};
pub use geofence::NearestMunicipality;
pub use parser::parse_coordinates;
pub use resolve::{format_location, LocationQuery, Precision, ResolvedLocation};
pub use settings::{Settings, CURRENT_SCHEMA_VERSION};

pub fn provinces() -> &'static [Province] {
    region_ix().provinces()
}

pub fn municipalities_of(province: &str) -> &'static [Municipality] {
    region_ix().municipalities_of(province)
}

/// One entry per municipality, province order then municipality order.
pub fn list_all_municipalities() -> Vec<MunicipalityEntry<'static>> {
    region_ix().list_all_municipalities()
}

/// Barangays of the first municipality named `municipality`, restricted to
/// `province` when given. Names such as "San Jose" recur, so pass the
/// province whenever it is known.
pub fn find_barangays(municipality: &str, province: Option<&str>) -> &'static [Barangay] {
    region_ix().find_barangays(municipality, province)
}

pub fn find_municipality_coordinates(
    municipality: &str,
    province: Option<&str>,
) -> Option<Coordinates> {
    region_ix().find_municipality_coordinates(municipality, province)
}

pub fn is_within_region_bounds(latitude: f64, longitude: f64) -> bool {
    REGION_IX_BOUNDS.contains(latitude, longitude)
}

pub fn search_municipalities(query: &str) -> Vec<MunicipalityEntry<'static>> {
    region_ix().search_municipalities(query)
}

pub fn find_barangay_locations(barangay: &str) -> Vec<BarangayLocation<'static>> {
    region_ix().find_barangay_locations(barangay)
}

pub fn resolve(query: &LocationQuery<'_>) -> Option<ResolvedLocation<'static>> {
    region_ix().resolve(query)
}

pub fn nearest_municipality(point: Coordinates) -> Option<NearestMunicipality<'static>> {
    region_ix().nearest_municipality(point)
}

pub fn accept_detected_position(point: Coordinates) -> Result<Coordinates, LocationError> {
    region_ix().accept_detected_position(point)
}
