// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::geo::Coordinates;
use thiserror::Error;

/// Failures while building a directory from JSON. The built-in dataset never
/// produces these at runtime; they surface for custom dataset files.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate province: {0}")]
    DuplicateProvince(String),
    #[error("Duplicate municipality '{municipality}' in province '{province}'")]
    DuplicateMunicipality {
        province: String,
        municipality: String,
    },
    #[error("Invalid coordinates for {place}: [{latitude}, {longitude}]")]
    InvalidCoordinates {
        place: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("Invalid bounds: southwest [{southwest}] must lie south-west of northeast [{northeast}]")]
    InvalidBounds {
        southwest: Coordinates,
        northeast: Coordinates,
    },
    #[error("Center [{0}] lies outside the directory bounds")]
    CenterOutOfBounds(Coordinates),
}

/// Rejections of a user- or device-supplied position.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Your current location is outside the {region} service area. Please choose a location within the region.")]
    OutsideServiceArea { region: String, point: Coordinates },
    #[error("Invalid coordinates: [{latitude}, {longitude}]")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("Could not read coordinates from '{0}'")]
    Malformed(String),
}
