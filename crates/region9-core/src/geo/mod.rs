// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod data;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LocationError;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Serialized as the two-element array `[latitude, longitude]`, which is the
/// shape the dataset and the front end both use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and within ±90 latitude / ±180 longitude.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.latitude, c.longitude]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinates {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_coordinates(s)
    }
}

/// Service-area rectangle given by its southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub southwest: Coordinates,
    pub northeast: Coordinates,
}

impl RegionBounds {
    pub const fn new(southwest: Coordinates, northeast: Coordinates) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    pub fn south(&self) -> f64 {
        self.southwest.latitude
    }

    pub fn north(&self) -> f64 {
        self.northeast.latitude
    }

    pub fn west(&self) -> f64 {
        self.southwest.longitude
    }

    pub fn east(&self) -> f64 {
        self.northeast.longitude
    }

    /// Inclusive on every edge. NaN never matches.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.south() && lat <= self.north() && lon >= self.west() && lon <= self.east()
    }

    pub fn contains_point(&self, point: &Coordinates) -> bool {
        self.contains(point.latitude, point.longitude)
    }

    /// Southwest really is south-west of northeast, and both corners are valid.
    pub fn is_well_formed(&self) -> bool {
        self.southwest.is_valid()
            && self.northeast.is_valid()
            && self.south() <= self.north()
            && self.west() <= self.east()
    }
}
