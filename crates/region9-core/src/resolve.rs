// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::directory::Directory;
use crate::geo::Coordinates;
use serde::Serialize;

pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";

/// An address picked through the province → municipality → barangay cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationQuery<'q> {
    pub province: Option<&'q str>,
    pub municipality: &'q str,
    pub barangay: Option<&'q str>,
}

impl<'q> LocationQuery<'q> {
    pub fn new(municipality: &'q str) -> Self {
        Self {
            municipality,
            ..Default::default()
        }
    }

    pub fn in_province(mut self, province: &'q str) -> Self {
        self.province = Some(province);
        self
    }

    pub fn at_barangay(mut self, barangay: &'q str) -> Self {
        self.barangay = Some(barangay);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// The barangay carried its own coordinates.
    Barangay,
    /// Placed at the municipality center.
    Municipality,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedLocation<'a> {
    pub province: &'a str,
    pub municipality: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barangay: Option<&'a str>,
    pub coordinates: Coordinates,
    pub precision: Precision,
}

impl ResolvedLocation<'_> {
    pub fn label(&self) -> String {
        format_location(self.barangay, Some(self.municipality), Some(self.province))
    }
}

impl Directory {
    /// Coordinates for a map marker. `None` only when the municipality is
    /// unknown; an unknown or coordinate-less barangay falls back to the
    /// municipality center.
    pub fn resolve(&self, query: &LocationQuery<'_>) -> Option<ResolvedLocation<'_>> {
        let (province, muni) = self.find_municipality(query.municipality, query.province)?;

        let barangay = query
            .barangay
            .filter(|b| !b.trim().is_empty())
            .and_then(|name| {
                let found = muni.barangay(name);
                if found.is_none() {
                    log::debug!(
                        "[Directory] Barangay '{}' not listed under {}, using municipality center",
                        name,
                        muni.name
                    );
                }
                found
            });

        let (coordinates, precision) = match barangay.and_then(|b| b.coordinates) {
            Some(c) => (c, Precision::Barangay),
            None => (muni.coordinates, Precision::Municipality),
        };

        Some(ResolvedLocation {
            province: &province.name,
            municipality: &muni.name,
            barangay: barangay.map(|b| b.name.as_str()),
            coordinates,
            precision,
        })
    }
}

/// Joins the non-blank parts with ", ", e.g. "Tetuan, Zamboanga City".
pub fn format_location(
    barangay: Option<&str>,
    municipality: Option<&str>,
    province: Option<&str>,
) -> String {
    let parts: Vec<&str> = [barangay, municipality, province]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        LOCATION_NOT_SPECIFIED.to_string()
    } else {
        parts.join(", ")
    }
}
