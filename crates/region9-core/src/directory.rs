// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::error::DirectoryError;
use crate::geo::{Coordinates, RegionBounds};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barangay {
    pub name: String,
    /// Absent for most entries; map placement then uses the municipality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub barangays: Vec<Barangay>,
}

impl Municipality {
    pub fn barangay(&self, name: &str) -> Option<&Barangay> {
        self.barangays.iter().find(|b| b.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub name: String,
    #[serde(default)]
    pub municipalities: Vec<Municipality>,
}

impl Province {
    pub fn municipality(&self, name: &str) -> Option<&Municipality> {
        self.municipalities.iter().find(|m| m.name == name)
    }
}

/// One row of the flattened municipality list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MunicipalityEntry<'a> {
    pub municipality: &'a str,
    pub province: &'a str,
    pub coordinates: Coordinates,
}

/// Where a barangay name occurs. `coordinates` is the barangay's own point
/// when it has one, otherwise its municipality's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarangayLocation<'a> {
    pub barangay: &'a str,
    pub municipality: &'a str,
    pub province: &'a str,
    pub coordinates: Coordinates,
}

/// Province → municipality → barangay hierarchy plus the service-area box.
///
/// Read-only once built. Order at every level is display order and is kept
/// exactly as loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDirectory")]
pub struct Directory {
    name: String,
    bounds: RegionBounds,
    center: Coordinates,
    provinces: Vec<Province>,
}

/// On-disk shape before validation.
#[derive(Deserialize)]
struct RawDirectory {
    name: String,
    bounds: RegionBounds,
    center: Coordinates,
    #[serde(default)]
    provinces: Vec<Province>,
}

impl TryFrom<RawDirectory> for Directory {
    type Error = DirectoryError;

    fn try_from(raw: RawDirectory) -> Result<Self, Self::Error> {
        let directory = Directory {
            name: raw.name,
            bounds: raw.bounds,
            center: raw.center,
            provinces: raw.provinces,
        };
        directory.validate()?;
        Ok(directory)
    }
}

/// An empty province qualifier counts as "no qualifier".
fn province_filter(province: Option<&str>) -> Option<&str> {
    province.filter(|p| !p.is_empty())
}

impl Directory {
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        // Go through the raw shape so validation failures keep their variant.
        let raw: RawDirectory = serde_json::from_str(json)?;
        Directory::try_from(raw)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        log::debug!("[Directory] Loading dataset from {:?}", path);
        let content = fs::read_to_string(path)?;
        let directory = Self::from_json(&content).map_err(|e| {
            log::error!("[Directory] Rejected dataset {:?}: {}", path, e);
            e
        })?;
        log::info!(
            "[Directory] Loaded {} from {:?} ({} municipalities)",
            directory.name,
            path,
            directory.municipality_count()
        );
        Ok(directory)
    }

    /// Structural checks. Municipalities outside the bounds are only logged.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if !self.bounds.is_well_formed() {
            return Err(DirectoryError::InvalidBounds {
                southwest: self.bounds.southwest,
                northeast: self.bounds.northeast,
            });
        }
        check_point("center", &self.center)?;
        if !self.bounds.contains_point(&self.center) {
            return Err(DirectoryError::CenterOutOfBounds(self.center));
        }

        let mut seen_provinces = HashSet::new();
        for province in &self.provinces {
            if !seen_provinces.insert(province.name.as_str()) {
                return Err(DirectoryError::DuplicateProvince(province.name.clone()));
            }

            let mut seen_municipalities = HashSet::new();
            for muni in &province.municipalities {
                if !seen_municipalities.insert(muni.name.as_str()) {
                    return Err(DirectoryError::DuplicateMunicipality {
                        province: province.name.clone(),
                        municipality: muni.name.clone(),
                    });
                }
                check_point(&muni.name, &muni.coordinates)?;
                if !self.bounds.contains_point(&muni.coordinates) {
                    log::warn!(
                        "[Directory] {} ({}) at [{}] lies outside the region bounds",
                        muni.name,
                        province.name,
                        muni.coordinates
                    );
                }

                for brgy in &muni.barangays {
                    if let Some(c) = &brgy.coordinates {
                        check_point(&format!("{}, {}", brgy.name, muni.name), c)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn bounds(&self) -> &RegionBounds {
        &self.bounds
    }

    pub fn center(&self) -> Coordinates {
        self.center
    }

    pub fn municipality_count(&self) -> usize {
        self.provinces.iter().map(|p| p.municipalities.len()).sum()
    }

    pub fn province(&self, name: &str) -> Option<&Province> {
        self.provinces.iter().find(|p| p.name == name)
    }

    /// Every (province, municipality) pair in traversal order.
    pub fn municipalities(&self) -> impl Iterator<Item = (&Province, &Municipality)> + '_ {
        self.provinces
            .iter()
            .flat_map(|p| p.municipalities.iter().map(move |m| (p, m)))
    }

    /// Flattened list, province order then municipality order.
    pub fn list_all_municipalities(&self) -> Vec<MunicipalityEntry<'_>> {
        self.municipalities()
            .map(|(p, m)| MunicipalityEntry {
                municipality: &m.name,
                province: &p.name,
                coordinates: m.coordinates,
            })
            .collect()
    }

    /// First municipality named `municipality`, optionally restricted to one
    /// province. Without a province the first match in directory order wins,
    /// even when the name recurs in a later province.
    pub fn find_municipality(
        &self,
        municipality: &str,
        province: Option<&str>,
    ) -> Option<(&Province, &Municipality)> {
        let province = province_filter(province);
        self.provinces
            .iter()
            .filter(|p| province.map_or(true, |name| p.name == name))
            .find_map(|p| p.municipality(municipality).map(|m| (p, m)))
    }

    /// Barangays of the matched municipality; empty when nothing matches.
    pub fn find_barangays(&self, municipality: &str, province: Option<&str>) -> &[Barangay] {
        self.find_municipality(municipality, province)
            .map(|(_, m)| m.barangays.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_municipality_coordinates(
        &self,
        municipality: &str,
        province: Option<&str>,
    ) -> Option<Coordinates> {
        self.find_municipality(municipality, province)
            .map(|(_, m)| m.coordinates)
    }

    pub fn is_within_region_bounds(&self, latitude: f64, longitude: f64) -> bool {
        self.bounds.contains(latitude, longitude)
    }

    /// Municipalities of one province for the second dropdown of a cascade.
    pub fn municipalities_of(&self, province: &str) -> &[Municipality] {
        self.province(province)
            .map(|p| p.municipalities.as_slice())
            .unwrap_or(&[])
    }

    /// Case-insensitive substring match on municipality names.
    pub fn search_municipalities(&self, query: &str) -> Vec<MunicipalityEntry<'_>> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.list_all_municipalities()
            .into_iter()
            .filter(|e| e.municipality.to_lowercase().contains(&q))
            .collect()
    }

    /// Every place that has a barangay with exactly this name.
    pub fn find_barangay_locations(&self, barangay: &str) -> Vec<BarangayLocation<'_>> {
        self.municipalities()
            .filter_map(|(p, m)| {
                m.barangay(barangay).map(|b| BarangayLocation {
                    barangay: &b.name,
                    municipality: &m.name,
                    province: &p.name,
                    coordinates: b.coordinates.unwrap_or(m.coordinates),
                })
            })
            .collect()
    }
}

fn check_point(place: &str, c: &Coordinates) -> Result<(), DirectoryError> {
    if c.is_valid() {
        Ok(())
    } else {
        Err(DirectoryError::InvalidCoordinates {
            place: place.to_string(),
            latitude: c.latitude,
            longitude: c.longitude,
        })
    }
}
