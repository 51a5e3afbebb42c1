// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Gating of device-detected positions against the service area.

use crate::directory::{Directory, MunicipalityEntry};
use crate::error::LocationError;
use crate::geo::Coordinates;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestMunicipality<'a> {
    #[serde(flatten)]
    pub entry: MunicipalityEntry<'a>,
    pub distance_km: f64,
}

impl Directory {
    /// Returns the point unchanged when it may populate a request's location
    /// fields. The error's `Display` is meant for the user.
    pub fn accept_detected_position(
        &self,
        point: Coordinates,
    ) -> Result<Coordinates, LocationError> {
        if !point.is_valid() {
            return Err(LocationError::InvalidCoordinates {
                latitude: point.latitude,
                longitude: point.longitude,
            });
        }
        if !self.bounds().contains_point(&point) {
            log::info!("[Directory] Rejected position [{}] outside {}", point, self.name());
            return Err(LocationError::OutsideServiceArea {
                region: self.name().to_string(),
                point,
            });
        }
        Ok(point)
    }

    /// Closest municipality center to an in-bounds point. Ties keep the
    /// earlier municipality in directory order.
    pub fn nearest_municipality(&self, point: Coordinates) -> Option<NearestMunicipality<'_>> {
        if !self.bounds().contains_point(&point) {
            return None;
        }

        let mut best: Option<NearestMunicipality<'_>> = None;
        for entry in self.list_all_municipalities() {
            let distance_km = point.distance_km(&entry.coordinates);
            if best.map_or(true, |b| distance_km < b.distance_km) {
                best = Some(NearestMunicipality { entry, distance_km });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::data::{region_ix, REGION_IX_CENTER};

    #[test]
    fn test_accepts_point_inside_region() {
        let dir = region_ix();
        let p = Coordinates::new(6.95, 122.1);
        assert_eq!(dir.accept_detected_position(p), Ok(p));
    }

    #[test]
    fn test_rejects_manila_with_user_message() {
        let dir = region_ix();
        let manila = Coordinates::new(14.5995, 120.9842);
        let err = dir.accept_detected_position(manila).unwrap_err();
        assert!(matches!(err, LocationError::OutsideServiceArea { .. }));
        assert!(err
            .to_string()
            .contains("outside the Region IX - Zamboanga Peninsula service area"));
    }

    #[test]
    fn test_rejects_nan() {
        let dir = region_ix();
        assert!(matches!(
            dir.accept_detected_position(Coordinates::new(f64::NAN, 122.0)),
            Err(LocationError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn test_nearest_to_center_is_alicia() {
        let n = region_ix().nearest_municipality(REGION_IX_CENTER).unwrap();
        assert_eq!(n.entry.municipality, "Alicia");
        assert_eq!(n.entry.province, "Zamboanga Sibugay");
        assert!(n.distance_km < 10.0);
    }

    #[test]
    fn test_nearest_distinguishes_close_neighbours() {
        let dir = region_ix();
        let n = dir.nearest_municipality(Coordinates::new(8.6, 123.4)).unwrap();
        assert_eq!(n.entry.municipality, "Dapitan City");

        let n = dir.nearest_municipality(Coordinates::new(7.8, 123.44)).unwrap();
        assert_eq!(n.entry.municipality, "Pagadian City");
    }

    #[test]
    fn test_nearest_outside_bounds_is_none() {
        assert!(region_ix()
            .nearest_municipality(Coordinates::new(0.0, 0.0))
            .is_none());
    }
}
