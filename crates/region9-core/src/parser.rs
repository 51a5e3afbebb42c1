// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::error::LocationError;
use crate::geo::Coordinates;
use regex::Regex;
use std::sync::OnceLock;

fn coordinate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // "8.583300, 123.341700", "8.5833 123.3417", "[8.5833, 123.3417]", "(8.5833,123.3417)"
        Regex::new(
            r"^\s*[\[(]?\s*([+-]?\d+(?:\.\d+)?)\s*(?:,\s*|\s+)([+-]?\d+(?:\.\d+)?)\s*[\])]?\s*$",
        )
        .unwrap()
    })
}

/// Reads a `latitude, longitude` pair as typed by a user or produced by the
/// reverse-geocoding fallback.
pub fn parse_coordinates(text: &str) -> Result<Coordinates, LocationError> {
    let malformed = || LocationError::Malformed(text.trim().to_string());

    let caps = coordinate_pattern().captures(text).ok_or_else(malformed)?;
    let latitude: f64 = caps[1].parse().map_err(|_| malformed())?;
    let longitude: f64 = caps[2].parse().map_err(|_| malformed())?;

    let point = Coordinates::new(latitude, longitude);
    if !point.is_valid() {
        return Err(LocationError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fallback_format() {
        let c = parse_coordinates("8.583300, 123.341700").unwrap();
        assert_eq!(c, Coordinates::new(8.5833, 123.3417));
    }

    #[test]
    fn test_parse_alternate_shapes() {
        let expected = Coordinates::new(6.9214, 122.079);
        for text in [
            "6.9214 122.079",
            "[6.9214, 122.079]",
            "(6.9214,122.079)",
            "  +6.9214 ,  122.079  ",
        ] {
            assert_eq!(parse_coordinates(text), Ok(expected), "input: {:?}", text);
        }
    }

    #[test]
    fn test_parse_negative_values() {
        let c: Coordinates = "-33.94, -151.17".parse().unwrap();
        assert_eq!(c, Coordinates::new(-33.94, -151.17));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_coordinates("Dipolog City"),
            Err(LocationError::Malformed("Dipolog City".to_string()))
        );
        assert!(parse_coordinates("8.5833").is_err());
        assert!(parse_coordinates("8.5833, 123.3417, 5").is_err());
        assert!(parse_coordinates("").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            parse_coordinates("95.0, 123.0"),
            Err(LocationError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            parse_coordinates("8.0, 181.0"),
            Err(LocationError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let c = Coordinates::new(7.7, 122.8);
        assert_eq!(parse_coordinates(&c.to_string()), Ok(c));
    }
}
