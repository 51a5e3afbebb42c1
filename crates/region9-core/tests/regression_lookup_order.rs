// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Pins traversal order so accidental reordering of the dataset is caught.

use region9_core::{
    find_barangay_locations, find_barangays, find_municipality_coordinates,
    list_all_municipalities, municipalities_of, search_municipalities, Coordinates,
};

#[test]
fn test_municipality_order_snapshot() {
    let names: Vec<&str> = list_all_municipalities()
        .iter()
        .map(|e| e.municipality)
        .collect();
    assert_eq!(
        names,
        vec![
            "Dipolog City",
            "Dapitan City",
            "Polanco",
            "Manukan",
            "Rizal",
            "Pagadian City",
            "Zamboanga City",
            "Aurora",
            "Molave",
            "Tigbao",
            "Ipil",
            "Naga",
            "Alicia",
            "Buug",
            "Tungawan",
        ]
    );
}

#[test]
fn test_poblacion_is_a_barangay_not_a_municipality() {
    // No municipality is named "Poblacion", so the unqualified lookup is empty.
    assert!(find_barangays("Poblacion", None).is_empty());
    assert_eq!(find_municipality_coordinates("Poblacion", None), None);
}

#[test]
fn test_poblacion_barangay_first_match_is_polanco() {
    let hits = find_barangay_locations("Poblacion");
    assert_eq!(hits.len(), 10);

    let first = hits[0];
    assert_eq!(first.municipality, "Polanco");
    assert_eq!(first.province, "Zamboanga del Norte");
    assert_eq!(first.coordinates, Coordinates::new(8.54, 123.35));

    let last = hits[hits.len() - 1];
    assert_eq!(last.municipality, "Tungawan");

    // Buug only has "Lower Poblacion" / "Upper Poblacion".
    assert!(hits.iter().all(|h| h.municipality != "Buug"));
}

#[test]
fn test_recurring_barangay_names_keep_directory_order() {
    let san_isidro: Vec<&str> = find_barangay_locations("San Isidro")
        .iter()
        .map(|h| h.municipality)
        .collect();
    assert_eq!(san_isidro, vec!["Molave", "Tigbao", "Tungawan"]);

    let mabuhay: Vec<&str> = find_barangay_locations("Mabuhay")
        .iter()
        .map(|h| h.municipality)
        .collect();
    assert_eq!(mabuhay, vec!["Manukan", "Molave", "Buug"]);

    let san_jose: Vec<&str> = find_barangay_locations("San Jose")
        .iter()
        .map(|h| h.municipality)
        .collect();
    assert_eq!(san_jose, vec!["Manukan", "Pagadian City", "Naga"]);
}

#[test]
fn test_tigbao_municipality_vs_tigbao_barangay() {
    // Tigbao is a municipality of Zamboanga del Sur and a barangay of Naga.
    assert_eq!(
        find_municipality_coordinates("Tigbao", None),
        Some(Coordinates::new(7.7167, 123.0167))
    );
    let hits = find_barangay_locations("Tigbao");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].municipality, "Naga");
}

#[test]
fn test_wrong_province_qualifier_finds_nothing() {
    assert!(find_barangays("Dipolog City", Some("Zamboanga del Sur")).is_empty());
    assert_eq!(
        find_municipality_coordinates("Ipil", Some("Zamboanga del Norte")),
        None
    );
}

#[test]
fn test_cascade_second_level() {
    let names: Vec<&str> = municipalities_of("Zamboanga Sibugay")
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ipil", "Naga", "Alicia", "Buug", "Tungawan"]);
    assert!(municipalities_of("Zamboanga").is_empty());
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let cities: Vec<&str> = search_municipalities("city")
        .iter()
        .map(|e| e.municipality)
        .collect();
    assert_eq!(
        cities,
        vec!["Dipolog City", "Dapitan City", "Pagadian City", "Zamboanga City"]
    );
    assert_eq!(search_municipalities("  IPIL ").len(), 1);
    assert!(search_municipalities("").is_empty());
    assert!(search_municipalities("Manila").is_empty());
}
