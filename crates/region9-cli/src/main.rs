// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use region9_core::{Barangay, Coordinates, Directory, LocationQuery, Settings};
use serde::Serialize;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dataset JSON to use instead of the built-in Region IX directory
    #[arg(short, long, env = "REGION9_DATASET")]
    dataset: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List provinces
    Provinces,
    /// List municipalities, all or for one province
    Municipalities {
        #[arg(short, long)]
        province: Option<String>,
    },
    /// List the barangays of a municipality
    Barangays {
        municipality: String,
        #[arg(short, long)]
        province: Option<String>,
    },
    /// Show the coordinates of a municipality
    Coords {
        municipality: String,
        #[arg(short, long)]
        province: Option<String>,
    },
    /// Search municipalities by partial name
    Search { query: String },
    /// Show every municipality that has a barangay with this name
    Where { barangay: String },
    /// Check whether a position is inside the service area
    Check {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Resolve an address to map coordinates
    Resolve {
        municipality: String,
        #[arg(short, long)]
        province: Option<String>,
        #[arg(short, long)]
        barangay: Option<String>,
    },
    /// Show the service-area bounds and center
    Bounds,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off)
        .build();
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn open_directory(cli: &Cli, settings: &Settings) -> Result<Arc<Directory>> {
    match &cli.dataset {
        Some(path) => {
            let dir = Directory::load(path)
                .with_context(|| format!("Failed to load dataset {:?}", path))?;
            Ok(Arc::new(dir))
        }
        None => settings.open_directory().with_context(|| {
            format!(
                "Failed to load dataset configured in {:?}",
                Settings::config_path()
            )
        }),
    }
}

/// `None` when the municipality is unknown, so an empty list stays distinct.
fn barangays_of<'a>(
    dir: &'a Directory,
    municipality: &str,
    province: Option<&str>,
) -> Option<&'a [Barangay]> {
    dir.find_municipality(municipality, province)
        .map(|(_, m)| m.barangays.as_slice())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct CheckReport<'a> {
    latitude: f64,
    longitude: f64,
    within_bounds: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    nearest: Option<region9_core::NearestMunicipality<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load();
    let dir = open_directory(&cli, &settings)?;
    log::debug!(
        "[CLI] Using {} ({} municipalities)",
        dir.name(),
        dir.municipality_count()
    );

    match &cli.command {
        Commands::Provinces => {
            if cli.json {
                let names: Vec<&str> = dir.provinces().iter().map(|p| p.name.as_str()).collect();
                print_json(&names)?;
            } else {
                for p in dir.provinces() {
                    println!("{} ({} municipalities)", p.name, p.municipalities.len());
                }
            }
        }
        Commands::Municipalities { province } => {
            let province = province
                .as_deref()
                .or_else(|| settings.default_province_in(&dir));
            let entries: Vec<_> = dir
                .list_all_municipalities()
                .into_iter()
                .filter(|e| province.map_or(true, |p| e.province == p))
                .collect();
            if cli.json {
                print_json(&entries)?;
            } else if entries.is_empty() {
                println!("No municipalities found for province '{}'", province.unwrap_or(""));
            } else {
                for e in &entries {
                    println!("{}, {} [{}]", e.municipality, e.province, e.coordinates);
                }
            }
        }
        Commands::Barangays {
            municipality,
            province,
        } => match barangays_of(&dir, municipality, province.as_deref()) {
            None => {
                println!("No municipality found matching '{}'", municipality);
                return Ok(ExitCode::FAILURE);
            }
            Some(barangays) if cli.json => print_json(barangays)?,
            Some([]) => println!("No barangays listed for '{}'", municipality),
            Some(barangays) => {
                for b in barangays {
                    match &b.coordinates {
                        Some(c) => println!("{} [{}]", b.name, c),
                        None => println!("{}", b.name),
                    }
                }
            }
        },
        Commands::Coords {
            municipality,
            province,
        } => match dir.find_municipality_coordinates(municipality, province.as_deref()) {
            Some(c) if cli.json => print_json(&c)?,
            Some(c) => println!("{}", c),
            None => {
                println!("No municipality found matching '{}'", municipality);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Search { query } => {
            let entries = dir.search_municipalities(query);
            if cli.json {
                print_json(&entries)?;
            } else {
                for e in &entries {
                    println!("{}, {}", e.municipality, e.province);
                }
            }
        }
        Commands::Where { barangay } => {
            let hits = dir.find_barangay_locations(barangay);
            if cli.json {
                print_json(&hits)?;
            } else if hits.is_empty() {
                println!("No barangay named '{}'", barangay);
            } else {
                for h in &hits {
                    println!(
                        "{}",
                        region9_core::format_location(
                            Some(h.barangay),
                            Some(h.municipality),
                            Some(h.province)
                        )
                    );
                }
            }
        }
        Commands::Check {
            latitude,
            longitude,
        } => {
            let point = Coordinates::new(*latitude, *longitude);
            let accepted = dir.accept_detected_position(point);
            let report = CheckReport {
                latitude: *latitude,
                longitude: *longitude,
                within_bounds: accepted.is_ok(),
                nearest: dir.nearest_municipality(point),
                message: accepted.as_ref().err().map(|e| e.to_string()),
            };
            if cli.json {
                print_json(&report)?;
            } else {
                match (&report.message, &report.nearest) {
                    (Some(msg), _) => println!("{}", msg),
                    (None, Some(n)) => println!(
                        "Inside {}. Nearest municipality: {}, {} ({:.1} km)",
                        dir.name(),
                        n.entry.municipality,
                        n.entry.province,
                        n.distance_km
                    ),
                    (None, None) => println!("Inside {}", dir.name()),
                }
            }
            if !report.within_bounds {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Resolve {
            municipality,
            province,
            barangay,
        } => {
            let query = LocationQuery {
                province: province.as_deref(),
                municipality: municipality.as_str(),
                barangay: barangay.as_deref(),
            };
            match dir.resolve(&query) {
                Some(r) if cli.json => print_json(&r)?,
                Some(r) => println!("{} [{}] ({:?})", r.label(), r.coordinates, r.precision),
                None => {
                    println!("No municipality found matching '{}'", municipality);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Bounds => {
            let bounds = dir.bounds();
            if cli.json {
                print_json(&serde_json::json!({
                    "name": dir.name(),
                    "bounds": bounds,
                    "center": dir.center(),
                }))?;
            } else {
                println!("{}", dir.name());
                println!("  southwest: {}", bounds.southwest);
                println!("  northeast: {}", bounds.northeast);
                println!("  center:    {}", dir.center());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["region9", "check", "-33.94", "151.17"]).unwrap();
        match cli.command {
            Commands::Check {
                latitude,
                longitude,
            } => {
                assert_eq!(latitude, -33.94);
                assert_eq!(longitude, 151.17);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_barangays_of_separates_unknown_from_empty() {
        let dir = Directory::from_json(
            r#"{
                "name": "Test",
                "bounds": { "southwest": [6.0, 121.0], "northeast": [9.0, 124.0] },
                "center": [7.5, 122.5],
                "provinces": [ { "name": "P", "municipalities": [
                    { "name": "M", "coordinates": [7.0, 122.0] }
                ] } ]
            }"#,
        )
        .unwrap();
        assert_eq!(barangays_of(&dir, "M", None), Some(&[][..]));
        assert_eq!(barangays_of(&dir, "M", Some("Q")), None);
        assert_eq!(barangays_of(&dir, "Nowhere", None), None);

        let builtin = region9_core::region_ix();
        let dipolog = barangays_of(builtin, "Dipolog City", Some("Zamboanga del Norte"));
        assert_eq!(dipolog.map(<[Barangay]>::len), Some(17));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "region9",
            "barangays",
            "Dipolog City",
            "--province",
            "Zamboanga del Norte",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
