// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::{Coordinates, RegionBounds};
use crate::directory::Directory;
use std::sync::{Arc, OnceLock};

/// Service-area box for Region IX. Mirrors the `bounds` entry of `region9.json`.
pub const REGION_IX_BOUNDS: RegionBounds =
    RegionBounds::new(Coordinates::new(6.5, 121.5), Coordinates::new(9.0, 124.0));

/// Approximate center of Region IX, the default map-view target.
pub const REGION_IX_CENTER: Coordinates = Coordinates::new(7.7, 122.8);

const REGION_IX_JSON: &str = include_str!("region9.json");

pub fn load_region_ix() -> Directory {
    Directory::from_json(REGION_IX_JSON).expect("Failed to parse embedded region9.json")
}

/// Parses the embedded dataset on first use and hands out the same
/// instance afterwards.
pub struct CachedDirectory {
    inner: OnceLock<Arc<Directory>>,
}

impl CachedDirectory {
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    pub fn get_arc(&self) -> &Arc<Directory> {
        self.inner.get_or_init(|| {
            let directory = load_region_ix();
            log::debug!(
                "[Directory] Loaded built-in {} ({} provinces, {} municipalities)",
                directory.name(),
                directory.provinces().len(),
                directory.municipality_count()
            );
            Arc::new(directory)
        })
    }

    pub fn get(&self) -> &Directory {
        self.get_arc().as_ref()
    }
}

impl Default for CachedDirectory {
    fn default() -> Self {
        Self::new()
    }
}

static REGION_IX: CachedDirectory = CachedDirectory::new();

/// The built-in Region IX directory, shared process-wide.
pub fn region_ix() -> &'static Directory {
    REGION_IX.get()
}

pub fn region_ix_arc() -> Arc<Directory> {
    Arc::clone(REGION_IX.get_arc())
}
