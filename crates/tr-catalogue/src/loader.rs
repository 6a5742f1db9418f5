//! CSV catalogue loader.
//!
//! # CSV format
//!
//! Three files (or readers), each with a header row.
//!
//! ```csv
//! # stops.csv
//! name,lat,lon
//! Riviera,43.587795,39.716901
//! Morskoy vokzal,43.581969,39.719848
//!
//! # distances.csv: metres, directional; the reverse is used as a fallback
//! from,to,metres
//! Riviera,Morskoy vokzal,850
//!
//! # buses.csv: one row per route stop, ordered by `seq` within a bus
//! bus,is_roundtrip,seq,stop
//! 114,false,0,Morskoy vokzal
//! 114,false,1,Riviera
//! ```
//!
//! Buses are added in order of their first row.  All rows of one bus must
//! agree on `is_roundtrip`.  Round-trip buses list their first stop again as
//! the last stop; linear buses list only the forward direction.

use std::io::Read;
use std::path::Path;

use log::debug;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use tr_core::GeoPoint;

use crate::{CatalogueError, CatalogueResult, TransportCatalogue};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    name: String,
    lat:  f64,
    lon:  f64,
}

#[derive(Deserialize)]
struct DistanceRecord {
    from:   String,
    to:     String,
    metres: u32,
}

#[derive(Deserialize)]
struct BusRecord {
    bus:          String,
    is_roundtrip: bool,
    seq:          u32,
    stop:         String,
}

/// Rows of one bus collected before it is added to the catalogue.
struct PendingBus {
    name:         String,
    is_roundtrip: bool,
    stops:        Vec<(u32, String)>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `stops.csv`, `distances.csv`, and `buses.csv` from `dir`.
pub fn load_catalogue_dir(dir: &Path) -> CatalogueResult<TransportCatalogue> {
    let open = |name: &str| std::fs::File::open(dir.join(name)).map_err(CatalogueError::Io);
    load_catalogue_reader(open("stops.csv")?, open("distances.csv")?, open("buses.csv")?)
}

/// Like [`load_catalogue_dir`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_catalogue_reader<S: Read, D: Read, B: Read>(
    stops: S,
    distances: D,
    buses: B,
) -> CatalogueResult<TransportCatalogue> {
    let mut catalogue = TransportCatalogue::new();

    // ── Stops ─────────────────────────────────────────────────────────────
    for row in csv_reader(stops).deserialize::<StopRecord>() {
        let row = row.map_err(|e| CatalogueError::Parse(e.to_string()))?;
        let pos = GeoPoint::new(row.lat, row.lon);
        if !pos.is_valid() {
            return Err(CatalogueError::Parse(format!(
                "stop {:?} has out-of-range coordinates {pos}",
                row.name
            )));
        }
        catalogue.add_stop(&row.name, pos)?;
    }

    // ── Distances ─────────────────────────────────────────────────────────
    let mut distance_count = 0usize;
    for row in csv_reader(distances).deserialize::<DistanceRecord>() {
        let row = row.map_err(|e| CatalogueError::Parse(e.to_string()))?;
        catalogue.set_distance(&row.from, &row.to, row.metres)?;
        distance_count += 1;
    }

    // ── Buses ─────────────────────────────────────────────────────────────
    let mut pending: Vec<PendingBus> = Vec::new();
    let mut by_name: FxHashMap<String, usize> = FxHashMap::default();

    for row in csv_reader(buses).deserialize::<BusRecord>() {
        let row = row.map_err(|e| CatalogueError::Parse(e.to_string()))?;
        let slot = *by_name.entry(row.bus.clone()).or_insert_with(|| {
            pending.push(PendingBus {
                name:         row.bus.clone(),
                is_roundtrip: row.is_roundtrip,
                stops:        Vec::new(),
            });
            pending.len() - 1
        });

        let bus = &mut pending[slot];
        if bus.is_roundtrip != row.is_roundtrip {
            return Err(CatalogueError::Parse(format!(
                "bus {:?} has conflicting is_roundtrip values",
                row.bus
            )));
        }
        bus.stops.push((row.seq, row.stop));
    }

    for mut bus in pending {
        bus.stops.sort_by_key(|(seq, _)| *seq);
        let names: Vec<&str> = bus.stops.iter().map(|(_, s)| s.as_str()).collect();
        catalogue.add_bus(&bus.name, &names, bus.is_roundtrip)?;
    }

    debug!(
        "catalogue loaded: {} stops, {} distances, {} buses",
        catalogue.stop_count(),
        distance_count,
        catalogue.bus_count()
    );

    Ok(catalogue)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}
