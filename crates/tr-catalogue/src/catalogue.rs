//! Catalogue storage and route statistics.

use rustc_hash::FxHashMap;

use tr_core::{BusId, GeoPoint, StopId};

use crate::{CatalogueError, CatalogueResult};

// ── Stop / Bus ────────────────────────────────────────────────────────────────

/// A named stop.
#[derive(Clone, Debug)]
pub struct Stop {
    pub name: String,
    pub pos:  GeoPoint,
    /// Buses calling at this stop, in registration order, without repeats.
    buses: Vec<BusId>,
}

impl Stop {
    pub fn buses(&self) -> &[BusId] {
        &self.buses
    }
}

/// A bus route.  `stops` is the full travelled sequence (mirrored for
/// linear routes).
#[derive(Clone, Debug)]
pub struct Bus {
    pub name:         String,
    pub is_roundtrip: bool,
    pub stops:        Vec<StopId>,
}

/// Summary returned by [`TransportCatalogue::bus_stats`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BusStats {
    /// Stops visited, counting repeats (length of the stored sequence).
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Road length in metres.
    pub route_length: u64,
    /// Road length divided by great-circle length; 0 when the latter is 0.
    pub curvature: f64,
}

// ── TransportCatalogue ────────────────────────────────────────────────────────

/// Stop and bus storage with name lookup and a road-distance table.
///
/// Ids are insertion indices, so iteration order is the order stops and
/// buses were added.
#[derive(Debug, Default)]
pub struct TransportCatalogue {
    stops:      Vec<Stop>,
    buses:      Vec<Bus>,
    stop_index: FxHashMap<String, StopId>,
    bus_index:  FxHashMap<String, BusId>,
    distances:  FxHashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add a stop and return its id.
    pub fn add_stop(&mut self, name: &str, pos: GeoPoint) -> CatalogueResult<StopId> {
        if self.stop_index.contains_key(name) {
            return Err(CatalogueError::DuplicateStop(name.to_owned()));
        }
        let id = StopId::try_from(self.stops.len())
            .map_err(|_| CatalogueError::TooLarge(self.stops.len()))?;
        self.stops.push(Stop { name: name.to_owned(), pos, buses: Vec::new() });
        self.stop_index.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Record the road distance from `from` to `to` in metres.
    ///
    /// Only this direction is stored; [`distance`](Self::distance) falls back
    /// to the reverse entry.  Setting the same pair again overwrites it.
    pub fn set_distance(&mut self, from: &str, to: &str, metres: u32) -> CatalogueResult<()> {
        let from = self.require_stop(from)?;
        let to = self.require_stop(to)?;
        self.distances.insert((from, to), metres);
        Ok(())
    }

    /// Add a bus over already-registered stops.
    ///
    /// Linear buses (`is_roundtrip == false`) are stored mirrored.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        if self.bus_index.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_owned()));
        }
        if stop_names.is_empty() {
            return Err(CatalogueError::EmptyRoute(name.to_owned()));
        }

        let mut stops = stop_names
            .iter()
            .map(|s| self.require_stop(s.as_ref()))
            .collect::<CatalogueResult<Vec<StopId>>>()?;

        if !is_roundtrip {
            let back: Vec<StopId> = stops[..stops.len() - 1].iter().rev().copied().collect();
            stops.extend(back);
        }

        let id = BusId::try_from(self.buses.len())
            .map_err(|_| CatalogueError::TooLarge(self.buses.len()))?;
        for &stop in &stops {
            let served_by = &mut self.stops[stop.index()].buses;
            if !served_by.contains(&id) {
                served_by.push(id);
            }
        }
        self.buses.push(Bus { name: name.to_owned(), is_roundtrip, stops });
        self.bus_index.insert(name.to_owned(), id);
        Ok(id)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    /// # Panics
    /// Panics if `id` does not belong to this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// # Panics
    /// Panics if `id` does not belong to this catalogue.
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.stops
            .iter()
            .enumerate()
            .map(|(i, s)| (StopId(i as u32), s))
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> + '_ {
        self.buses
            .iter()
            .enumerate()
            .map(|(i, b)| (BusId(i as u32), b))
    }

    /// Road distance in metres: the `from → to` entry, else the `to → from`
    /// entry, else 0.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Road length of the stored sequence in metres.
    pub fn route_length(&self, bus: BusId) -> u64 {
        self.bus(bus)
            .stops
            .windows(2)
            .map(|w| self.distance(w[0], w[1]) as u64)
            .sum()
    }

    /// Great-circle length of the stored sequence in metres.
    pub fn geo_length(&self, bus: BusId) -> f64 {
        self.bus(bus)
            .stops
            .windows(2)
            .map(|w| self.stop(w[0]).pos.distance_m(self.stop(w[1]).pos))
            .sum()
    }

    /// Statistics for the bus called `name`, or `None` if it does not exist.
    pub fn bus_stats(&self, name: &str) -> Option<BusStats> {
        let id = self.bus_id(name)?;
        let bus = self.bus(id);

        let mut unique = bus.stops.clone();
        unique.sort_unstable();
        unique.dedup();

        let route_length = self.route_length(id);
        let geo_length = self.geo_length(id);
        let curvature = if geo_length > 0.0 {
            route_length as f64 / geo_length
        } else {
            0.0
        };

        Some(BusStats {
            stop_count: bus.stops.len(),
            unique_stop_count: unique.len(),
            route_length,
            curvature,
        })
    }

    /// Sorted names of the buses calling at stop `name`, or `None` if the
    /// stop does not exist.  A stop with no buses yields an empty list.
    pub fn stop_buses(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.stop_id(name)?;
        let mut names: Vec<&str> = self
            .stop(id)
            .buses
            .iter()
            .map(|&b| self.bus(b).name.as_str())
            .collect();
        names.sort_unstable();
        Some(names)
    }

    /// All bus names in lexicographic order.
    pub fn sorted_bus_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.buses.iter().map(|b| b.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    fn require_stop(&self, name: &str) -> CatalogueResult<StopId> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))
    }
}
