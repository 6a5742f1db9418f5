//! Translate a catalogue into the wait-then-ride routing graph.

use log::info;
use rustc_hash::FxHashMap;

use tr_catalogue::TransportCatalogue;
use tr_core::{BusId, EdgeId, RoutingSettings, StopId, VertexId};
use tr_graph::{GraphError, WeightedGraph};

use crate::RoutingResult;

// ── Graph vocabulary ──────────────────────────────────────────────────────────

/// The two vertices owned by one stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StopVertices {
    /// Arrival point.  Itineraries start and end here.
    pub wait_start: VertexId,
    /// Boarding point, reached from `wait_start` after the mandatory wait.
    pub wait_end: VertexId,
}

/// Domain meaning of a routing-graph edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EdgeKind {
    /// `wait_start → wait_end` of `stop`.
    Wait { stop: StopId, duration: f64 },
    /// `wait_end(boarding) → wait_start(alighting)` without leaving `bus`.
    Ride { bus: BusId, span_count: u32, duration: f64 },
}

impl EdgeKind {
    /// Minutes spent on this edge (equal to the edge weight).
    pub fn duration(&self) -> f64 {
        match *self {
            EdgeKind::Wait { duration, .. } | EdgeKind::Ride { duration, .. } => duration,
        }
    }
}

// ── RoutingGraph ──────────────────────────────────────────────────────────────

/// A frozen routing graph plus the side tables needed to read it back.
///
/// Owns copies of every stop and bus name, so it does not borrow the
/// catalogue it was built from.  Do not construct directly; use
/// [`RoutingGraphBuilder`].
#[derive(Debug)]
pub struct RoutingGraph {
    settings:      RoutingSettings,
    graph:         WeightedGraph,
    /// Indexed by `StopId`.
    stop_vertices: Vec<StopVertices>,
    /// Indexed by `EdgeId`.
    edge_kinds:    Vec<EdgeKind>,
    stop_names:    Vec<String>,
    bus_names:     Vec<String>,
    stop_index:    FxHashMap<String, StopId>,
}

impl RoutingGraph {
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn stop_count(&self) -> usize {
        self.stop_vertices.len()
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn stop_vertices(&self, stop: StopId) -> Option<StopVertices> {
        self.stop_vertices.get(stop.index()).copied()
    }

    /// # Panics
    /// Panics if `edge` is not an edge of this graph.
    pub fn edge_kind(&self, edge: EdgeId) -> &EdgeKind {
        &self.edge_kinds[edge.index()]
    }

    /// Side table in `EdgeId` order.
    pub fn edge_kinds(&self) -> &[EdgeKind] {
        &self.edge_kinds
    }

    pub fn stop_name(&self, stop: StopId) -> &str {
        &self.stop_names[stop.index()]
    }

    pub fn bus_name(&self, bus: BusId) -> &str {
        &self.bus_names[bus.index()]
    }
}

// ── RoutingGraphBuilder ───────────────────────────────────────────────────────

/// One-pass construction of a [`RoutingGraph`].
///
/// # Edges produced
///
/// | Kind   | Count per item                  | Weight                          |
/// |--------|---------------------------------|---------------------------------|
/// | `Wait` | 1 per stop                      | `bus_wait_time`                 |
/// | `Ride` | `k·(k-1)/2` per bus of `k` stops | road metres ÷ metres-per-minute |
///
/// Ride edges cover every ordered position pair `i < j` of the bus's stored
/// sequence.  Linear buses are stored mirrored by the catalogue, so one
/// forward pass already covers the return direction; no reverse pass runs.
///
/// # Example
///
/// ```
/// use tr_catalogue::TransportCatalogue;
/// use tr_core::{GeoPoint, RoutingSettings};
/// use tr_routing::RoutingGraphBuilder;
///
/// let mut cat = TransportCatalogue::new();
/// cat.add_stop("A", GeoPoint::new(55.0, 37.0)).unwrap();
/// cat.add_stop("B", GeoPoint::new(55.1, 37.0)).unwrap();
/// cat.set_distance("A", "B", 2_000).unwrap();
/// cat.add_bus("1", &["A", "B"], false).unwrap(); // stored as A B A
///
/// let g = RoutingGraphBuilder::new(&cat, RoutingSettings::new(6.0, 40.0))
///     .build()
///     .unwrap();
/// assert_eq!(g.graph().vertex_count(), 4);
/// assert_eq!(g.graph().edge_count(), 2 + 3); // 2 waits + 3 rides
/// ```
pub struct RoutingGraphBuilder<'a> {
    catalogue: &'a TransportCatalogue,
    settings:  RoutingSettings,
}

impl<'a> RoutingGraphBuilder<'a> {
    pub fn new(catalogue: &'a TransportCatalogue, settings: RoutingSettings) -> Self {
        Self { catalogue, settings }
    }

    /// Validate the settings and build the graph.
    pub fn build(self) -> RoutingResult<RoutingGraph> {
        self.settings.validate()?;

        let cat = self.catalogue;
        let stop_count = cat.stop_count();
        let vertex_count = stop_count
            .checked_mul(2)
            .filter(|&n| VertexId::try_from(n).is_ok())
            .ok_or(GraphError::TooLarge(stop_count))?;

        let ride_count: usize = cat
            .buses()
            .map(|(_, b)| b.stops.len() * b.stops.len().saturating_sub(1) / 2)
            .sum();

        let mut graph = WeightedGraph::with_capacity(vertex_count, stop_count + ride_count);
        let mut edge_kinds = Vec::with_capacity(stop_count + ride_count);

        // ── Vertices ──────────────────────────────────────────────────────
        let stop_vertices: Vec<StopVertices> = (0..stop_count as u32)
            .map(|i| StopVertices {
                wait_start: VertexId(2 * i),
                wait_end:   VertexId(2 * i + 1),
            })
            .collect();

        // ── Wait edges ────────────────────────────────────────────────────
        let wait = self.settings.bus_wait_time;
        for (stop, _) in cat.stops() {
            let v = stop_vertices[stop.index()];
            graph.add_edge(v.wait_start, v.wait_end, wait)?;
            edge_kinds.push(EdgeKind::Wait { stop, duration: wait });
        }

        // ── Ride edges ────────────────────────────────────────────────────
        for (bus, route) in cat.buses() {
            let stops = &route.stops;
            for i in 0..stops.len() {
                let boarding = stop_vertices[stops[i].index()].wait_end;
                let mut distance_m = 0u64;

                for j in i + 1..stops.len() {
                    distance_m += cat.distance(stops[j - 1], stops[j]) as u64;
                    let duration = self.settings.ride_minutes(distance_m as f64);
                    let alighting = stop_vertices[stops[j].index()].wait_start;

                    graph.add_edge(boarding, alighting, duration)?;
                    edge_kinds.push(EdgeKind::Ride {
                        bus,
                        span_count: (j - i) as u32,
                        duration,
                    });
                }
            }
        }
        debug_assert_eq!(graph.edge_count(), edge_kinds.len());

        info!(
            "routing graph built: {} stops, {} buses, {} vertices, {} wait + {} ride edges",
            stop_count,
            cat.bus_count(),
            graph.vertex_count(),
            stop_count,
            graph.edge_count() - stop_count
        );

        let stop_names: Vec<String> = cat.stops().map(|(_, s)| s.name.clone()).collect();
        let bus_names: Vec<String> = cat.buses().map(|(_, b)| b.name.clone()).collect();
        let stop_index = cat
            .stops()
            .map(|(id, s)| (s.name.clone(), id))
            .collect();

        Ok(RoutingGraph {
            settings: self.settings,
            graph,
            stop_vertices,
            edge_kinds,
            stop_names,
            bus_names,
            stop_index,
        })
    }
}
