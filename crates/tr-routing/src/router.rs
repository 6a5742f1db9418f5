//! Eagerly built itinerary engine answering queries by stop name.

use std::time::Instant;

use log::info;

use tr_catalogue::TransportCatalogue;
use tr_core::{RoutingSettings, StopId};
use tr_graph::AllPairsRouter;

use crate::{
    EdgeKind, Itinerary, ItineraryItem, RouteResult, RoutingGraph, RoutingGraphBuilder,
    RoutingResult,
};

/// Routing graph plus its solved all-pairs table.
///
/// Construction does all the work (O(V³) with V = 2 × stops); every query
/// afterward is O(path length) and takes `&self`, so one router can serve
/// any number of threads.
///
/// # Example
///
/// ```
/// use tr_catalogue::TransportCatalogue;
/// use tr_core::{GeoPoint, RoutingSettings};
/// use tr_routing::TransportRouter;
///
/// let mut cat = TransportCatalogue::new();
/// for (name, lat) in [("S1", 55.00), ("S2", 55.01), ("S3", 55.02)] {
///     cat.add_stop(name, GeoPoint::new(lat, 37.0)).unwrap();
/// }
/// cat.set_distance("S1", "S2", 1_000).unwrap();
/// cat.set_distance("S2", "S3", 1_000).unwrap();
/// cat.add_bus("A", &["S1", "S2", "S3"], true).unwrap();
///
/// let router = TransportRouter::new(&cat, RoutingSettings::new(5.0, 60.0)).unwrap();
/// let it = router.route("S1", "S3").into_itinerary().unwrap();
/// assert!((it.total_time - 7.0).abs() < 1e-9);
/// ```
pub struct TransportRouter {
    routing: RoutingGraph,
    solver:  AllPairsRouter,
}

impl TransportRouter {
    /// Build the routing graph from `catalogue` and solve all pairs.
    pub fn new(catalogue: &TransportCatalogue, settings: RoutingSettings) -> RoutingResult<Self> {
        let routing = RoutingGraphBuilder::new(catalogue, settings).build()?;
        Self::from_graph(routing)
    }

    /// Solve all pairs over an already-built routing graph.
    pub fn from_graph(routing: RoutingGraph) -> RoutingResult<Self> {
        let started = Instant::now();
        let solver = AllPairsRouter::build(routing.graph())?;
        info!(
            "itinerary router ready: {} vertices solved in {:.3} s",
            solver.vertex_count(),
            started.elapsed().as_secs_f64()
        );
        Ok(Self { routing, solver })
    }

    pub fn settings(&self) -> &RoutingSettings {
        self.routing.settings()
    }

    pub fn routing_graph(&self) -> &RoutingGraph {
        &self.routing
    }

    /// Fastest itinerary between two stops given by name.
    pub fn route(&self, from: &str, to: &str) -> RouteResult {
        match (self.routing.stop_id(from), self.routing.stop_id(to)) {
            (Some(from), Some(to)) => self.route_by_id(from, to),
            _ => RouteResult::NotFound,
        }
    }

    /// Fastest itinerary between two stops given by id.
    pub fn route_by_id(&self, from: StopId, to: StopId) -> RouteResult {
        let (Some(from), Some(to)) = (
            self.routing.stop_vertices(from),
            self.routing.stop_vertices(to),
        ) else {
            return RouteResult::NotFound;
        };

        let graph = self.routing.graph();
        let Some(path) = self.solver.build_route(graph, from.wait_start, to.wait_start) else {
            return RouteResult::NotFound;
        };

        let total_time = path.edges.iter().map(|&e| graph.edge(e).weight).sum();
        let items = path
            .edges
            .iter()
            .map(|&e| self.describe(self.routing.edge_kind(e)))
            .collect();

        RouteResult::Found(Itinerary { total_time, items })
    }

    fn describe(&self, kind: &EdgeKind) -> ItineraryItem {
        match *kind {
            EdgeKind::Wait { stop, duration } => ItineraryItem::Wait {
                stop_name: self.routing.stop_name(stop).to_owned(),
                time:      duration,
            },
            EdgeKind::Ride { bus, span_count, duration } => ItineraryItem::Ride {
                bus_name: self.routing.bus_name(bus).to_owned(),
                span_count,
                time: duration,
            },
        }
    }
}
