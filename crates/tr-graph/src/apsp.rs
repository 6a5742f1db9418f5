//! All-pairs shortest paths (Floyd–Warshall) with path reconstruction.
//!
//! # Table layout
//!
//! Distances live in one flat `Vec` of `V × V` slots indexed by
//! `from * V + to`.  Each slot is `None` (no path known) or a `RouteEntry`
//! holding the best weight and the last edge of that path.  Walking the
//! `prev_edge` links backward through row `from` yields the whole path, so no
//! per-pair edge list is ever stored.
//!
//! # Lifecycle
//!
//! [`AllPairsRouter::build`] is the only constructor and runs the full
//! O(V³) solve before returning, so there is no "unbuilt" router to misuse.
//! The router never mutates afterward and is `Send + Sync`.
//!
//! # Relaxation order
//!
//! Passes run for `through = 0, 1, …, V-1`, each one seeing every update of
//! the passes before it.  Within a pass, candidates replace an entry only when
//! strictly lighter, so on ties the first path found wins.  With the
//! `parallel` feature the rows of one pass are relaxed concurrently; row
//! `through` itself cannot change during its own pass (the diagonal is 0 and
//! weights are non-negative), which makes the result identical to the
//! sequential order.

use std::time::Instant;

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use tr_core::{EdgeId, VertexId};

use crate::graph::WeightedGraph;
use crate::{GraphError, GraphResult};

// ── PathInfo ──────────────────────────────────────────────────────────────────

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo {
    /// Total weight of the path.
    pub weight: f64,
    /// Edges to traverse in order, from source to destination.
    pub edges: Vec<EdgeId>,
}

impl PathInfo {
    /// `true` if the source and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Table entry ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct RouteEntry {
    weight: f64,
    /// Last edge of the best known path; `EdgeId::INVALID` on the diagonal.
    prev_edge: EdgeId,
}

// ── AllPairsRouter ────────────────────────────────────────────────────────────

/// Shortest path between every ordered vertex pair of a frozen graph.
pub struct AllPairsRouter {
    vertex_count: usize,
    edge_count:   usize,
    table:        Vec<Option<RouteEntry>>,
}

impl AllPairsRouter {
    /// Solve all pairs over `graph`.
    ///
    /// Fails with [`GraphError::NegativeWeight`] on the first negative edge.
    /// Time O(V³), memory O(V²).
    pub fn build(graph: &WeightedGraph) -> GraphResult<Self> {
        let started = Instant::now();
        let n = graph.vertex_count();
        let slots = n.checked_mul(n).ok_or(GraphError::TooLarge(n))?;

        let mut table = vec![None; slots];
        initialize(graph, &mut table)?;

        for through in 0..n {
            relax_through(&mut table, n, through);
        }

        debug!(
            "all-pairs table built: {} vertices, {} edges in {:.3} s",
            n,
            graph.edge_count(),
            started.elapsed().as_secs_f64()
        );

        Ok(Self {
            vertex_count: n,
            edge_count: graph.edge_count(),
            table,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Weight of the shortest path `from → to`, or `None` when `to` is
    /// unreachable or either vertex is out of range.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.entry(from, to).map(|e| e.weight)
    }

    /// Reconstruct the shortest path `from → to`.
    ///
    /// `graph` must be the graph this router was built from; it supplies the
    /// source vertex of each edge during the backward walk.
    pub fn build_route(
        &self,
        graph: &WeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<PathInfo> {
        debug_assert_eq!(graph.vertex_count(), self.vertex_count);
        debug_assert_eq!(graph.edge_count(), self.edge_count);

        let entry = self.entry(from, to)?;

        let mut edges = Vec::new();
        let mut prev = entry.prev_edge;
        while prev.is_valid() {
            edges.push(prev);
            debug_assert!(edges.len() <= self.vertex_count, "predecessor cycle");
            let source = graph.edge(prev).from;
            prev = self
                .entry(from, source)
                .map_or(EdgeId::INVALID, |e| e.prev_edge);
        }
        edges.reverse();

        Some(PathInfo { weight: entry.weight, edges })
    }

    #[inline]
    fn entry(&self, from: VertexId, to: VertexId) -> Option<RouteEntry> {
        let (f, t) = (from.index(), to.index());
        if f >= self.vertex_count || t >= self.vertex_count {
            return None;
        }
        self.table[f * self.vertex_count + t]
    }
}

// ── Floyd–Warshall internals ──────────────────────────────────────────────────

/// Seed the diagonal and the direct edges.  Parallel edges keep the lightest.
fn initialize(graph: &WeightedGraph, table: &mut [Option<RouteEntry>]) -> GraphResult<()> {
    let n = graph.vertex_count();

    for v in 0..n {
        table[v * n + v] = Some(RouteEntry { weight: 0.0, prev_edge: EdgeId::INVALID });

        for edge_id in graph.incident_edges(VertexId(v as u32)) {
            let edge = graph.edge(edge_id);
            if edge.weight < 0.0 {
                return Err(GraphError::NegativeWeight { edge: edge_id, weight: edge.weight });
            }

            let slot = &mut table[v * n + edge.to.index()];
            if slot.is_none_or(|r| r.weight > edge.weight) {
                *slot = Some(RouteEntry { weight: edge.weight, prev_edge: edge_id });
            }
        }
    }
    Ok(())
}

fn relax_through(table: &mut [Option<RouteEntry>], n: usize, through: usize) {
    // Snapshot of row `through`; equal to the live row for the whole pass.
    let through_row: Vec<Option<RouteEntry>> = table[through * n..(through + 1) * n].to_vec();

    #[cfg(feature = "parallel")]
    table
        .par_chunks_mut(n)
        .for_each(|row| relax_row(row, through, &through_row));

    #[cfg(not(feature = "parallel"))]
    for row in table.chunks_mut(n) {
        relax_row(row, through, &through_row);
    }
}

fn relax_row(row: &mut [Option<RouteEntry>], through: usize, through_row: &[Option<RouteEntry>]) {
    let Some(route_from) = row[through] else {
        return;
    };

    for (to, route_to) in through_row.iter().enumerate() {
        let Some(route_to) = route_to else {
            continue;
        };

        let candidate = route_from.weight + route_to.weight;
        let slot = &mut row[to];
        if slot.is_none_or(|r| candidate < r.weight) {
            let prev_edge = if route_to.prev_edge.is_valid() {
                route_to.prev_edge
            } else {
                route_from.prev_edge
            };
            *slot = Some(RouteEntry { weight: candidate, prev_edge });
        }
    }
}
