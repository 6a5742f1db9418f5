//! Append-only directed weighted graph.
//!
//! # Data layout
//!
//! Edges live in one `Vec<Edge>` indexed by `EdgeId`, so ids are simply the
//! insertion position: sequential from 0, never reused.  Each vertex keeps an
//! incidence list of its outgoing `EdgeId`s in insertion order.
//!
//! The vertex count is fixed at construction.  There is no removal and no
//! weight mutation; once the owner stops calling [`WeightedGraph::add_edge`]
//! the graph is effectively frozen.

use tr_core::{EdgeId, VertexId};

use crate::{GraphError, GraphResult};

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed edge.  `weight` is in minutes for the transit model but the
/// graph itself is unit-agnostic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub from:   VertexId,
    pub to:     VertexId,
    pub weight: f64,
}

// ── WeightedGraph ─────────────────────────────────────────────────────────────

/// Fixed-size directed graph with stable sequential edge ids.
///
/// # Example
///
/// ```
/// use tr_core::VertexId;
/// use tr_graph::WeightedGraph;
///
/// let mut g = WeightedGraph::new(2);
/// let e = g.add_edge(VertexId(0), VertexId(1), 2.5).unwrap();
/// assert_eq!(e.0, 0);
/// assert_eq!(g.incident_edges(VertexId(0)).collect::<Vec<_>>(), vec![e]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    edges:           Vec<Edge>,
    incidence_lists: Vec<Vec<EdgeId>>,
}

impl WeightedGraph {
    /// Create a graph whose valid vertex ids are `0..vertex_count`.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges:           Vec::new(),
            incidence_lists: vec![Vec::new(); vertex_count],
        }
    }

    /// Like [`new`](Self::new) but pre-allocates room for `edges` edges.
    pub fn with_capacity(vertex_count: usize, edges: usize) -> Self {
        Self {
            edges:           Vec::with_capacity(edges),
            incidence_lists: vec![Vec::new(); vertex_count],
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.incidence_lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidence_lists.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append a directed edge and return its id.
    ///
    /// Negative weights are stored as given; the shortest-path solver
    /// rejects them when it is built.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> GraphResult<EdgeId> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight { weight });
        }

        let id = EdgeId::try_from(self.edges.len())
            .map_err(|_| GraphError::TooLarge(self.edges.len()))?;
        self.edges.push(Edge { from, to, weight });
        self.incidence_lists[from.index()].push(id);
        Ok(id)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// The edge stored under `id`.
    ///
    /// # Panics
    /// Panics if `id` was not returned by this graph's `add_edge`.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Like [`edge`](Self::edge) but returns `None` for unknown ids.
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Outgoing edge ids of `vertex` in insertion order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range.
    #[inline]
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence_lists[vertex.index()].iter().copied()
    }

    /// Out-degree of `vertex`.
    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.incidence_lists[vertex.index()].len()
    }

    fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if vertex.index() < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
