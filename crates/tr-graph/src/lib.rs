//! `tr-graph`: weighted digraph and all-pairs shortest paths.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `WeightedGraph`, `Edge`                                     |
//! | [`apsp`]    | `AllPairsRouter` (Floyd–Warshall), `PathInfo`               |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Relaxes the rows of each pass in parallel via `rayon`.   |

pub mod apsp;
pub mod error;
pub mod graph;


pub use apsp::{AllPairsRouter, PathInfo};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, WeightedGraph};
