//! `tr-routing`: routing graph construction and itinerary queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`builder`]   | `RoutingGraphBuilder`, `RoutingGraph`, `EdgeKind`, `StopVertices` |
//! | [`router`]    | `TransportRouter`: eager all-pairs build, name-based queries          |
//! | [`itinerary`] | `RouteResult`, `Itinerary`, `ItineraryItem`                     |
//! | [`error`]     | `RoutingError`, `RoutingResult<T>`                              |
//!
//! # Graph model (wait-then-ride)
//!
//! Every stop owns two vertices:
//!
//! ```text
//!   wait_start ──(bus_wait_time)──▶ wait_end
//!      ▲                               │
//!      │      ride edges (one per      │
//!      └──── reachable stop pair) ◀────┘
//! ```
//!
//! A passenger arrives at `wait_start`, pays the wait once to reach
//! `wait_end`, then rides any number of spans on one bus to the `wait_start`
//! of the alighting stop.  Transfers pay the wait again.  Queries go from the
//! origin's `wait_start` to the destination's `wait_start`, so no wait is
//! charged after arriving.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Parallel all-pairs build (`tr-graph/parallel`).         |
//! | `serde`    | `Serialize` on itineraries and statistics.              |

pub mod builder;
pub mod error;
pub mod itinerary;
pub mod router;

#[cfg(test)]
mod tests;

pub use builder::{EdgeKind, RoutingGraph, RoutingGraphBuilder, StopVertices};
pub use error::{RoutingError, RoutingResult};
pub use itinerary::{Itinerary, ItineraryItem, RouteResult};
pub use router::TransportRouter;
