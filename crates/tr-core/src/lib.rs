//! `tr-core`: foundational types for the transit itinerary engine.
//!
//! This crate is a dependency of every other `tr-*` crate.  It has no
//! `tr-*` dependencies and only `thiserror` (plus optional `serde`) from the
//! outside world.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StopId`, `BusId`, `VertexId`, `EdgeId`               |
//! | [`geo`]         | `GeoPoint`, great-circle distance                     |
//! | [`settings`]    | `RoutingSettings` (wait time, bus velocity)           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod settings;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{BusId, EdgeId, StopId, VertexId};
pub use settings::RoutingSettings;
