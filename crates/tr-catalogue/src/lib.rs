//! `tr-catalogue`: stops, bus routes, road distances, and CSV loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`catalogue`] | `TransportCatalogue`, `Stop`, `Bus`, `BusStats`           |
//! | [`loader`]    | `load_catalogue_dir`, `load_catalogue_reader`             |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`                    |
//!
//! # Route model (summary)
//!
//! A bus is an ordered stop sequence.  Round-trip buses are stored as given
//! (the caller repeats the first stop at the end).  Linear buses are stored
//! mirrored, so a bus entered as `A - B - C` is kept as `A B C B A`:
//!
//! ```text
//! stored = given ++ reverse(given[..len-1])
//! ```
//!
//! Every consumer (statistics, routing graph) therefore walks a single
//! forward sequence and never needs to know which kind of bus it was.

pub mod catalogue;
pub mod error;
pub mod loader;


pub use catalogue::{Bus, BusStats, Stop, TransportCatalogue};
pub use error::{CatalogueError, CatalogueResult};
pub use loader::{load_catalogue_dir, load_catalogue_reader};
