//! Routing configuration.

use crate::{CoreError, CoreResult};

/// Parameters of the wait-then-ride cost model.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and handed to the routing-graph builder, which keeps
/// its own copy for the lifetime of the graph.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Minutes a passenger waits at a stop before any boarding.  Must be ≥ 0.
    pub bus_wait_time: f64,

    /// Average bus speed in km/h, shared by every ride.  Must be > 0.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Metres in one kilometre.
    pub const METRES_PER_KM: f64 = 1_000.0;
    /// Minutes in one hour.
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self { bus_wait_time, bus_velocity }
    }

    /// Reject values the cost model cannot represent.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.bus_wait_time.is_finite() || self.bus_wait_time < 0.0 {
            return Err(CoreError::Config(format!(
                "bus_wait_time must be a finite value >= 0, got {}",
                self.bus_wait_time
            )));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(CoreError::Config(format!(
                "bus_velocity must be a finite value > 0, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Bus velocity converted to metres per minute.
    #[inline]
    pub fn metres_per_minute(&self) -> f64 {
        self.bus_velocity * Self::METRES_PER_KM / Self::MINUTES_PER_HOUR
    }

    /// Minutes needed to ride `distance_m` metres.
    #[inline]
    pub fn ride_minutes(&self, distance_m: f64) -> f64 {
        distance_m / self.metres_per_minute()
    }
}
