//! Query results handed to the presentation layer.
//!
//! With the `serde` feature, items serialize in the request protocol's shape:
//!
//! ```json
//! {"type": "Wait", "stop_name": "Biryulyovo", "time": 6.0}
//! {"type": "Bus", "bus": "297", "span_count": 2, "time": 5.235}
//! ```

/// One leg of an itinerary.  Times are in minutes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(tag = "type"))]
pub enum ItineraryItem {
    #[cfg_attr(feature = "serde", serde(rename = "Wait"))]
    Wait { stop_name: String, time: f64 },

    #[cfg_attr(feature = "serde", serde(rename = "Bus"))]
    Ride {
        #[cfg_attr(feature = "serde", serde(rename = "bus"))]
        bus_name:   String,
        span_count: u32,
        time:       f64,
    },
}

impl ItineraryItem {
    pub fn time(&self) -> f64 {
        match self {
            ItineraryItem::Wait { time, .. } | ItineraryItem::Ride { time, .. } => *time,
        }
    }
}

/// A complete fastest itinerary.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Itinerary {
    /// Sum of all item times, in minutes.
    pub total_time: f64,
    pub items: Vec<ItineraryItem>,
}

impl Itinerary {
    /// `true` for a stop-to-itself query.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of `Ride` legs.
    pub fn ride_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, ItineraryItem::Ride { .. }))
            .count()
    }
}

/// Outcome of a route query.
///
/// Unknown stop names and unreachable destinations both yield `NotFound`;
/// callers that need to tell them apart check stop existence first.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum RouteResult {
    NotFound,
    Found(Itinerary),
}

impl RouteResult {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteResult::Found(_))
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            RouteResult::Found(it) => Some(it),
            RouteResult::NotFound => None,
        }
    }

    pub fn into_itinerary(self) -> Option<Itinerary> {
        match self {
            RouteResult::Found(it) => Some(it),
            RouteResult::NotFound => None,
        }
    }
}
