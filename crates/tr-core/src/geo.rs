//! Geographic coordinate type and great-circle distance.
//!
//! Stop positions only feed route statistics (geographic length, curvature),
//! never edge weights, so `f64` is used to keep curvature ratios stable for
//! short urban segments.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Mean Earth radius in metres.
    pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if latitude is in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Coordinates closer than this (in degrees, per axis) are the same place.
    pub const SAME_PLACE_DEG: f64 = 1e-7;

    /// `true` if both axes differ by less than [`SAME_PLACE_DEG`](Self::SAME_PLACE_DEG).
    pub fn same_place(self, other: GeoPoint) -> bool {
        (self.lat - other.lat).abs() < Self::SAME_PLACE_DEG
            && (self.lon - other.lon).abs() < Self::SAME_PLACE_DEG
    }

    /// Great-circle distance in metres by the spherical law of cosines.
    ///
    /// Points at the [same place](Self::same_place) return exactly 0.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        if self.same_place(other) {
            return 0.0;
        }

        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_lon = (self.lon - other.lon).abs().to_radians();

        // Rounding can push the cosine just past 1 for very close points.
        let cos_angle = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos())
            .clamp(-1.0, 1.0);
        cos_angle.acos() * Self::EARTH_RADIUS_M
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
