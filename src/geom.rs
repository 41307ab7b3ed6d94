//! Planar geometry primitives: screen points, map coordinates, and the
//! distance and rounding helpers the draft relies on.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A map coordinate. Treated as a plain planar pair for distance math.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    #[must_use]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Offset this coordinate by `delta`, component-wise.
    #[must_use]
    pub fn offset(self, delta: Delta) -> Self {
        Self { lng: self.lng + delta.dlng, lat: self.lat + delta.dlat }
    }

    /// The offset that takes `from` to `self`.
    #[must_use]
    pub fn delta_from(self, from: LngLat) -> Delta {
        Delta { dlng: self.lng - from.lng, dlat: self.lat - from.lat }
    }

    /// Snap both components to `precision` decimal places.
    #[must_use]
    pub fn snapped(self, precision: u32) -> Self {
        Self { lng: round_to(self.lng, precision), lat: round_to(self.lat, precision) }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// Coordinate as a `[lng, lat]` pair.
    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

/// A translation in map space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dlng: f64,
    pub dlat: f64,
}

impl Delta {
    #[must_use]
    pub fn new(dlng: f64, dlat: f64) -> Self {
        Self { dlng, dlat }
    }
}

/// Round `value` to `precision` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

/// Distance from `p` to the closest point on segment `a`-`b`.
///
/// A degenerate segment (`a == b`) measures the distance to `a`.
#[must_use]
pub fn distance_to_segment(p: LngLat, a: LngLat, b: LngLat) -> f64 {
    let (dx, dy) = (b.lng - a.lng, b.lat - a.lat);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return (p.lng - a.lng).hypot(p.lat - a.lat);
    }
    let t = (((p.lng - a.lng) * dx + (p.lat - a.lat) * dy) / len_sq).clamp(0.0, 1.0);
    let (cx, cy) = (a.lng + t * dx, a.lat + t * dy);
    (p.lng - cx).hypot(p.lat - cy)
}
