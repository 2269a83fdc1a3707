//! Distance functions for navigation graphs
//!
//! A graph picks exactly one [`Metric`] at construction time. The same metric
//! prices default edge costs and drives the A* heuristic, so the heuristic
//! stays admissible.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the great-circle metric
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A 2-D position.
///
/// Planar graphs read `(x, y)` directly. Geographic graphs store longitude
/// in `x` and latitude in `y`, matching how fixes are plotted on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Planar position in caller units
    pub fn planar(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Geographic position in degrees
    pub fn geographic(latitude: f64, longitude: f64) -> Self {
        Position {
            x: longitude,
            y: latitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.y
    }

    pub fn longitude(&self) -> f64 {
        self.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Euclidean distance between two planar positions
pub fn planar_distance(a: Position, b: Position) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Haversine distance in kilometers between two geographic positions.
///
/// No range validation: longitudes that wrap past ±180° still work.
pub fn great_circle_distance(a: Position, b: Position) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude() - a.longitude()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1.0 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance function a graph is configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Straight-line distance in caller units
    #[default]
    Planar,
    /// Haversine distance in kilometers
    GreatCircle,
}

impl Metric {
    pub fn distance(&self, a: Position, b: Position) -> f64 {
        match self {
            Metric::Planar => planar_distance(a, b),
            Metric::GreatCircle => great_circle_distance(a, b),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Planar => "planar",
            Metric::GreatCircle => "great-circle",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
