// Map viewport: the visible region, as a center plus an angular span.

use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE_DELTA};
use crate::directory::Coordinate;

/// Angular extent of a viewport in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Span {
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude_delta.is_finite()
            && self.longitude_delta.is_finite()
            && self.latitude_delta > 0.0
            && self.longitude_delta > 0.0
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE_DELTA)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Coordinate,
    pub span: Span,
}

impl Viewport {
    pub fn new(center: Coordinate, span: Span) -> Self {
        Self { center, span }
    }

    /// Viewport around `center` with the default span.
    pub fn around(center: Coordinate) -> Self {
        Self::new(center, Span::default())
    }
}
