use serde::{Deserialize, Serialize};

use crate::core::RenderPoint;

const PIXEL_CLAMP: f64 = 1e6;

/// Domain units per pixel for `range` spread over `width` pixels.
///
/// Degenerate inputs (empty range, zero width, non-finite values) fall back
/// to `1.0` so callers never divide by zero.
#[must_use]
pub fn domain_per_pixel(range: (f64, f64), width: f64) -> f64 {
    let span = range.1 - range.0;
    if !span.is_finite() || span <= 0.0 || !width.is_finite() || width <= 0.0 {
        return 1.0;
    }
    span / width
}

/// Affine mapping from domain/value space onto chart pixels.
///
/// The y axis grows downwards: `max` of the extremes lands on pixel `0` and
/// `min` lands on `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    domain_start: f64,
    domain_per_pixel: f64,
    value_min: f64,
    value_per_pixel: f64,
    height: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            domain_start: 0.0,
            domain_per_pixel: 1.0,
            value_min: 0.0,
            value_per_pixel: 1.0,
            height: 1.0,
        }
    }
}

impl Projection {
    #[must_use]
    pub fn new(range: (f64, f64), width: f64, extremes: (f64, f64), height: f64) -> Self {
        let height = if height.is_finite() && height > 0.0 {
            height
        } else {
            1.0
        };
        let value_span = extremes.1 - extremes.0;
        let value_span = if value_span.is_finite() && value_span > 0.0 {
            value_span
        } else {
            1.0
        };

        Self {
            domain_start: range.0,
            domain_per_pixel: domain_per_pixel(range, width),
            value_min: extremes.0,
            value_per_pixel: value_span / height,
            height,
        }
    }

    #[must_use]
    pub fn domain_per_pixel(self) -> f64 {
        self.domain_per_pixel
    }

    #[must_use]
    pub fn value_per_pixel(self) -> f64 {
        self.value_per_pixel
    }

    #[must_use]
    pub fn project_x(self, x: f64) -> f64 {
        clamp_pixel((x - self.domain_start) / self.domain_per_pixel)
    }

    #[must_use]
    pub fn project_y(self, y: f64) -> f64 {
        clamp_pixel(self.height - (y - self.value_min) / self.value_per_pixel)
    }

    pub fn project_points(self, points: &mut [RenderPoint]) {
        for point in points {
            point.pixel_x = self.project_x(point.x);
            point.pixel_y = self.project_y(point.y);
        }
    }
}

fn clamp_pixel(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-PIXEL_CLAMP, PIXEL_CLAMP)
}
