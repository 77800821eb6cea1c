use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Which of the two charts a view plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRole {
    Main,
    Navigator,
}

/// Range a view shows before any input arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InitialRange {
    /// Trailing share of the domain, padded at the right edge.
    TrailingShare(f64),
    /// Whole domain, unpadded.
    Full,
}

/// Per-role layout and decimation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRoleConfig {
    pub role: ChartRole,
    pub height: f64,
    /// Top offset of the chart area on the shared surface.
    pub offset_y: f64,
    pub small_set_threshold: usize,
    pub initial_range: InitialRange,
    pub stroke_width: f64,
    pub cursor_enabled: bool,
}

impl ChartRoleConfig {
    #[must_use]
    pub fn main() -> Self {
        Self {
            role: ChartRole::Main,
            height: 280.0,
            offset_y: 0.0,
            small_set_threshold: 400,
            initial_range: InitialRange::TrailingShare(0.3),
            stroke_width: 2.0,
            cursor_enabled: true,
        }
    }

    #[must_use]
    pub fn navigator() -> Self {
        Self {
            role: ChartRole::Navigator,
            height: 45.0,
            offset_y: 300.0,
            small_set_threshold: 100,
            initial_range: InitialRange::Full,
            stroke_width: 1.0,
            cursor_enabled: false,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChartError::InvalidData(
                "chart height must be finite and > 0".to_owned(),
            ));
        }
        if !self.offset_y.is_finite() || self.offset_y < 0.0 {
            return Err(ChartError::InvalidData(
                "chart offset must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let InitialRange::TrailingShare(share) = self.initial_range {
            if !share.is_finite() || share <= 0.0 || share > 1.0 {
                return Err(ChartError::InvalidData(
                    "initial trailing share must be in (0, 1]".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
