use serde::{Deserialize, Serialize};

use crate::core::ChartId;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// `#31a8dc`, used when the data source names no color.
    pub const DEFAULT_SERIES: Self = Self::rgb(49.0 / 255.0, 168.0 / 255.0, 220.0 / 255.0);
    /// `#cccccc`, the vertical cursor line.
    pub const CURSOR: Self = Self::rgb(0.8, 0.8, 0.8);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            _ if !digits.is_ascii() => {
                return Err(ChartError::InvalidData(format!(
                    "color `{input}` is not valid hex"
                )));
            }
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "color `{input}` must be #rgb or #rrggbb"
                )));
            }
        };

        let channel = |offset: usize| -> ChartResult<f64> {
            u8::from_str_radix(&expanded[offset..offset + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidData(format!("color `{input}` is not valid hex")))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats the color as `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// What a surface path is used for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathKind {
    Series { label: String },
    Cursor,
}

/// Creation parameters for one surface path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub chart_id: ChartId,
    pub kind: PathKind,
    pub color: Color,
    pub stroke_width: f64,
    /// Vertical offset of the owning chart area on the surface.
    pub offset_y: f64,
}

impl PathStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.offset_y.is_finite() {
            return Err(ChartError::InvalidData(
                "path offset must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
