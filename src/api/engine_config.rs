use serde::{Deserialize, Serialize};

use crate::core::{ChartRoleConfig, ExtremaAnimation, RangeAnimationOptions, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    /// Minimum pixel distance between two decimated points.
    #[serde(default = "default_grouping_pixels")]
    pub grouping_pixels: f64,
    /// Soft-stop padding at the data edges, in pixels.
    #[serde(default = "default_padding_px")]
    pub padding_px: f64,
    #[serde(default = "default_boost_limit")]
    pub boost_limit: usize,
    #[serde(default)]
    pub range_animation: RangeAnimationOptions,
    #[serde(default)]
    pub extrema_animation: ExtremaAnimation,
    #[serde(default = "ChartRoleConfig::main")]
    pub main: ChartRoleConfig,
    /// `None` builds the engine without a navigator view.
    #[serde(default = "default_navigator")]
    pub navigator: Option<ChartRoleConfig>,
    #[serde(default = "default_navigation_range")]
    pub navigation_range: (f64, f64),
    #[serde(default = "default_navigation_min_distance")]
    pub navigation_min_distance: f64,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::new(800, 345))
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            grouping_pixels: default_grouping_pixels(),
            padding_px: default_padding_px(),
            boost_limit: default_boost_limit(),
            range_animation: RangeAnimationOptions::default(),
            extrema_animation: ExtremaAnimation::default(),
            main: ChartRoleConfig::main(),
            navigator: default_navigator(),
            navigation_range: default_navigation_range(),
            navigation_min_distance: default_navigation_min_distance(),
        }
    }

    #[must_use]
    pub fn with_grouping_pixels(mut self, grouping_pixels: f64) -> Self {
        self.grouping_pixels = grouping_pixels;
        self
    }

    #[must_use]
    pub fn with_padding_px(mut self, padding_px: f64) -> Self {
        self.padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_main(mut self, main: ChartRoleConfig) -> Self {
        self.main = main;
        self
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: Option<ChartRoleConfig>) -> Self {
        self.navigator = navigator;
        self
    }

    #[must_use]
    pub fn with_extrema_animation(mut self, animation: ExtremaAnimation) -> Self {
        self.extrema_animation = animation;
        self
    }

    #[must_use]
    pub fn with_range_animation(mut self, animation: RangeAnimationOptions) -> Self {
        self.range_animation = animation;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.grouping_pixels.is_finite() || self.grouping_pixels <= 0.0 {
            return Err(ChartError::InvalidData(
                "grouping pixels must be finite and > 0".to_owned(),
            ));
        }
        if !self.padding_px.is_finite() || self.padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "padding pixels must be finite and >= 0".to_owned(),
            ));
        }
        for duration in [
            self.range_animation.duration_ms,
            self.extrema_animation.duration_ms,
        ] {
            if !duration.is_finite() || duration < 0.0 {
                return Err(ChartError::InvalidData(
                    "animation duration must be finite and >= 0".to_owned(),
                ));
            }
        }
        let (nav_min, nav_max) = self.navigation_range;
        if !(0.0..=1.0).contains(&nav_min) || !(0.0..=1.0).contains(&nav_max) || nav_min >= nav_max
        {
            return Err(ChartError::InvalidData(
                "navigation range must satisfy 0 <= min < max <= 1".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.navigation_min_distance) {
            return Err(ChartError::InvalidData(
                "navigation min distance must be in [0, 1]".to_owned(),
            ));
        }

        self.main.validate()?;
        if let Some(navigator) = self.navigator {
            navigator.validate()?;
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_grouping_pixels() -> f64 {
    2.0
}

fn default_padding_px() -> f64 {
    13.0
}

fn default_boost_limit() -> usize {
    500
}

fn default_navigator() -> Option<ChartRoleConfig> {
    Some(ChartRoleConfig::navigator())
}

fn default_navigation_range() -> (f64, f64) {
    (0.7, 1.0)
}

fn default_navigation_min_distance() -> f64 {
    0.05
}
