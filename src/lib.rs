//! chart-viewport: viewport indexing, adaptive decimation and extrema
//! interpolation for zoomable time-series line charts.
//!
//! `core` holds the pure building blocks (range search, decimation,
//! extremes, projection, viewport state). `api` composes them into chart
//! views driven once per frame by the [`FrameScheduler`], behind the
//! [`ChartEngine`] facade. Drawing is delegated to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartView, FrameScheduler};
pub use error::{ChartError, ChartResult};
