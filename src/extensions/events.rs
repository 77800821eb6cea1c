use serde::{Deserialize, Serialize};

use crate::core::{ChartRole, Viewport};

/// Read-only state snapshot passed to listeners with every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEventContext {
    pub viewport: Viewport,
    pub visible_range: (f64, f64),
    pub visible_indexes: (usize, usize),
    pub current_extremes: (f64, f64),
    pub navigation_range: Option<(f64, f64)>,
    pub visible_series: usize,
    pub animating: bool,
}

/// Events published by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    RangeChanged {
        role: ChartRole,
        min: f64,
        max: f64,
    },
    NavigationRangeChanged {
        min: f64,
        max: f64,
    },
    SeriesVisibilityChanged {
        label: String,
        visible: bool,
    },
    CursorMoved {
        index: usize,
    },
    CursorLeft,
    Resized {
        width: u32,
        height: u32,
    },
    FrameRendered {
        paths_updated: usize,
    },
}

/// Subscriber interface for engine events.
///
/// Listeners observe events and read engine context without mutating engine
/// internals directly.
pub trait ChartEventListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: ChartEventContext);
}
