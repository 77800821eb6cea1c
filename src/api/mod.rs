mod chart_view;
mod cursor;
mod engine;
mod engine_accessors;
mod engine_config;
mod event_dispatch;
mod frame_scheduler;
mod interaction_controller;
mod listener_registry;
mod navigation;
mod range_controller;
mod series_visibility;

pub use chart_view::ChartView;
pub use cursor::{CursorEntry, CursorSnapshot};
pub use engine::{ChartEngine, UpdateReport};
pub use engine_config::ChartEngineConfig;
pub use frame_scheduler::{FrameReport, FrameScheduler};
pub use navigation::{NavigationSide, NavigationState};
