//! Hooks for code living outside the engine.

pub mod events;

pub use events::{ChartEvent, ChartEventContext, ChartEventListener};
