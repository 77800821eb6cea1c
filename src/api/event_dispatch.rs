use crate::core::ChartRole;
use crate::extensions::{ChartEvent, ChartEventContext};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn event_context(&self) -> ChartEventContext {
        ChartEventContext {
            viewport: self.viewport,
            visible_range: self.main.viewport().range(),
            visible_indexes: self.main.viewport().indexes(),
            current_extremes: self.main.extrema().current(),
            navigation_range: self.navigation_range(),
            visible_series: self.main.visible_series_count(),
            animating: self.is_animating(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let context = self.event_context();
        for listener in &mut self.listeners {
            listener.on_event(&event, context);
        }
    }

    pub(super) fn emit_range_changed(&mut self, role: ChartRole) {
        let view = match role {
            ChartRole::Main => Some(&self.main),
            ChartRole::Navigator => self.navigator.as_ref(),
        };
        let Some((min, max)) = view.map(|view| view.viewport().range()) else {
            return;
        };
        self.emit_event(ChartEvent::RangeChanged { role, min, max });
    }
}
