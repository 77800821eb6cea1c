use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ChartData, ChartRole, Dataset, IdAllocator, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartEventListener};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::navigation::NavigationState;
use super::{ChartEngineConfig, ChartView, FrameReport, FrameScheduler};

/// Reports of one engine update, per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateReport {
    pub main: FrameReport,
    pub navigator: Option<FrameReport>,
    pub navigation_moved: bool,
}

impl UpdateReport {
    #[must_use]
    pub fn is_idle(self) -> bool {
        self.main.is_idle()
            && self.navigator.is_none_or(FrameReport::is_idle)
            && !self.navigation_moved
    }

    #[must_use]
    pub fn paths_updated(self) -> usize {
        self.main.paths_updated + self.navigator.map_or(0, |report| report.paths_updated)
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the main chart view, the optional navigator view over
/// the same dataset, pointer state, event listeners and the rendering
/// surface. The host drives it with one [`ChartEngine::update`] per frame.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) viewport: Viewport,
    pub(super) main: ChartView,
    pub(super) navigator: Option<ChartView>,
    pub(super) navigation: Option<NavigationState>,
    pub(super) interaction: InteractionState,
    pub(super) listeners: Vec<Box<dyn ChartEventListener>>,
    pub(super) rendered: bool,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds the engine over a validated dataset.
    ///
    /// The surface size wins over `config.viewport` when the surface reports
    /// a usable one.
    pub fn new(renderer: R, dataset: Dataset, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;

        let surface = renderer.size();
        let viewport = if surface.is_valid() {
            surface
        } else {
            config.viewport
        };
        let config = ChartEngineConfig { viewport, ..config };

        let mut ids = IdAllocator::new();
        let main = ChartView::new(ids.next_chart_id(), config.main, &dataset, &config);
        let navigator = config
            .navigator
            .map(|role| ChartView::new(ids.next_chart_id(), role, &dataset, &config));
        let navigation = navigator.as_ref().map(|_| {
            NavigationState::new(
                config.navigation_range,
                config.navigation_min_distance,
                config.range_animation,
            )
        });

        info!(
            points = dataset.len(),
            series = dataset.series().len(),
            width = viewport.width,
            height = viewport.height,
            navigator = navigator.is_some(),
            "chart engine created"
        );

        Ok(Self {
            renderer,
            config,
            viewport,
            main,
            navigator,
            navigation,
            interaction: InteractionState::default(),
            listeners: Vec::new(),
            rendered: false,
        })
    }

    /// Parses the column record and builds the engine from it.
    pub fn from_chart_data(
        renderer: R,
        data: ChartData,
        config: ChartEngineConfig,
    ) -> ChartResult<Self> {
        Self::new(renderer, data.into_dataset()?, config)
    }

    /// Produces the first complete frame: paths are created, extremes seeded
    /// without animation, decimation and projection run once.
    pub fn first_render(&mut self) -> ChartResult<UpdateReport> {
        let report = self.update(0.0)?;
        self.rendered = true;
        debug!(paths_updated = report.paths_updated(), "first render complete");
        Ok(report)
    }

    /// Advances animations by `delta_ms` and applies pending work.
    pub fn update(&mut self, delta_ms: f64) -> ChartResult<UpdateReport> {
        let navigation_moved = self.step_navigation(delta_ms);

        let main = FrameScheduler::tick(&mut self.main, delta_ms, &mut self.renderer)?;
        let navigator = match self.navigator.as_mut() {
            Some(view) => Some(FrameScheduler::tick(view, delta_ms, &mut self.renderer)?),
            None => None,
        };
        let report = UpdateReport {
            main,
            navigator,
            navigation_moved,
        };

        if main.range_changed {
            self.emit_range_changed(ChartRole::Main);
        }
        if navigator.is_some_and(|report| report.range_changed) {
            self.emit_range_changed(ChartRole::Navigator);
        }
        if report.paths_updated() > 0 {
            self.emit_event(ChartEvent::FrameRendered {
                paths_updated: report.paths_updated(),
            });
        }
        Ok(report)
    }

    /// Applies a container resize. Range refresh happens on the next update.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        if viewport == self.viewport {
            return Ok(());
        }

        self.viewport = viewport;
        self.config.viewport = viewport;
        self.main.set_render_width(f64::from(width));
        if let Some(navigator) = self.navigator.as_mut() {
            navigator.set_render_width(f64::from(width));
        }
        debug!(width, height, "chart engine resized");
        self.emit_event(ChartEvent::Resized { width, height });
        Ok(())
    }

    /// Re-reads the surface size and resizes when it changed.
    pub fn sync_surface_size(&mut self) -> ChartResult<()> {
        let Viewport { width, height } = self.renderer.size();
        self.resize(width, height)
    }

    #[must_use]
    pub fn has_rendered(&self) -> bool {
        self.rendered
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
