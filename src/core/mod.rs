pub mod animation;
pub mod dataset;
pub mod decimation;
pub mod extrema;
pub mod ids;
pub mod pending;
pub mod projection;
pub mod range_index;
pub mod role;
pub mod series;
pub mod types;
pub mod viewport;

pub use animation::{Easing, Tween, TweenState};
pub use dataset::{ChartData, ColumnCell, ColumnType, Dataset};
pub use decimation::{DecimationParams, DecimationPlan, IndexRun, boost_scale, plan_decimation};
pub use extrema::{ExtremaAnimation, ExtremaTracker, zero_anchored_extremes};
pub use ids::{ChartId, IdAllocator};
pub use pending::{PendingTopic, PendingWork};
pub use projection::{Projection, domain_per_pixel};
pub use range_index::{Bracket, SearchOrder, bracket, nearest_index};
pub use role::{ChartRole, ChartRoleConfig, InitialRange};
pub use series::{Series, SeriesData};
pub use types::{PointKind, RenderPoint, Viewport};
pub use viewport::{RangeAnimationOptions, RangeChange, RangeOptions, ViewportController};
