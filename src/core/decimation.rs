use serde::{Deserialize, Serialize};

use crate::core::RenderPoint;

/// Tuning inputs for one decimation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecimationParams {
    /// Minimum on-screen distance, in pixels, between two emitted points.
    pub grouping_pixels: f64,
    /// Domain units covered by one pixel at the current zoom.
    pub domain_per_pixel: f64,
    /// Brackets with fewer points than this are emitted untouched.
    pub small_set_threshold: usize,
    /// Datasets up to this size never boost the grouping distance.
    pub boost_limit: usize,
}

impl Default for DecimationParams {
    fn default() -> Self {
        Self {
            grouping_pixels: 2.0,
            domain_per_pixel: 1.0,
            small_set_threshold: 400,
            boost_limit: 500,
        }
    }
}

/// Inclusive run of consecutive axis indices rendered as one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRun {
    pub start: usize,
    pub end: usize,
}

impl IndexRun {
    #[must_use]
    pub const fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub const fn is_single(self) -> bool {
        self.start == self.end
    }
}

/// Index selection shared by every series of one chart.
///
/// Planned once from the shared x axis and materialized per series, so the
/// grouping decision is made a single time per frame regardless of the
/// number of series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecimationPlan {
    /// Every point of the inclusive interval is rendered as is.
    Interval { start: usize, end: usize },
    /// Ordered runs, each rendered as one point or one group.
    Runs(Vec<IndexRun>),
}

impl Default for DecimationPlan {
    fn default() -> Self {
        Self::Runs(Vec::new())
    }
}

impl DecimationPlan {
    /// Number of points this plan renders.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Interval { start, end } => end - start + 1,
            Self::Runs(runs) => runs.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Runs(runs) if runs.is_empty())
    }

    #[must_use]
    pub fn first_index(&self) -> Option<usize> {
        match self {
            Self::Interval { start, .. } => Some(*start),
            Self::Runs(runs) => runs.first().map(|run| run.start),
        }
    }

    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        match self {
            Self::Interval { end, .. } => Some(*end),
            Self::Runs(runs) => runs.last().map(|run| run.end),
        }
    }

    /// Materializes the plan over one series, averaging grouped runs.
    #[must_use]
    pub fn points(&self, x: &[f64], y: &[f64]) -> Vec<RenderPoint> {
        let mut points = Vec::with_capacity(self.len());
        self.points_into(x, y, &mut points);
        points
    }

    /// Same as [`Self::points`] but reuses an existing buffer.
    pub fn points_into(&self, x: &[f64], y: &[f64], output: &mut Vec<RenderPoint>) {
        output.clear();
        match self {
            Self::Interval { start, end } => {
                output.extend(
                    (*start..=*end).map(|index| RenderPoint::single(x[index], y[index])),
                );
            }
            Self::Runs(runs) => {
                output.extend(runs.iter().map(|run| {
                    if run.is_single() {
                        return RenderPoint::single(x[run.start], y[run.start]);
                    }
                    let len = run.len();
                    let count = len as f64;
                    let mean_x = x[run.start..=run.end].iter().sum::<f64>() / count;
                    let mean_y = y[run.start..=run.end].iter().sum::<f64>() / count;
                    RenderPoint::group(mean_x, mean_y, len)
                }));
            }
        }
    }
}

/// Multiplier applied to the grouping distance for large datasets.
///
/// Small datasets keep `1`. Past `boost_limit` the multiplier grows with the
/// visible share of the dataset, reaching `2` when the whole axis is in view,
/// so wide zoom-outs over huge series get sparser output while deep zoom-ins
/// stay at full pixel density.
#[must_use]
pub fn boost_scale(visible_len: usize, total_len: usize, boost_limit: usize) -> f64 {
    if total_len <= boost_limit || total_len == 0 {
        return 1.0;
    }
    let visible_share = (visible_len as f64 / total_len as f64).clamp(0.0, 1.0);
    1.0 + visible_share
}

/// Plans the renderable subset of `x[start..=end]`.
///
/// `start`/`end` are the already-expanded bracket. The first and last indices
/// are always emitted as single points; everything between them is grouped so
/// that consecutive emitted points sit at least
/// `boost * grouping_pixels * domain_per_pixel` apart on the domain axis.
#[must_use]
pub fn plan_decimation(
    x: &[f64],
    start: usize,
    end: usize,
    params: DecimationParams,
) -> DecimationPlan {
    if x.is_empty() || start > end || end >= x.len() {
        return DecimationPlan::default();
    }

    let span_len = end - start + 1;
    if span_len < params.small_set_threshold {
        return DecimationPlan::Interval { start, end };
    }

    let boost = boost_scale(span_len, x.len(), params.boost_limit);
    let limit = (boost * params.grouping_pixels * params.domain_per_pixel).max(0.0);

    let mut runs = Vec::new();
    runs.push(IndexRun::single(start));
    if span_len == 1 {
        return DecimationPlan::Runs(runs);
    }

    let interior_end = end - 1;
    let mut group_start = start + 1;
    let mut index = group_start + 1;
    while index <= interior_end {
        if x[index] - x[group_start] >= limit {
            runs.push(IndexRun {
                start: group_start,
                end: index - 1,
            });
            group_start = index;
        }
        index += 1;
    }
    if group_start <= interior_end {
        runs.push(IndexRun {
            start: group_start,
            end: interior_end,
        });
    }

    runs.push(IndexRun::single(end));
    DecimationPlan::Runs(runs)
}
