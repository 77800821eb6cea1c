use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SeriesData;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Role marker attached to every column label in [`ChartData::types`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    X,
    Line,
    Area,
    Bar,
}

/// One cell of a column: the leading label or a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnCell {
    Value(f64),
    Label(String),
}

/// Column-oriented chart record as delivered by the data source.
///
/// Each column starts with its label, followed by values aligned by index.
/// Exactly one column is typed [`ColumnType::X`] and provides the shared axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub columns: Vec<Vec<ColumnCell>>,
    pub types: IndexMap<String, ColumnType>,
    #[serde(default)]
    pub names: IndexMap<String, String>,
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

impl ChartData {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data json: {e}")))
    }

    /// Splits the record into the shared axis and validated series.
    pub fn into_dataset(self) -> ChartResult<Dataset> {
        let mut axis = None;
        let mut series = Vec::new();

        for column in &self.columns {
            let (label, values) = split_column(column)?;
            let column_type = self.types.get(label).copied().ok_or_else(|| {
                ChartError::InvalidData(format!("column `{label}` has no type"))
            })?;

            if column_type == ColumnType::X {
                if axis.is_some() {
                    return Err(ChartError::InvalidData(
                        "chart data must contain exactly one x column".to_owned(),
                    ));
                }
                axis = Some(values);
                continue;
            }

            let color = match self.colors.get(label) {
                Some(hex) => Color::from_hex(hex)?,
                None => Color::DEFAULT_SERIES,
            };
            let name = self
                .names
                .get(label)
                .cloned()
                .unwrap_or_else(|| label.to_owned());
            series.push(
                SeriesData::new(label, values)
                    .with_name(name)
                    .with_color(color),
            );
        }

        let axis = axis.ok_or_else(|| {
            ChartError::InvalidData("chart data has no x column".to_owned())
        })?;
        Dataset::new(axis, series)
    }
}

fn split_column(column: &[ColumnCell]) -> ChartResult<(&str, Vec<f64>)> {
    let Some((ColumnCell::Label(label), cells)) = column.split_first() else {
        return Err(ChartError::InvalidData(
            "every column must start with its label".to_owned(),
        ));
    };

    let values = cells
        .iter()
        .map(|cell| match cell {
            ColumnCell::Value(value) => Ok(*value),
            ColumnCell::Label(text) => Err(ChartError::InvalidData(format!(
                "column `{label}` contains non-numeric value `{text}`"
            ))),
        })
        .collect::<ChartResult<Vec<_>>>()?;
    Ok((label.as_str(), values))
}

/// Validated chart input: one non-decreasing axis and equally long series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    axis: Arc<[f64]>,
    series: Vec<SeriesData>,
}

impl Dataset {
    pub fn new(axis: Vec<f64>, series: Vec<SeriesData>) -> ChartResult<Self> {
        if axis.is_empty() {
            return Err(ChartError::InvalidData("x axis must not be empty".to_owned()));
        }
        if axis.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "x axis values must be finite".to_owned(),
            ));
        }
        if axis.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(ChartError::InvalidData(
                "x axis must be sorted in non-decreasing order".to_owned(),
            ));
        }

        validate_series(axis.len(), &series)?;

        debug!(points = axis.len(), series = series.len(), "dataset loaded");
        Ok(Self {
            axis: axis.into(),
            series,
        })
    }

    #[must_use]
    pub fn axis(&self) -> &Arc<[f64]> {
        &self.axis
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesData] {
        &self.series
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.axis.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }
}

fn validate_series(axis_len: usize, series: &[SeriesData]) -> ChartResult<()> {
    let mut labels = HashSet::with_capacity(series.len());
    for data in series {
        if data.values.len() != axis_len {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has {} values but the x axis has {}",
                data.label,
                data.values.len(),
                axis_len
            )));
        }
        if !labels.insert(data.label.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "duplicate series label `{}`",
                data.label
            )));
        }
    }
    Ok(())
}
