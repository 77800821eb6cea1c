use chrono::{DateTime, Datelike, Utc};
use smallvec::SmallVec;

use crate::extensions::ChartEvent;
use crate::render::{Color, Renderer};

use super::{ChartEngine, ChartView};

/// Value of one series at the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorEntry {
    pub label: String,
    pub name: String,
    pub color: Color,
    pub visible: bool,
    pub y: f64,
    pub pixel_y: f64,
}

/// Everything a cursor label and its point markers need.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorSnapshot {
    pub index: usize,
    pub x: f64,
    pub pixel_x: f64,
    /// `x` read as milliseconds since the Unix epoch.
    pub date: Option<DateTime<Utc>>,
    /// Set when the visible range spans more than one calendar year.
    pub show_year: bool,
    pub entries: SmallVec<[CursorEntry; 4]>,
}

impl CursorSnapshot {
    /// Short date heading such as `Sat, Mar 4`, with the year appended when
    /// [`Self::show_year`] is set.
    #[must_use]
    pub fn date_label(&self) -> Option<String> {
        let date = self.date?;
        let format = if self.show_year {
            "%a, %b %-d, %Y"
        } else {
            "%a, %b %-d"
        };
        Some(date.format(format).to_string())
    }
}

fn millis_to_date(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(value.round() as i64)
}

impl ChartView {
    /// Cursor state for the current frame, if the cursor is over the chart.
    #[must_use]
    pub fn cursor_snapshot(&self) -> Option<CursorSnapshot> {
        let index = self.cursor_index()?;
        let axis = self.viewport().axis();
        let x = *axis.get(index)?;
        let projection = self.projection();

        let (range_min, range_max) = self.viewport().range();
        let show_year = match (millis_to_date(range_min), millis_to_date(range_max)) {
            (Some(start), Some(end)) => start.year() != end.year(),
            _ => false,
        };

        let entries = self
            .series()
            .iter()
            .map(|series| {
                let y = series.values()[index];
                CursorEntry {
                    label: series.label().to_owned(),
                    name: series.name().to_owned(),
                    color: series.color(),
                    visible: series.is_visible(),
                    y,
                    pixel_y: projection.project_y(y),
                }
            })
            .collect();

        Some(CursorSnapshot {
            index,
            x,
            pixel_x: projection.project_x(x),
            date: millis_to_date(x),
            show_year,
            entries,
        })
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Moves the cursor to the point nearest `pixel_x` on the main chart.
    pub fn cursor_move(&mut self, pixel_x: f64) -> Option<CursorSnapshot> {
        self.interaction.on_pointer_move(pixel_x);
        let previous = self.main.cursor_index();
        let index = self.main.move_cursor(pixel_x)?;
        if previous != Some(index) {
            self.emit_event(ChartEvent::CursorMoved { index });
        }
        self.main.cursor_snapshot()
    }

    pub fn cursor_leave(&mut self) {
        self.interaction.on_pointer_leave();
        if self.main.cursor_index().is_some() {
            self.main.clear_cursor();
            self.emit_event(ChartEvent::CursorLeft);
        }
    }

    #[must_use]
    pub fn cursor_snapshot(&self) -> Option<CursorSnapshot> {
        self.main.cursor_snapshot()
    }
}
