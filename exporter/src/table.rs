//! Projection of job records onto the fixed spreadsheet column order.

use careers_common::{JobRecord, COLUMNS};
use serde_json::{Map, Value};

use crate::ExportError;

/// Jobs sheet column widths are clamped to this range (character units).
pub const MIN_COLUMN_WIDTH: f64 = 15.0;
pub const MAX_COLUMN_WIDTH: f64 = 80.0;

/// Longest string Excel accepts in one cell.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Header plus rows, ready to be written. `None` is a blank cell.
#[derive(Debug, Clone, PartialEq)]
pub struct JobTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl JobTable {
    /// Projects records onto [`COLUMNS`], dropping columns no record carries.
    pub fn project(jobs: &[JobRecord]) -> Result<Self, ExportError> {
        let objects = jobs
            .iter()
            .map(|job| serde_json::from_value::<Map<String, Value>>(serde_json::to_value(job)?))
            .collect::<Result<Vec<_>, _>>()?;

        let columns: Vec<&'static str> = COLUMNS
            .into_iter()
            .filter(|column| objects.iter().any(|object| object.contains_key(*column)))
            .collect();

        let rows = objects
            .iter()
            .map(|object| {
                columns
                    .iter()
                    .map(|column| object.get(*column).and_then(cell_text))
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Non-blank values of one column, in row order.
    pub fn column_values<'a>(&'a self, name: &str) -> Vec<&'a str> {
        let Some(index) = self.columns.iter().position(|column| *column == name) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| row.get(index).and_then(|cell| cell.as_deref()))
            .collect()
    }

    /// Longest cell (header included) plus padding, clamped.
    pub fn column_widths(&self) -> Vec<f64> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let longest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(index).and_then(|cell| cell.as_deref()))
                    .map(|text| text.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0);
                (longest as f64 + 2.0).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
            })
            .collect()
    }
}

/// Empty strings and nulls become blank cells rather than literal text.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(fit_cell(text)),
        other => Some(other.to_string()),
    }
}

/// Cuts text to [`MAX_CELL_CHARS`] on a char boundary.
fn fit_cell(text: &str) -> String {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
