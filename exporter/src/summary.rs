//! Layout of the `Summary` sheet: run metadata plus per-category and
//! per-location job counts.

use careers_common::CaptureInfo;
use rust_xlsxwriter::Worksheet;

use crate::sheets::Styles;
use crate::table::{JobTable, MIN_COLUMN_WIDTH};
use crate::ExportError;

pub const SUMMARY_SHEET: &str = "Summary";

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Empty,
    Text(String),
    Count(usize),
}

impl SummaryValue {
    fn display_len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Text(text) => text.chars().count(),
            Self::Count(count) => count.to_string().len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Header,
    Section,
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub value: SummaryValue,
    pub style: RowStyle,
}

impl SummaryRow {
    fn plain(label: impl Into<String>, value: SummaryValue) -> Self {
        Self {
            label: label.into(),
            value,
            style: RowStyle::Plain,
        }
    }

    fn section(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: SummaryValue::Empty,
            style: RowStyle::Section,
        }
    }

    fn blank() -> Self {
        Self::plain("", SummaryValue::Empty)
    }
}

/// Builds the summary rows in display order.
pub fn summary_rows(table: &JobTable, capture: &CaptureInfo) -> Vec<SummaryRow> {
    let mut rows = vec![
        SummaryRow {
            label: "Metric".to_string(),
            value: SummaryValue::Text("Value".to_string()),
            style: RowStyle::Header,
        },
        SummaryRow::plain("Total Jobs", SummaryValue::Count(table.len())),
        SummaryRow::plain(
            "Scraping Date",
            SummaryValue::Text(capture.captured_at.clone()),
        ),
        SummaryRow::plain("Source", SummaryValue::Text(capture.source_name.clone())),
        SummaryRow::plain("Source URL", SummaryValue::Text(capture.source_url.clone())),
    ];

    for (title, column) in [
        ("Jobs by Category", "JobCategory"),
        ("Jobs by Location", "Location"),
    ] {
        rows.push(SummaryRow::blank());
        rows.push(SummaryRow::section(title));
        rows.extend(
            value_counts(table.column_values(column))
                .into_iter()
                .map(|(value, count)| {
                    SummaryRow::plain(format!("  {value}"), SummaryValue::Count(count))
                }),
        );
    }

    rows
}

/// Counts distinct values, most frequent first; ties keep first-seen order.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(seen, _)| seen.as_str() == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub(crate) fn summary_sheet(rows: &[SummaryRow], styles: &Styles) -> Result<Worksheet, ExportError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(SUMMARY_SHEET)?;

    for (index, row) in rows.iter().enumerate() {
        let row_num = index as u32;
        let format = match row.style {
            RowStyle::Header => Some(&styles.summary_header),
            RowStyle::Section => Some(&styles.section),
            RowStyle::Plain => None,
        };

        if !row.label.is_empty() {
            match format {
                Some(format) => sheet.write_string_with_format(row_num, 0, &row.label, format)?,
                None => sheet.write_string(row_num, 0, &row.label)?,
            };
        }

        match (&row.value, format) {
            (SummaryValue::Empty, Some(format)) => {
                sheet.write_blank(row_num, 1, format)?;
            }
            (SummaryValue::Empty, None) => {}
            (SummaryValue::Text(text), Some(format)) => {
                sheet.write_string_with_format(row_num, 1, text, format)?;
            }
            (SummaryValue::Text(text), None) => {
                sheet.write_string(row_num, 1, text)?;
            }
            (SummaryValue::Count(count), Some(format)) => {
                sheet.write_number_with_format(row_num, 1, *count as f64, format)?;
            }
            (SummaryValue::Count(count), None) => {
                sheet.write_number(row_num, 1, *count as f64)?;
            }
        }
    }

    let label_width = rows.iter().map(|row| row.label.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|row| row.value.display_len()).max().unwrap_or(0);
    sheet.set_column_width(0, summary_width(label_width))?;
    sheet.set_column_width(1, summary_width(value_width))?;

    Ok(sheet)
}

/// Summary columns have a floor but no ceiling.
fn summary_width(longest: usize) -> f64 {
    (longest as f64 + 2.0).max(MIN_COLUMN_WIDTH)
}
