//! Cell styles and the `Jobs` sheet writer.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Worksheet};

use crate::table::JobTable;
use crate::ExportError;

pub const JOBS_SHEET: &str = "Jobs";

/// Data rows are tall enough for a few wrapped lines.
pub const DATA_ROW_HEIGHT: f64 = 60.0;

const HEADER_FILL: u32 = 0x366092;

pub(crate) struct Styles {
    pub header: Format,
    pub data: Format,
    pub summary_header: Format,
    pub section: Format,
}

impl Styles {
    pub fn new() -> Self {
        let header = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_font_size(12)
            .set_background_color(Color::RGB(HEADER_FILL))
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);

        let data = Format::new()
            .set_align(FormatAlign::Top)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);

        let summary_header = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(HEADER_FILL));

        Self {
            header,
            data,
            summary_header,
            section: Format::new().set_bold(),
        }
    }
}

pub(crate) fn jobs_sheet(table: &JobTable, styles: &Styles) -> Result<Worksheet, ExportError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(JOBS_SHEET)?;

    for (col, name) in table.columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &styles.header)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let row_num = index as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Some(text) => sheet.write_string_with_format(row_num, col as u16, text, &styles.data)?,
                None => sheet.write_blank(row_num, col as u16, &styles.data)?,
            };
        }
        sheet.set_row_height(row_num, DATA_ROW_HEIGHT)?;
    }

    for (col, width) in table.column_widths().into_iter().enumerate() {
        sheet.set_column_width(col as u16, width)?;
    }

    Ok(sheet)
}
