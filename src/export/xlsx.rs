use crate::errors::{AppError, AppResult};
use crate::export::model::{Cell, ExportRow};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_WIDTH: usize = 10;

/// Export XLSX with a styled header, banded rows and fitted column widths.
pub(crate) fn export_xlsx<T: ExportRow>(rows: &[T], sheet: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = T::headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x0284C7))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xE0F2FE);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, item) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in item.cells().iter().enumerate() {
            let width = write_cell(worksheet, row, col as u16, cell, band)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(width);
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    let target = path
        .to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))?;
    workbook.save(target).map_err(to_app_error)?;

    notify_export_success("XLSX", rows.len(), path);
    Ok(())
}

fn base_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Write one cell and return its display width.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<usize> {
    match cell {
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &base_format(bg))
                .map_err(to_app_error)?;
            Ok(UnicodeWidthStr::width(s.as_str()))
        }
        Cell::Number(n) => {
            let fmt = base_format(bg).set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_app_error)?;
            Ok(format!("{n:.2}").len())
        }
        Cell::Date(d) => {
            let fmt = base_format(bg).set_num_format("yyyy-mm-dd");
            worksheet
                .write_with_format(row, col, excel_serial(*d), &fmt)
                .map_err(to_app_error)?;
            Ok(DATE_WIDTH)
        }
        Cell::Empty => {
            worksheet
                .write_blank(row, col, &base_format(bg))
                .map_err(to_app_error)?;
            Ok(0)
        }
    }
}

/// Days since the Excel epoch (1899-12-30).
fn excel_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
