use crate::core::store::AppState;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{CustomerExport, ExportRow, SaleExport, VisitExport};
use crate::export::range::{in_bounds, parse_optional_range};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportTarget};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export one collection.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"`, or YYYY / YYYY-MM / YYYY-MM-DD and
    ///   `start:end` ranges of the same shape. Sales and visits filter on
    ///   their date, customers on their creation date.
    ///
    /// Returns the number of exported rows.
    pub fn export(
        state: &AppState,
        target: ExportTarget,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = parse_optional_range(range)?;

        match target {
            ExportTarget::Customers => {
                let rows: Vec<CustomerExport> = state
                    .customers
                    .iter()
                    .filter(|c| bounds.is_none() || c.created_on().is_some_and(|d| in_bounds(d, bounds)))
                    .map(CustomerExport::from)
                    .collect();
                write_rows(&rows, target, format, path, force)
            }
            ExportTarget::Sales => {
                let rows: Vec<SaleExport> = state
                    .sales
                    .iter()
                    .filter(|s| in_bounds(s.date, bounds))
                    .map(|s| SaleExport::new(s, &state.customers))
                    .collect();
                write_rows(&rows, target, format, path, force)
            }
            ExportTarget::Visits => {
                let rows: Vec<VisitExport> = state
                    .visits
                    .iter()
                    .filter(|v| in_bounds(v.date, bounds))
                    .map(VisitExport::from)
                    .collect();
                write_rows(&rows, target, format, path, force)
            }
        }
    }

    /// Human title for an export range, used in messages.
    pub fn range_title(range: Option<(NaiveDate, NaiveDate)>) -> String {
        match range {
            None => "all records".to_string(),
            Some((a, b)) if a == b => format!("{a}"),
            Some((a, b)) => format!("{a} to {b}"),
        }
    }
}

fn write_rows<T: ExportRow>(
    rows: &[T],
    target: ExportTarget,
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<usize> {
    if rows.is_empty() {
        warning(format!("No {} found for selected range.", target.as_str()));
        return Ok(0);
    }

    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
        ExportFormat::Xlsx => export_xlsx(rows, target.as_str(), path)?,
    }

    Ok(rows.len())
}
