use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

fn bad(msg: &str) -> AppError {
    AppError::InvalidDate(msg.to_string())
}

/// First and last day of a single period: YYYY, YYYY-MM or YYYY-MM-DD.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| bad(p))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad(p))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad(p))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (ys, ms) = p.split_once('-').ok_or_else(|| bad(p))?;
            let y: i32 = ys.parse().map_err(|_| bad(p))?;
            let m: u32 = ms.parse().map_err(|_| bad(p))?;
            let last = month_last_day(y, m).ok_or_else(|| bad(p))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| bad(p))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| bad(p))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad(p))?;
            Ok((d, d))
        }
        _ => Err(bad(p)),
    }
}

/// Parse --range.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - start:end, both sides in the same format
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(bad("start and end must have the same format"));
        }

        let (d1, _) = period_bounds(start)?;
        let (_, d2) = period_bounds(end)?;
        if d1 > d2 {
            return Err(bad(r));
        }
        return Ok((d1, d2));
    }

    period_bounds(r.trim())
}

/// `None` or "all" means no filtering.
pub fn parse_optional_range(r: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match r {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => parse_range(v).map(Some),
    }
}

pub fn in_bounds(date: NaiveDate, bounds: Option<(NaiveDate, NaiveDate)>) -> bool {
    bounds.is_none_or(|(start, end)| date >= start && date <= end)
}
