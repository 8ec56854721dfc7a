//! Form-field parsing shared by the one-shot commands and the shell.

use crate::errors::{AppError, AppResult};
use crate::models::SaleItem;
use crate::utils::date;
use chrono::NaiveDate;

/// Parse a money amount. Accepts `1234.50` and `1234,50`.
pub fn parse_amount(s: &str) -> AppResult<f64> {
    let raw = s.trim();
    let normalized = if raw.contains(',') && !raw.contains('.') {
        raw.replace(',', ".")
    } else {
        raw.replace(',', "")
    };

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(AppError::InvalidAmount(s.to_string())),
    }
}

/// Parse `DESC:QTY:PRICE`. The description may itself contain ':'.
pub fn parse_item(s: &str) -> AppResult<SaleItem> {
    let mut parts = s.rsplitn(3, ':');
    let price = parts.next();
    let qty = parts.next();
    let desc = parts.next();

    match (desc, qty, price) {
        (Some(d), Some(q), Some(p)) if !d.trim().is_empty() => {
            let quantity = q
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|q| *q > 0)
                .ok_or_else(|| AppError::InvalidAmount(format!("quantity '{q}' in '{s}'")))?;
            Ok(SaleItem {
                description: d.trim().to_string(),
                quantity,
                unit_price: parse_amount(p)?,
            })
        }
        _ => Err(AppError::InvalidAmount(format!(
            "item '{s}' (expected DESC:QTY:PRICE)"
        ))),
    }
}

/// Items from repeated `--item` flags, or a single line from `--amount`.
pub fn collect_items(
    items: &[String],
    amount: Option<&str>,
    description: &str,
) -> AppResult<Vec<SaleItem>> {
    let mut out = items
        .iter()
        .map(|i| parse_item(i))
        .collect::<AppResult<Vec<_>>>()?;

    if let Some(a) = amount {
        out.push(SaleItem {
            description: description.to_string(),
            quantity: 1,
            unit_price: parse_amount(a)?,
        });
    }

    if out.is_empty() {
        return Err(AppError::InvalidAmount(
            "a sale needs at least one --item or an --amount".into(),
        ));
    }

    let total: f64 = out.iter().map(SaleItem::subtotal).sum();
    if !total.is_finite() {
        return Err(AppError::InvalidAmount("sale total is out of range".into()));
    }
    Ok(out)
}

pub fn parse_date_arg(s: Option<&str>) -> AppResult<NaiveDate> {
    date::parse_date_or_today(s)
        .ok_or_else(|| AppError::InvalidDate(s.unwrap_or_default().to_string()))
}
