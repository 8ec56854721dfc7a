//! After-sales follow-up queue.
//!
//! A sale is due for contact when it has not been renewed and at least
//! `contactIntervalDays` have passed since its last contact (or since the
//! sale itself when it was never contacted).

use crate::core::navigation::Navigator;
use crate::core::store::Store;
use crate::db::storage::Storage;
use crate::errors::{AppError, AppResult};
use crate::models::{AfterSaleStatus, Sale};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct DueSale<'a> {
    pub sale: &'a Sale,
    pub days_since: i64,
    pub overdue_days: i64,
}

pub fn days_since(sale: &Sale, today: NaiveDate) -> i64 {
    (today - sale.follow_up_reference()).num_days()
}

pub fn is_due(sale: &Sale, today: NaiveDate, interval_days: u32) -> bool {
    sale.status != AfterSaleStatus::Renewed && days_since(sale, today) >= i64::from(interval_days)
}

/// Due sales, longest-waiting first.
pub fn due_sales(sales: &[Sale], today: NaiveDate, interval_days: u32) -> Vec<DueSale<'_>> {
    let mut due: Vec<DueSale<'_>> = sales
        .iter()
        .filter(|s| is_due(s, today, interval_days))
        .map(|sale| {
            let days = days_since(sale, today);
            DueSale {
                sale,
                days_since: days,
                overdue_days: days - i64::from(interval_days),
            }
        })
        .collect();

    due.sort_by(|a, b| {
        b.days_since
            .cmp(&a.days_since)
            .then_with(|| a.sale.id.cmp(&b.sale.id))
    });
    due
}

pub struct AfterSalesLogic;

impl AfterSalesLogic {
    /// Record a follow-up contact: restarts the interval from `today`.
    pub fn mark_contacted<S: Storage>(
        store: &mut Store<S>,
        sale_id: &str,
        today: NaiveDate,
    ) -> AppResult<()> {
        if store.sale(sale_id).is_none() {
            return Err(AppError::NotFound {
                kind: "Sale",
                id: sale_id.to_string(),
            });
        }

        store.update_sales(|sales| {
            if let Some(s) = sales.iter_mut().find(|s| s.id == sale_id) {
                s.last_contact_date = Some(today);
                s.status = AfterSaleStatus::Contacted;
            }
        })
    }

    /// Route to the sales tab with a new sale for the same customer that
    /// supersedes `sale_id`.
    pub fn renew<S: Storage>(
        store: &Store<S>,
        nav: &mut Navigator,
        sale_id: &str,
    ) -> AppResult<()> {
        let sale = store.sale(sale_id).ok_or_else(|| AppError::NotFound {
            kind: "Sale",
            id: sale_id.to_string(),
        })?;

        nav.navigate_to_new_sale(sale.customer_id.clone(), Some(sale.id.clone()));
        Ok(())
    }
}
