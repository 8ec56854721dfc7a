use crate::core::navigation::NewSaleIntent;
use crate::core::store::Store;
use crate::db::storage::Storage;
use crate::errors::{AppError, AppResult};
use crate::models::{AfterSaleStatus, Sale, SaleItem};
use chrono::NaiveDate;

/// Form data for a new sale. `customer_id` may be left empty when a
/// navigation intent preselects the customer.
#[derive(Debug, Clone)]
pub struct SaleDraft {
    pub id: String,
    pub customer_id: Option<String>,
    pub date: NaiveDate,
    pub items: Vec<SaleItem>,
    pub notes: Option<String>,
}

/// Result of [`SalesLogic::create`]: the new sale and the id of the sale it
/// superseded, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub sale: Sale,
    pub renewed: Option<String>,
}

pub struct SalesLogic;

impl SalesLogic {
    /// Create a sale from `draft`, applying a delivered navigation intent.
    ///
    /// An explicit `draft.customer_id` wins over the preselected customer.
    /// When the intent names a sale of the same customer to replace, that
    /// sale is flagged `renewed` (it leaves the follow-up queue); nothing
    /// links the two. A replacement belonging to another customer is ignored.
    pub fn create<S: Storage>(
        store: &mut Store<S>,
        draft: SaleDraft,
        intent: Option<NewSaleIntent>,
    ) -> AppResult<NewSale> {
        let (preselected, replacing) = match intent {
            Some(i) => (Some(i.customer_id), i.replacing_sale_id),
            None => (None, None),
        };

        let customer_id = draft
            .customer_id
            .or(preselected)
            .ok_or(AppError::NoCustomerSelected)?;

        if store.customer(&customer_id).is_none() {
            return Err(AppError::NotFound {
                kind: "Customer",
                id: customer_id,
            });
        }

        if store.sale(&draft.id).is_some() {
            return Err(AppError::Duplicate {
                kind: "Sale",
                id: draft.id,
            });
        }

        let mut sale = Sale::new(draft.id, customer_id, draft.date, draft.items);
        sale.notes = draft.notes;

        if !sale.total.is_finite() || sale.items.iter().any(|i| !i.subtotal().is_finite()) {
            return Err(AppError::InvalidAmount(format!(
                "total of sale {} is out of range",
                sale.id
            )));
        }

        let renewed = replacing.filter(|old_id| {
            store
                .sale(old_id)
                .is_some_and(|old| old.customer_id == sale.customer_id)
        });

        let created = sale.clone();
        store.update_sales(|sales| {
            if let Some(old_id) = renewed.as_deref()
                && let Some(old) = sales.iter_mut().find(|s| s.id == old_id)
            {
                old.status = AfterSaleStatus::Renewed;
            }
            sales.push(sale);
        })?;

        Ok(NewSale {
            sale: created,
            renewed,
        })
    }

    pub fn delete<S: Storage>(store: &mut Store<S>, sale_id: &str) -> AppResult<Sale> {
        let removed = store.sale(sale_id).cloned().ok_or_else(|| AppError::NotFound {
            kind: "Sale",
            id: sale_id.to_string(),
        })?;

        store.update_sales(|sales| sales.retain(|s| s.id != sale_id))?;
        Ok(removed)
    }

    /// Sales sorted newest first.
    pub fn newest_first(sales: &[Sale]) -> Vec<&Sale> {
        let mut out: Vec<&Sale> = sales.iter().collect();
        out.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        out
    }
}
