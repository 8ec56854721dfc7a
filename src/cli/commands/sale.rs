use crate::cli::commands::{AppStore, log_op, open_session};
use crate::cli::forms::{collect_items, parse_date_arg};
use crate::cli::parser::SaleAction;
use crate::config::Config;
use crate::core::navigation::Navigator;
use crate::core::sales::{NewSale, SaleDraft, SalesLogic};
use crate::errors::{AppError, AppResult};
use crate::export::range::{in_bounds, parse_optional_range};
use crate::models::Sale;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use crate::ui::views;
use crate::utils::ids::new_id;
use crate::utils::money;

/// Complete the new-sale form on the sales tab: deliver the pending intent,
/// create the sale, then report completion to the navigator. When the sale
/// is rejected the intent stays pending.
pub fn record(store: &mut AppStore, nav: &mut Navigator, draft: SaleDraft) -> AppResult<NewSale> {
    let intent = nav.take_sales_intent();
    match SalesLogic::create(store, draft, intent.clone()) {
        Ok(created) => {
            nav.on_sale_created();
            Ok(created)
        }
        Err(e) => {
            if let Some(i) = intent {
                nav.restore_intent(i);
            }
            Err(e)
        }
    }
}

/// The sale to replace must exist and belong to `customer_id`.
pub fn check_replacement(store: &AppStore, sale_id: &str, customer_id: &str) -> AppResult<()> {
    let old = store.sale(sale_id).ok_or_else(|| AppError::NotFound {
        kind: "Sale",
        id: sale_id.to_string(),
    })?;

    if old.customer_id != customer_id {
        return Err(AppError::ForeignSale {
            sale_id: sale_id.to_string(),
            customer_id: customer_id.to_string(),
        });
    }
    Ok(())
}

pub fn announce(store: &AppStore, sale: &Sale, currency: &str) {
    let customer = store
        .customer(&sale.customer_id)
        .map(|c| c.name.as_str())
        .unwrap_or_default();

    log_op(
        store,
        "add",
        &sale.id,
        &format!("Sale of {} to '{}'", money(currency, sale.total), customer),
    );
    success(format!(
        "Sale {} recorded: {} for {}.",
        sale.id,
        money(currency, sale.total),
        customer
    ));
}

pub fn new_sale_id(store: &AppStore) -> String {
    new_id(|candidate| store.sale(candidate).is_some())
}

pub fn handle(action: &SaleAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_session(cfg)?;

    match action {
        SaleAction::Add {
            customer,
            date,
            items,
            amount,
            description,
            replace,
            notes,
            id,
        } => {
            if let Some(old) = replace {
                check_replacement(&store, old, customer)?;
            }

            let draft = SaleDraft {
                id: id.clone().unwrap_or_else(|| new_sale_id(&store)),
                customer_id: None,
                date: parse_date_arg(date.as_deref())?,
                items: collect_items(items, amount.as_deref(), description)?,
                notes: notes.clone(),
            };

            let mut nav = Navigator::new();
            nav.navigate_to_new_sale(customer.clone(), replace.clone());

            let created = record(&mut store, &mut nav, draft)?;
            announce(&store, &created.sale, &cfg.currency_symbol);
            if let Some(old) = created.renewed {
                info(format!("Sale {} marked as renewed.", old));
            }
        }

        SaleAction::List { customer, period } => {
            let bounds = parse_optional_range(period.as_deref())?;
            let listed: Vec<Sale> = store
                .sales()
                .iter()
                .filter(|s| customer.as_ref().is_none_or(|c| &s.customer_id == c))
                .filter(|s| in_bounds(s.date, bounds))
                .cloned()
                .collect();

            print!(
                "{}",
                views::sales_table(&listed, store.customers(), &cfg.currency_symbol)
            );
        }

        SaleAction::Show { id } => {
            let sale = store.sale(id).ok_or_else(|| AppError::NotFound {
                kind: "Sale",
                id: id.clone(),
            })?;
            print!(
                "{}",
                views::sale_detail(sale, store.customers(), &cfg.currency_symbol)
            );
        }

        SaleAction::Del { id, yes } => {
            if store.sale(id).is_none() {
                warning(format!("Sale not found: {}", id));
                return Ok(());
            }

            if !*yes && !ask_confirmation(&format!("Delete sale {}?", id)) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = SalesLogic::delete(&mut store, id)?;
            log_op(
                &store,
                "del",
                id,
                &format!("Sale of {} deleted", money(&cfg.currency_symbol, removed.total)),
            );
            success(format!("Sale {} deleted.", id));
        }
    }

    Ok(())
}
