use crate::cli::commands::sale::{announce, new_sale_id, record};
use crate::cli::commands::{log_op, open_session};
use crate::cli::forms::{collect_items, parse_date_arg};
use crate::cli::parser::AfterSalesAction;
use crate::config::Config;
use crate::core::aftersales::{AfterSalesLogic, due_sales};
use crate::core::navigation::Navigator;
use crate::core::sales::SaleDraft;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::views;
use crate::utils::date::today;

pub fn handle(action: &AfterSalesAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_session(cfg)?;

    match action {
        AfterSalesAction::List => {
            let interval = store.settings().contact_interval_days;
            let due = due_sales(store.sales(), today(), interval);

            info(format!("Follow-up interval: {} days", interval));
            print!(
                "{}",
                views::due_table(&due, store.customers(), &cfg.currency_symbol)
            );
        }

        AfterSalesAction::Contact { sale_id, date } => {
            let when = parse_date_arg(date.as_deref())?;
            AfterSalesLogic::mark_contacted(&mut store, sale_id, when)?;

            log_op(&store, "contact", sale_id, &format!("Follow-up contact on {}", when));
            success(format!("Contact on {} recorded for sale {}.", when, sale_id));
        }

        AfterSalesAction::Renew {
            sale_id,
            date,
            items,
            amount,
            description,
        } => {
            let mut nav = Navigator::new();
            AfterSalesLogic::renew(&store, &mut nav, sale_id)?;

            let draft = SaleDraft {
                id: new_sale_id(&store),
                customer_id: None,
                date: parse_date_arg(date.as_deref())?,
                items: collect_items(items, amount.as_deref(), description)?,
                notes: None,
            };

            let created = record(&mut store, &mut nav, draft)?;
            log_op(&store, "renew", sale_id, &format!("Renewed by sale {}", created.sale.id));
            announce(&store, &created.sale, &cfg.currency_symbol);
            info(format!("Sale {} marked as renewed.", sale_id));
        }
    }

    Ok(())
}
