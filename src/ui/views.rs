//! Text renderings of the state slices, one per tab.
//!
//! Renderers return `String` so both the one-shot commands and the shell can
//! print them. Missing customers referenced by a sale render as a placeholder.

use crate::core::aftersales::DueSale;
use crate::core::customers::CustomerLogic;
use crate::core::dashboard::{DashboardSummary, GoalProgress};
use crate::core::sales::SalesLogic;
use crate::core::store::AppState;
use crate::models::{Customer, Sale, Settings, Visit};
use crate::utils::colors::{RESET, color_for_ratio};
use crate::utils::formatting::{or_dash, percent, wrap_notes};
use crate::utils::money;
use crate::utils::table::Table;
use std::collections::BTreeMap;

pub fn customers_table(customers: &[&Customer], show_notes: bool) -> String {
    if customers.is_empty() {
        return "No customers.\n".to_string();
    }

    let mut table = Table::with_headers(&["ID", "NAME", "PHONE", "EMAIL", "CITY"]);
    for c in customers {
        table.add_row(vec![
            c.id.clone(),
            c.name.clone(),
            or_dash(Some(c.phone.as_str())),
            or_dash(c.email.as_deref()),
            or_dash(c.city.as_deref()),
        ]);
    }

    let mut out = table.render();
    if show_notes {
        for c in customers.iter().filter(|c| c.notes.is_some()) {
            out.push_str(&format!("\n{} ({}):\n", c.name, c.id));
            for line in wrap_notes(c.notes.as_deref().unwrap_or_default(), 72) {
                out.push_str(&format!("    {line}\n"));
            }
        }
    }
    out
}

pub fn sales_table(sales: &[Sale], customers: &[Customer], currency: &str) -> String {
    if sales.is_empty() {
        return "No sales.\n".to_string();
    }

    let mut table =
        Table::with_headers(&["ID", "DATE", "CUSTOMER", "ITEMS", "TOTAL", "AFTER-SALES"]);
    for s in SalesLogic::newest_first(sales) {
        table.add_row(vec![
            s.id.clone(),
            s.date.to_string(),
            CustomerLogic::display_name(customers, &s.customer_id).to_string(),
            s.items.len().to_string(),
            money(currency, s.total),
            s.status.as_str().to_string(),
        ]);
    }

    let total: f64 = sales.iter().map(|s| s.total).sum();
    format!("{}\nTotal: {}\n", table.render(), money(currency, total))
}

pub fn sale_detail(sale: &Sale, customers: &[Customer], currency: &str) -> String {
    let mut out = format!(
        "Sale {} | {} | {}\n",
        sale.id,
        sale.date,
        CustomerLogic::display_name(customers, &sale.customer_id)
    );

    let mut table = Table::with_headers(&["DESCRIPTION", "QTY", "UNIT", "SUBTOTAL"]);
    for item in &sale.items {
        table.add_row(vec![
            item.description.clone(),
            item.quantity.to_string(),
            money(currency, item.unit_price),
            money(currency, item.subtotal()),
        ]);
    }
    out.push_str(&table.render());
    out.push_str(&format!("Total: {}\n", money(currency, sale.total)));
    if let Some(n) = &sale.notes {
        out.push_str(&format!("Notes: {n}\n"));
    }
    out
}

pub fn due_table(due: &[DueSale<'_>], customers: &[Customer], currency: &str) -> String {
    if due.is_empty() {
        return "No follow-ups due.\n".to_string();
    }

    let mut table = Table::with_headers(&[
        "SALE", "CUSTOMER", "PHONE", "SALE DATE", "LAST CONTACT", "DAYS", "OVERDUE", "TOTAL",
    ]);
    for d in due {
        let customer = customers.iter().find(|c| c.id == d.sale.customer_id);
        table.add_row(vec![
            d.sale.id.clone(),
            CustomerLogic::display_name(customers, &d.sale.customer_id).to_string(),
            or_dash(customer.map(|c| c.phone.as_str())),
            d.sale.date.to_string(),
            or_dash(d.sale.last_contact_date.map(|x| x.to_string()).as_deref()),
            d.days_since.to_string(),
            d.overdue_days.to_string(),
            money(currency, d.sale.total),
        ]);
    }
    table.render()
}

pub fn visits_table(visits: &[&Visit]) -> String {
    if visits.is_empty() {
        return "No visits.\n".to_string();
    }

    let mut table = Table::with_headers(&["ID", "DATE", "TIME", "CONTACT", "ADDRESS", "STATUS"]);
    for v in visits {
        table.add_row(vec![
            v.id.clone(),
            v.date.to_string(),
            or_dash(v.time.map(|t| t.format("%H:%M").to_string()).as_deref()),
            v.contact_name.clone(),
            or_dash(v.address.as_deref()),
            v.status.as_str().to_string(),
        ]);
    }
    table.render()
}

pub fn goals_table(progress: &[GoalProgress], currency: &str) -> String {
    if progress.is_empty() {
        return "No goals.\n".to_string();
    }

    let mut table =
        Table::with_headers(&["ID", "GOAL", "METRIC", "PERIOD", "ACHIEVED", "TARGET", "PROGRESS"]);
    for p in progress {
        let fmt_value = |v: f64| match p.goal.metric {
            crate::models::GoalMetric::Revenue => money(currency, v),
            _ => format!("{v:.0}"),
        };
        table.add_row(vec![
            p.goal.id.clone(),
            p.goal.title.clone(),
            p.goal.metric.label().to_string(),
            p.goal.month.clone().unwrap_or_else(|| "all time".to_string()),
            fmt_value(p.achieved),
            fmt_value(p.goal.target),
            percent(p.ratio),
        ]);
    }
    table.render()
}

pub fn dashboard(summary: &DashboardSummary, settings: &Settings, currency: &str) -> String {
    let mut out = format!("Hello, {}!\n\n", settings.user_name);
    out.push_str(&format!("Customers:            {}\n", summary.customers));
    out.push_str(&format!("Sales:                {}\n", summary.sales));
    out.push_str(&format!(
        "Revenue (total):      {}\n",
        money(currency, summary.revenue_total)
    ));
    out.push_str(&format!(
        "Revenue (this month): {}\n",
        money(currency, summary.revenue_month)
    ));
    out.push_str(&format!("Scheduled visits:     {}\n", summary.scheduled_visits));
    out.push_str(&format!(
        "Follow-ups due:       {} (every {} days)\n",
        summary.due_follow_ups, settings.contact_interval_days
    ));

    if !summary.goals.is_empty() {
        out.push_str("\nGoals:\n");
        for p in &summary.goals {
            out.push_str(&format!(
                "  {}{:>5}{} {}\n",
                color_for_ratio(p.ratio),
                percent(p.ratio),
                RESET,
                p.goal.title
            ));
        }
    }
    out
}

/// Revenue per month and best customers.
pub fn report(state: &AppState, currency: &str) -> String {
    if state.sales.is_empty() {
        return "No sales to report.\n".to_string();
    }

    let mut by_month: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    let mut by_customer: BTreeMap<&str, f64> = BTreeMap::new();
    for s in &state.sales {
        let e = by_month.entry(s.date.format("%Y-%m").to_string()).or_default();
        e.0 += 1;
        e.1 += s.total;
        *by_customer.entry(s.customer_id.as_str()).or_default() += s.total;
    }

    let mut months = Table::with_headers(&["MONTH", "SALES", "REVENUE"]);
    for (month, (count, revenue)) in &by_month {
        months.add_row(vec![month.clone(), count.to_string(), money(currency, *revenue)]);
    }

    let mut ranked: Vec<(&str, f64)> = by_customer.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut top = Table::with_headers(&["CUSTOMER", "REVENUE"]);
    for (id, revenue) in ranked.into_iter().take(5) {
        top.add_row(vec![
            CustomerLogic::display_name(&state.customers, id).to_string(),
            money(currency, revenue),
        ]);
    }

    format!(
        "Revenue by month:\n{}\nTop customers:\n{}",
        months.render(),
        top.render()
    )
}

pub fn settings_view(settings: &Settings) -> String {
    format!(
        "User name:        {}\nEmail:            {}\nTheme:            {}\nContact interval: {} days\n",
        settings.user_name,
        settings.email,
        settings.theme.as_str(),
        settings.contact_interval_days
    )
}
