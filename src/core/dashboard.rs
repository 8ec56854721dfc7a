use crate::core::aftersales::due_sales;
use crate::core::store::AppState;
use crate::models::{Goal, GoalMetric, VisitStatus};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal: Goal,
    pub achieved: f64,
    /// achieved / target, 0.0 when the target is not positive.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub customers: usize,
    pub sales: usize,
    pub scheduled_visits: usize,
    pub revenue_total: f64,
    pub revenue_month: f64,
    pub due_follow_ups: usize,
    pub goals: Vec<GoalProgress>,
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn in_month(date: NaiveDate, month: Option<&str>) -> bool {
    month.is_none_or(|m| month_key(date) == m)
}

pub fn goal_achieved(state: &AppState, goal: &Goal) -> f64 {
    let month = goal.month.as_deref();
    match goal.metric {
        GoalMetric::Revenue => state
            .sales
            .iter()
            .filter(|s| in_month(s.date, month))
            .map(|s| s.total)
            .sum(),
        GoalMetric::SalesCount => state
            .sales
            .iter()
            .filter(|s| in_month(s.date, month))
            .count() as f64,
        GoalMetric::NewCustomers => state
            .customers
            .iter()
            .filter(|c| c.created_on().is_some_and(|d| in_month(d, month)))
            .count() as f64,
    }
}

pub struct Dashboard;

impl Dashboard {
    pub fn build(state: &AppState, today: NaiveDate) -> DashboardSummary {
        let this_month = month_key(today);

        let goals = state
            .goals
            .iter()
            .map(|g| {
                let achieved = goal_achieved(state, g);
                let ratio = if g.target > 0.0 {
                    achieved / g.target
                } else {
                    0.0
                };
                GoalProgress {
                    goal: g.clone(),
                    achieved,
                    ratio,
                }
            })
            .collect();

        DashboardSummary {
            customers: state.customers.len(),
            sales: state.sales.len(),
            scheduled_visits: state
                .visits
                .iter()
                .filter(|v| v.status == VisitStatus::Scheduled)
                .count(),
            revenue_total: state.sales.iter().map(|s| s.total).sum(),
            revenue_month: state
                .sales
                .iter()
                .filter(|s| month_key(s.date) == this_month)
                .map(|s| s.total)
                .sum(),
            due_follow_ups: due_sales(
                &state.sales,
                today,
                state.settings.contact_interval_days,
            )
            .len(),
            goals,
        }
    }
}
