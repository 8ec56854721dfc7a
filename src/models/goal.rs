use serde::{Deserialize, Serialize};

/// What a goal measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum GoalMetric {
    Revenue,
    SalesCount,
    NewCustomers,
}

impl GoalMetric {
    pub fn label(&self) -> &'static str {
        match self {
            GoalMetric::Revenue => "revenue",
            GoalMetric::SalesCount => "sales",
            GoalMetric::NewCustomers => "new customers",
        }
    }
}

/// Dashboard target. `month` is "YYYY-MM"; `None` means all time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub metric: GoalMetric,
    pub target: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}
