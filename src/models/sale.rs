use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// After-sales state of a sale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AfterSaleStatus {
    #[default]
    Pending,
    Contacted,
    /// Superseded by a newer sale for the same customer.
    Renewed,
}

impl AfterSaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AfterSaleStatus::Pending => "pending",
            AfterSaleStatus::Contacted => "contacted",
            AfterSaleStatus::Renewed => "renewed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl SaleItem {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub customer_id: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(default)]
    pub items: Vec<SaleItem>,
    pub total: f64,
    #[serde(default)]
    pub status: AfterSaleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Sale {
    /// Build a sale whose total is the sum of its items.
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        date: NaiveDate,
        items: Vec<SaleItem>,
    ) -> Self {
        let total = items.iter().map(SaleItem::subtotal).sum();
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            date,
            items,
            total,
            status: AfterSaleStatus::Pending,
            last_contact_date: None,
            notes: None,
        }
    }

    /// Date the follow-up interval is measured from.
    pub fn follow_up_reference(&self) -> NaiveDate {
        self.last_contact_date.unwrap_or(self.date)
    }
}
