//! Flat export rows, one struct per collection.

use crate::core::customers::CustomerLogic;
use crate::models::{Customer, Sale, Visit};
use chrono::NaiveDate;
use serde::Serialize;

/// A typed spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Empty,
}

impl Cell {
    fn opt_text(v: &Option<String>) -> Self {
        match v {
            Some(s) if !s.is_empty() => Cell::Text(s.clone()),
            _ => Cell::Empty,
        }
    }
}

pub trait ExportRow: Serialize {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<Cell>;
}

#[derive(Serialize, Clone, Debug)]
pub struct CustomerExport {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub created_at: String,
}

impl From<&Customer> for CustomerExport {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
            city: c.city.clone(),
            created_at: c.created_at.clone(),
        }
    }
}

impl ExportRow for CustomerExport {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "phone", "email", "address", "city", "created_at"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.id.clone()),
            Cell::Text(self.name.clone()),
            Cell::Text(self.phone.clone()),
            Cell::opt_text(&self.email),
            Cell::opt_text(&self.address),
            Cell::opt_text(&self.city),
            Cell::Text(self.created_at.clone()),
        ]
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct SaleExport {
    pub id: String,
    pub date: NaiveDate,
    pub customer_id: String,
    pub customer_name: String,
    pub items: usize,
    pub total: f64,
    pub status: String,
    pub last_contact_date: Option<NaiveDate>,
}

impl SaleExport {
    pub fn new(sale: &Sale, customers: &[Customer]) -> Self {
        Self {
            id: sale.id.clone(),
            date: sale.date,
            customer_id: sale.customer_id.clone(),
            customer_name: CustomerLogic::display_name(customers, &sale.customer_id).to_string(),
            items: sale.items.len(),
            total: sale.total,
            status: sale.status.as_str().to_string(),
            last_contact_date: sale.last_contact_date,
        }
    }
}

impl ExportRow for SaleExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "date",
            "customer_id",
            "customer_name",
            "items",
            "total",
            "status",
            "last_contact_date",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.id.clone()),
            Cell::Date(self.date),
            Cell::Text(self.customer_id.clone()),
            Cell::Text(self.customer_name.clone()),
            Cell::Number(self.items as f64),
            Cell::Number(self.total),
            Cell::Text(self.status.clone()),
            self.last_contact_date.map(Cell::Date).unwrap_or(Cell::Empty),
        ]
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct VisitExport {
    pub id: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub contact_name: String,
    pub customer_id: Option<String>,
    pub address: Option<String>,
    pub status: String,
}

impl From<&Visit> for VisitExport {
    fn from(v: &Visit) -> Self {
        Self {
            id: v.id.clone(),
            date: v.date,
            time: v.time.map(|t| t.format("%H:%M").to_string()),
            contact_name: v.contact_name.clone(),
            customer_id: v.customer_id.clone(),
            address: v.address.clone(),
            status: v.status.as_str().to_string(),
        }
    }
}

impl ExportRow for VisitExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "date",
            "time",
            "contact_name",
            "customer_id",
            "address",
            "status",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.id.clone()),
            Cell::Date(self.date),
            Cell::opt_text(&self.time),
            Cell::Text(self.contact_name.clone()),
            Cell::opt_text(&self.customer_id),
            Cell::opt_text(&self.address),
            Cell::Text(self.status.clone()),
        ]
    }
}
