use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A customer record, referenced by sales and visits through `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String, // ISO 8601
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            address: None,
            city: None,
            notes: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Creation date, when `created_at` is a valid RFC 3339 timestamp.
    pub fn created_on(&self) -> Option<chrono::NaiveDate> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.date_naive())
    }
}
