use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    #[default]
    Light,
    Dark,
}

impl AppTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppTheme::Light => "light",
            AppTheme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(AppTheme::Light),
            "dark" => Ok(AppTheme::Dark),
            other => Err(AppError::InvalidTheme(other.to_string())),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AppTheme::Light => AppTheme::Dark,
            AppTheme::Dark => AppTheme::Light,
        }
    }
}

pub const DEFAULT_CONTACT_INTERVAL_DAYS: u32 = 85;
pub const DEFAULT_USER_NAME: &str = "Vendedor Master";
pub const DEFAULT_EMAIL: &str = "contato@controlarva.com";

/// Singleton user settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: AppTheme,
    pub contact_interval_days: u32,
    pub user_name: String,
    pub email: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: AppTheme::Light,
            contact_interval_days: DEFAULT_CONTACT_INTERVAL_DAYS,
            user_name: DEFAULT_USER_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}
