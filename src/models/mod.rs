pub mod customer;
pub mod goal;
pub mod sale;
pub mod settings;
pub mod visit;

pub use customer::Customer;
pub use goal::{Goal, GoalMetric};
pub use sale::{AfterSaleStatus, Sale, SaleItem};
pub use settings::{AppTheme, Settings};
pub use visit::{Visit, VisitStatus};
