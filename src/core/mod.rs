pub mod aftersales;
pub mod backup;
pub mod customers;
pub mod dashboard;
pub mod goals;
pub mod log;
pub mod navigation;
pub mod sales;
pub mod session;
pub mod store;
pub mod visits;
