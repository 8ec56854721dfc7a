pub mod colors;
pub mod date;
pub mod formatting;
pub mod ids;
pub mod path;
pub mod table;

pub use formatting::money;
