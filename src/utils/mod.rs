pub mod colors;
pub mod date;
pub mod formatting;
pub mod geo;
pub mod table;

pub use formatting::format_hm;
