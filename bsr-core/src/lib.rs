pub mod date_range;
pub mod dates;
pub mod error;
pub mod records;
pub mod season;
