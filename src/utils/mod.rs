// Utils compartidos

pub mod date;

pub use date::format_date;
