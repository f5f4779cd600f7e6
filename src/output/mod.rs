//! Output formats for scaling reports

pub mod csv_export;
pub mod json_export;
pub mod table;

pub use csv_export::CsvExporter;
pub use json_export::JsonExporter;
pub use table::{SummaryTable, NO_DATA_MESSAGE};
