pub mod archive;
pub mod error;
pub mod excel_reader;
pub mod executor;
pub mod font_metrics;
pub mod grouping;
pub mod layout;
pub mod pdf_renderer;

pub use error::ReportError;
pub use executor::{generate_reports, ReportBundle, ReportOptions};
