pub mod chart_writer;
pub mod report_presenter;

pub use chart_writer::{Bar, BarChart};
pub use report_presenter::{format_value, OutputFormat, ReportPresenter};
