pub mod extremes;
pub mod weather;

pub use extremes::{AveragesSummary, Extreme, ExtremesSummary, FileExtremes, SkippedFile};
pub use weather::WeatherRecord;
