use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{column}' not found in header of {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("Invalid value '{value}' in column '{column}' at line {line} of {}", .path.display())]
    Conversion {
        column: String,
        value: String,
        line: u64,
        path: PathBuf,
    },

    #[error("No usable rows in {}", .path.display())]
    NoRows { path: PathBuf },

    #[error("Invalid month '{0}'. Please enter a valid month in the format MM")]
    InvalidMonth(String),

    #[error("Invalid period '{0}'. Expected the format YYYY/MM")]
    InvalidPeriod(String),

    #[error("The folder path '{}' does not exist", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WeatherError {
    /// Errors caused by the contents of a single data file, which can be
    /// isolated to that file when scanning leniently.
    pub fn is_file_level(&self) -> bool {
        matches!(
            self,
            WeatherError::Csv(_)
                | WeatherError::MissingColumn { .. }
                | WeatherError::Conversion { .. }
                | WeatherError::NoRows { .. }
        )
    }
}
