use crate::error::{Result, WeatherError};
use crate::models::{Extreme, FileExtremes, WeatherRecord};
use crate::readers::ParsedFile;
use std::path::Path;
use tracing::debug;

/// Finds the extremes of one file and the date of the row holding each.
pub struct ExtremaFinder;

impl ExtremaFinder {
    pub fn new() -> Self {
        Self
    }

    /// Every filtered row is converted first, so any unparseable cell fails
    /// the file even if it would not have been an extreme.
    pub fn find_extremes(&self, parsed: &ParsedFile) -> Result<FileExtremes> {
        if parsed.is_empty() {
            return Err(WeatherError::NoRows {
                path: parsed.path.clone(),
            });
        }

        let records = parsed.records()?;
        self.find_in_records(&records, &parsed.path)
    }

    /// Single pass tracking each extreme together with its row. Comparisons
    /// are strict, so the first row reaching an extreme keeps it.
    pub fn find_in_records(&self, records: &[WeatherRecord], source: &Path) -> Result<FileExtremes> {
        let (first, rest) = records.split_first().ok_or_else(|| WeatherError::NoRows {
            path: source.to_path_buf(),
        })?;

        let mut max_temperature = Extreme::new(first.max_temperature_c, first.date);
        let mut min_temperature = Extreme::new(first.min_temperature_c, first.date);
        let mut max_humidity = Extreme::new(first.max_humidity, first.date);

        for record in rest {
            if record.max_temperature_c > max_temperature.value {
                max_temperature = Extreme::new(record.max_temperature_c, record.date);
            }
            if record.min_temperature_c < min_temperature.value {
                min_temperature = Extreme::new(record.min_temperature_c, record.date);
            }
            if record.max_humidity > max_humidity.value {
                max_humidity = Extreme::new(record.max_humidity, record.date);
            }
        }

        debug!(
            "{}: max {} on {}, min {} on {}, humidity {} on {}",
            source.display(),
            max_temperature.value,
            max_temperature.date,
            min_temperature.value,
            min_temperature.date,
            max_humidity.value,
            max_humidity.date
        );

        Ok(FileExtremes {
            source: source.to_path_buf(),
            max_temperature,
            min_temperature,
            max_humidity,
        })
    }
}

impl Default for ExtremaFinder {
    fn default() -> Self {
        Self::new()
    }
}
