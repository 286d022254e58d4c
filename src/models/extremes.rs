use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single extreme value and the date of the row it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme<T> {
    pub value: T,
    pub date: NaiveDate,
}

impl<T> Extreme<T> {
    pub fn new(value: T, date: NaiveDate) -> Self {
        Self { value, date }
    }
}

/// Extremes of one data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileExtremes {
    pub source: PathBuf,
    pub max_temperature: Extreme<f64>,
    pub min_temperature: Extreme<f64>,
    pub max_humidity: Extreme<i32>,
}

/// A file left out of a lenient scan, with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Global extremes across a set of files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremesSummary {
    pub max_temperature: Extreme<f64>,
    pub min_temperature: Extreme<f64>,
    pub max_humidity: Extreme<i32>,
    pub files_processed: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
}

impl ExtremesSummary {
    /// Reduce per-file extremes in order. Comparisons are strict, so on ties
    /// the earliest file keeps the extreme. Returns `None` for no files.
    pub fn from_files<'a, I>(files: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a FileExtremes>,
    {
        files.into_iter().fold(None, |summary, file| {
            Some(match summary {
                None => Self::seed(file),
                Some(summary) => summary.merge(file),
            })
        })
    }

    fn seed(file: &FileExtremes) -> Self {
        Self {
            max_temperature: file.max_temperature,
            min_temperature: file.min_temperature,
            max_humidity: file.max_humidity,
            files_processed: 1,
            skipped: Vec::new(),
        }
    }

    fn merge(mut self, file: &FileExtremes) -> Self {
        if file.max_temperature.value > self.max_temperature.value {
            self.max_temperature = file.max_temperature;
        }
        if file.min_temperature.value < self.min_temperature.value {
            self.min_temperature = file.min_temperature;
        }
        if file.max_humidity.value > self.max_humidity.value {
            self.max_humidity = file.max_humidity;
        }
        self.files_processed += 1;
        self
    }

    pub fn with_skipped(mut self, skipped: Vec<SkippedFile>) -> Self {
        self.skipped = skipped;
        self
    }
}

/// Arithmetic means of per-file extremes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AveragesSummary {
    pub avg_max_temperature: f64,
    pub avg_min_temperature: f64,
    pub avg_max_humidity: f64,
    pub files_processed: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
}

impl AveragesSummary {
    /// Returns `None` when there are no files, so no division happens.
    pub fn from_files<'a, I>(files: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a FileExtremes>,
    {
        let (high, low, humidity, count) = files.into_iter().fold(
            (0.0f64, 0.0f64, 0i64, 0usize),
            |(high, low, humidity, count), file| {
                (
                    high + file.max_temperature.value,
                    low + file.min_temperature.value,
                    humidity + i64::from(file.max_humidity.value),
                    count + 1,
                )
            },
        );

        if count == 0 {
            return None;
        }

        let n = count as f64;
        Some(Self {
            avg_max_temperature: high / n,
            avg_min_temperature: low / n,
            avg_max_humidity: humidity as f64 / n,
            files_processed: count,
            skipped: Vec::new(),
        })
    }

    pub fn with_skipped(mut self, skipped: Vec<SkippedFile>) -> Self {
        self.skipped = skipped;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, month, day).unwrap()
    }

    fn file(name: &str, max: (f64, u32), min: (f64, u32), humidity: (i32, u32)) -> FileExtremes {
        FileExtremes {
            source: PathBuf::from(name),
            max_temperature: Extreme::new(max.0, date(1, max.1)),
            min_temperature: Extreme::new(min.0, date(1, min.1)),
            max_humidity: Extreme::new(humidity.0, date(1, humidity.1)),
        }
    }

    #[test]
    fn test_extremes_from_no_files() {
        assert!(ExtremesSummary::from_files(&Vec::<FileExtremes>::new()).is_none());
    }

    #[test]
    fn test_extremes_picks_each_extreme_independently() {
        let files = vec![
            file("a.txt", (30.0, 1), (10.0, 2), (90, 3)),
            file("b.txt", (35.0, 4), (12.0, 5), (60, 6)),
            file("c.txt", (20.0, 7), (-2.5, 8), (70, 9)),
        ];

        let summary = ExtremesSummary::from_files(&files).unwrap();

        assert_eq!(summary.max_temperature, Extreme::new(35.0, date(1, 4)));
        assert_eq!(summary.min_temperature, Extreme::new(-2.5, date(1, 8)));
        assert_eq!(summary.max_humidity, Extreme::new(90, date(1, 3)));
        assert_eq!(summary.files_processed, 3);
    }

    #[test]
    fn test_extremes_negative_maximum_is_kept() {
        let files = vec![
            file("a.txt", (-5.0, 1), (-12.0, 2), (40, 3)),
            file("b.txt", (-7.0, 4), (-9.0, 5), (30, 6)),
        ];

        let summary = ExtremesSummary::from_files(&files).unwrap();

        assert_eq!(summary.max_temperature.value, -5.0);
        assert_eq!(summary.min_temperature.value, -12.0);
    }

    #[test]
    fn test_extremes_ties_keep_first_file() {
        let files = vec![
            file("a.txt", (30.0, 1), (10.0, 2), (80, 3)),
            file("b.txt", (30.0, 11), (10.0, 12), (80, 13)),
        ];

        let summary = ExtremesSummary::from_files(&files).unwrap();

        assert_eq!(summary.max_temperature.date, date(1, 1));
        assert_eq!(summary.min_temperature.date, date(1, 2));
        assert_eq!(summary.max_humidity.date, date(1, 3));
    }

    #[test]
    fn test_averages() {
        let files = vec![
            file("a.txt", (30.0, 1), (10.0, 2), (80, 3)),
            file("b.txt", (20.0, 4), (5.0, 5), (61, 6)),
        ];

        let averages = AveragesSummary::from_files(&files).unwrap();

        assert_eq!(averages.avg_max_temperature, 25.0);
        assert_eq!(averages.avg_min_temperature, 7.5);
        assert_eq!(averages.avg_max_humidity, 70.5);
        assert_eq!(averages.files_processed, 2);
    }

    #[test]
    fn test_averages_from_no_files() {
        assert!(AveragesSummary::from_files(&Vec::<FileExtremes>::new()).is_none());
    }
}
